//! An in-memory monochrome frame for rendering scenes without a display attached.
//!
//! See [`MonoFrame`] for usage.

use core::convert::Infallible;
use core::ops::{Index, IndexMut};

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
};

/// A `W`x`H` grid of on/off pixels that [`embedded-graphics`](https://docs.rs/embedded-graphics)
/// can draw into.
///
/// Out-of-bounds pixels are silently dropped, matching the SSD1306 buffer.
///
/// # Example
///
/// ```rust
/// use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
/// use joystick_panel::frame::MonoFrame;
///
/// let mut frame = MonoFrame::<16, 8>::new();
/// Rectangle::new(Point::new(1, 1), Size::new(3, 3))
///     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
///     .draw(&mut frame)
///     .expect("drawing into a MonoFrame cannot fail");
///
/// assert_eq!(frame[(1, 1)], BinaryColor::On);
/// assert_eq!(frame[(0, 0)], BinaryColor::Off);
/// assert_eq!(frame.lit_count(), 9);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonoFrame<const W: usize, const H: usize>(pub [[BinaryColor; W]; H]);

impl<const W: usize, const H: usize> MonoFrame<W, H> {
    /// Frame width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Frame height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Frame dimensions as a [`Size`].
    pub const SIZE: Size = Size::new(W as u32, H as u32);

    /// A blank (all off) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[BinaryColor::Off; W]; H])
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0
            .iter()
            .flatten()
            .filter(|pixel| pixel.is_on())
            .count()
    }

    /// Whether the pixel at `point` is lit. Points outside the frame read as off.
    #[must_use]
    pub fn is_lit(&self, point: Point) -> bool {
        let (Ok(x_index), Ok(y_index)) = (usize::try_from(point.x), usize::try_from(point.y))
        else {
            return false;
        };
        self.0
            .get(y_index)
            .and_then(|row| row.get(x_index))
            .is_some_and(|pixel| pixel.is_on())
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for MonoFrame<W, H> {
    type Output = BinaryColor;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for MonoFrame<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> Default for MonoFrame<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for MonoFrame<W, H> {
    fn size(&self) -> Size {
        Self::SIZE
    }
}

impl<const W: usize, const H: usize> DrawTarget for MonoFrame<W, H> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if let Some(pixel) = self.0.get_mut(y_index).and_then(|row| row.get_mut(x_index)) {
                *pixel = color;
            }
        }
        Ok(())
    }
}
