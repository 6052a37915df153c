//! The picture shown on the OLED each loop iteration.
//!
//! A [`Scene`] is an [`embedded-graphics`](https://docs.rs/embedded-graphics)
//! [`Drawable`], so it renders the same way into the SSD1306 buffer on the board
//! and into a [`MonoFrame`](crate::frame::MonoFrame) in host tests.
//!
//! Layout on the 128x64 panel:
//!
//! - an inner frame, always drawn, 1 px wide at (3, 3), 122x58;
//! - an outer border at (2, 2), 124x60, drawn only while the LEDs are inactive;
//! - a filled 8x8 square whose top-left corner is the joystick cursor.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Drawable, Point, Primitive, Size},
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::joystick::JoystickReading;

// ============================================================================
// Constants
// ============================================================================

/// Panel width in pixels.
pub const PANEL_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const PANEL_HEIGHT: u32 = 64;

/// Edge length of the indicator square, in panel coordinates.
pub const SQUARE_SIDE: i32 = 8;

/// Edge length of the indicator square.
pub const SQUARE_SIZE: u32 = SQUARE_SIDE.unsigned_abs();

/// Always-on frame around the play area.
pub const INNER_FRAME: Rectangle = Rectangle::new(Point::new(3, 3), Size::new(122, 58));

/// Extra border shown while the deflection LEDs are switched off.
pub const OUTER_BORDER: Rectangle = Rectangle::new(Point::new(2, 2), Size::new(124, 60));

// ============================================================================
// Scene
// ============================================================================

/// Everything needed to redraw the panel from scratch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scene {
    /// Top-left corner of the indicator square.
    pub cursor: Point,
    /// Draw [`OUTER_BORDER`] as well.
    pub border: bool,
}

impl Scene {
    /// Scene for a joystick reading. The border shows when the LEDs are inactive.
    #[must_use]
    pub fn new(reading: JoystickReading, leds_active: bool) -> Self {
        Self {
            cursor: reading.cursor(),
            border: !leds_active,
        }
    }

    /// The indicator square's bounds.
    #[must_use]
    pub const fn square(&self) -> Rectangle {
        Rectangle::new(self.cursor, Size::new(SQUARE_SIZE, SQUARE_SIZE))
    }
}

impl Drawable for Scene {
    type Color = BinaryColor;
    type Output = ();

    /// Draws lit pixels only; clear the target first.
    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        if self.border {
            OUTER_BORDER.into_styled(stroke).draw(target)?;
        }
        INNER_FRAME.into_styled(stroke).draw(target)?;
        self.square()
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(target)
    }
}
