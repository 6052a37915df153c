//! Joystick readings and the arithmetic that turns them into LED levels and a
//! display position.
//!
//! The math here is host-testable. The ADC device abstraction lives in
//! [`Joystick`] (embedded builds only).
//!
//! # Example
//!
//! ```rust
//! use joystick_panel::joystick::{AxisReading, JoystickReading};
//!
//! let reading = JoystickReading::new(AxisReading::new(4095), AxisReading::new(2048));
//! let levels = reading.led_levels();
//! assert_eq!(levels.blue, 2047); // full right
//! assert_eq!(levels.red, 0); // centered
//! ```

use embedded_graphics::prelude::Point;

use crate::scene::SQUARE_SIDE;

#[cfg(not(feature = "host"))]
mod adc_joystick;
#[cfg(not(feature = "host"))]
pub use adc_joystick::{AdcIrqs, Joystick};

// ============================================================================
// Constants
// ============================================================================

/// Largest value a 12-bit ADC conversion can produce.
pub const ADC_MAX: u16 = 4095;

/// Reading of a centered stick. LED levels measure distance from here.
pub const ADC_MIDPOINT: u16 = 2048;

/// Number of distinct ADC values (`ADC_MAX + 1`), the denominator of the cursor mapping.
const ADC_SPAN: i32 = 4096;

/// Cursor rows available before the square's half-size offset is subtracted.
const ROW_SPAN: i32 = 60;

/// Cursor columns available across the full Y range.
const COLUMN_SPAN: i32 = 120;

/// Half the square's edge, subtracted from every row.
const HALF_SQUARE: i32 = SQUARE_SIDE / 2;

/// Row of the square for an X reading of 0, the bottom of its travel.
const MAX_ROW: i32 = ROW_SPAN - HALF_SQUARE;

// ============================================================================
// AxisReading
// ============================================================================

/// One 12-bit ADC conversion of a joystick axis (`0..=4095`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub struct AxisReading(u16);

impl AxisReading {
    /// Wrap a raw conversion, clamping anything above [`ADC_MAX`].
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        if raw > ADC_MAX {
            Self(ADC_MAX)
        } else {
            Self(raw)
        }
    }

    /// A centered axis.
    pub const CENTER: Self = Self(ADC_MIDPOINT);

    /// The raw conversion value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// PWM level for this axis: distance from [`ADC_MIDPOINT`], in either direction.
    ///
    /// At or above the midpoint this is `reading - midpoint` (`0..=2047`);
    /// below it is `midpoint - reading` (`1..=2048`).
    #[must_use]
    pub const fn led_level(self) -> u16 {
        self.0.abs_diff(ADC_MIDPOINT)
    }
}

impl From<u16> for AxisReading {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}

// ============================================================================
// LedLevels
// ============================================================================

/// Duty-cycle compare values for the two deflection LEDs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub struct LedLevels {
    /// Blue LED, follows the X axis.
    pub blue: u16,
    /// Red LED, follows the Y axis.
    pub red: u16,
}

impl LedLevels {
    /// Both LEDs dark.
    pub const OFF: Self = Self { blue: 0, red: 0 };
}

// ============================================================================
// JoystickReading
// ============================================================================

/// Both axes, sampled back to back in one loop iteration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, defmt::Format)]
pub struct JoystickReading {
    /// Horizontal axis (ADC0 / GPIO 26).
    pub x: AxisReading,
    /// Vertical axis (ADC1 / GPIO 27).
    pub y: AxisReading,
}

impl JoystickReading {
    /// Pair up two axis readings.
    #[must_use]
    pub const fn new(x: AxisReading, y: AxisReading) -> Self {
        Self { x, y }
    }

    /// Stick at rest.
    pub const CENTERED: Self = Self::new(AxisReading::CENTER, AxisReading::CENTER);

    /// LED levels proportional to deflection: blue from X, red from Y.
    #[must_use]
    pub const fn led_levels(self) -> LedLevels {
        LedLevels {
            blue: self.x.led_level(),
            red: self.y.led_level(),
        }
    }

    /// Signed row of the indicator square before it is folded onto the panel.
    ///
    /// Full X gives `-3`: readings above 3891 would put the square above the
    /// top edge.
    #[must_use]
    pub fn row_offset(self) -> i32 {
        let x = i32::from(self.x.raw());
        ROW_SPAN - x * ROW_SPAN / ADC_SPAN - HALF_SQUARE
    }

    /// Top-left corner of the indicator square on the 128x64 panel.
    ///
    /// X moves the square vertically (X of 3891 reaches the top row), Y moves it
    /// horizontally. A negative [`row_offset`](Self::row_offset) is mirrored back
    /// onto the panel, so the last few X readings bounce down to rows 1..=3.
    #[must_use]
    pub fn cursor(self) -> Point {
        let y = i32::from(self.y.raw());
        let column = y * COLUMN_SPAN / ADC_SPAN;
        Point::new(column, self.row_offset().abs())
    }
}

/// Smallest reading that maps to a cursor position, inverting [`JoystickReading::cursor`].
///
/// For every reading, `cursor_to_reading(reading.cursor()).cursor() == reading.cursor()`.
/// When the reading's row was not mirrored, each recovered axis also lies within
/// one cursor step of the reading.
#[must_use]
pub fn cursor_to_reading(cursor: Point) -> JoystickReading {
    let row = cursor.y.clamp(0, MAX_ROW);
    let column = cursor.x.clamp(0, COLUMN_SPAN - 1);
    let x = ceil_div((MAX_ROW - row) * ADC_SPAN, ROW_SPAN);
    let y = ceil_div(column * ADC_SPAN, COLUMN_SPAN);
    JoystickReading::new(axis_from_i32(x), axis_from_i32(y))
}

const fn ceil_div(numerator: i32, denominator: i32) -> i32 {
    (numerator + denominator - 1) / denominator
}

fn axis_from_i32(value: i32) -> AxisReading {
    AxisReading::new(u16::try_from(value.clamp(0, i32::from(ADC_MAX))).unwrap_or(ADC_MAX))
}
