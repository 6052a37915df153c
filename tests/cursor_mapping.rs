#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the reading-to-cursor mapping.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use joystick_panel::joystick::{ADC_MAX, AxisReading, JoystickReading, cursor_to_reading};
use joystick_panel::scene::{PANEL_HEIGHT, PANEL_WIDTH, SQUARE_SIZE};

fn reading(x: u16, y: u16) -> JoystickReading {
    JoystickReading::new(AxisReading::new(x), AxisReading::new(y))
}

/// Largest X reading whose row is not mirrored off the top edge.
const LAST_UNMIRRORED_X: u16 = 3891;

#[test]
fn corners_match_expected() {
    assert_eq!(reading(0, 0).cursor(), Point::new(0, 56));
    assert_eq!(reading(0, ADC_MAX).cursor(), Point::new(119, 56));
    assert_eq!(reading(2048, 2048).cursor(), Point::new(60, 26));
    assert_eq!(reading(LAST_UNMIRRORED_X, 0).cursor(), Point::new(0, 0));
}

#[test]
fn rows_above_the_panel_are_mirrored() {
    for (x, row_offset, row) in [(3892, -1, 1), (3960, -2, 2), (ADC_MAX, -3, 3)] {
        let reading = reading(x, 0);
        assert_eq!(reading.row_offset(), row_offset, "x = {x}");
        assert_eq!(reading.cursor().y, row, "x = {x}");
    }
    assert_eq!(reading(LAST_UNMIRRORED_X, 0).row_offset(), 0);
}

#[test]
fn cursor_row_is_absolute_row_offset() {
    for x in 0..=ADC_MAX {
        let reading = reading(x, 0);
        assert_eq!(reading.cursor().y, reading.row_offset().abs(), "x = {x}");
    }
}

#[test]
fn square_always_fits_on_panel() {
    let panel = Rectangle::new(Point::zero(), Size::new(PANEL_WIDTH, PANEL_HEIGHT));
    for x in (0..=ADC_MAX).step_by(7) {
        for y in (0..=ADC_MAX).step_by(13) {
            let square = Rectangle::new(reading(x, y).cursor(), Size::new_equal(SQUARE_SIZE));
            assert_eq!(panel.intersection(&square), square, "x = {x}, y = {y}");
        }
    }
}

#[test]
fn mapping_is_monotonic() {
    let mut previous = reading(0, 0).cursor();
    for value in 1..=LAST_UNMIRRORED_X {
        let cursor = reading(value, value).cursor();
        assert!(cursor.y <= previous.y, "row must not grow as x grows");
        assert!(cursor.x >= previous.x, "column must not shrink as y grows");
        previous = cursor;
    }
}

#[test]
fn inverse_recovers_reading_up_to_truncation() {
    // One cursor step spans 4096 / 60 X counts and 4096 / 120 Y counts.
    const X_STEP: i32 = 4096 / 60 + 1;
    const Y_STEP: i32 = 4096 / 120 + 1;

    for x in (0..=LAST_UNMIRRORED_X).step_by(5) {
        for y in (0..=ADC_MAX).step_by(11) {
            let original = reading(x, y);
            let cursor = original.cursor();
            let recovered = cursor_to_reading(cursor);

            assert_eq!(recovered.cursor(), cursor, "x = {x}, y = {y}");
            assert!((i32::from(recovered.x.raw()) - i32::from(x)).abs() < X_STEP);
            assert!((i32::from(recovered.y.raw()) - i32::from(y)).abs() < Y_STEP);
        }
    }
}

#[test]
fn inverse_of_mirrored_row_lands_on_the_same_cursor() {
    for x in LAST_UNMIRRORED_X + 1..=ADC_MAX {
        let cursor = reading(x, 1000).cursor();
        let recovered = cursor_to_reading(cursor);
        assert_eq!(recovered.cursor(), cursor, "x = {x}");
        assert!(recovered.x.raw() < LAST_UNMIRRORED_X);
    }
}

#[test]
fn inverse_clamps_points_off_the_panel() {
    assert_eq!(cursor_to_reading(Point::new(-5, -5)).cursor(), Point::new(0, 0));
    assert_eq!(cursor_to_reading(Point::new(500, 500)).cursor(), Point::new(119, 56));
}
