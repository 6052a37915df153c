#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests rendering scenes into a monochrome frame.

use embedded_graphics::prelude::{Drawable, Point};
use joystick_panel::frame::MonoFrame;
use joystick_panel::joystick::{AxisReading, JoystickReading};
use joystick_panel::scene::{INNER_FRAME, OUTER_BORDER, SQUARE_SIDE, Scene};

type PanelFrame = MonoFrame<128, 64>;

const SQUARE_PIXELS: usize = 8 * 8;

fn render(scene: &Scene) -> PanelFrame {
    let mut frame = PanelFrame::new();
    scene.draw(&mut frame).expect("drawing into a MonoFrame cannot fail");
    frame
}

/// Pixels on a 1 px rectangle outline of `width` x `height`.
const fn outline_pixels(width: usize, height: usize) -> usize {
    2 * width + 2 * height - 4
}

#[test]
fn active_scene_has_frame_and_square_only() {
    let scene = Scene::new(JoystickReading::CENTERED, true);
    let frame = render(&scene);

    assert!(!scene.border);
    assert!(!frame.is_lit(Point::new(2, 2)));
    assert!(frame.is_lit(Point::new(3, 3)));
    assert!(frame.is_lit(Point::new(124, 60)));

    // Centered square at (60, 26) lies inside the frame, so nothing overlaps.
    assert_eq!(frame.lit_count(), outline_pixels(122, 58) + SQUARE_PIXELS);
}

#[test]
fn inactive_scene_adds_outer_border() {
    let frame = render(&Scene::new(JoystickReading::CENTERED, false));

    for corner in [
        Point::new(2, 2),
        Point::new(125, 2),
        Point::new(2, 61),
        Point::new(125, 61),
    ] {
        assert!(frame.is_lit(corner), "{corner:?} must be lit");
    }
    assert!(!frame.is_lit(Point::new(1, 1)));
    assert!(!frame.is_lit(Point::new(126, 62)));

    assert_eq!(
        frame.lit_count(),
        outline_pixels(124, 60) + outline_pixels(122, 58) + SQUARE_PIXELS
    );
}

#[test]
fn square_is_filled_at_cursor() {
    let reading = JoystickReading::new(AxisReading::new(1000), AxisReading::new(3000));
    let scene = Scene::new(reading, true);
    let frame = render(&scene);
    let top_left = scene.cursor;
    assert_eq!(top_left, Point::new(87, 42));

    for dy in 0..SQUARE_SIDE {
        for dx in 0..SQUARE_SIDE {
            assert!(frame.is_lit(top_left + Point::new(dx, dy)));
        }
    }
    assert!(!frame.is_lit(top_left + Point::new(-1, 0)));
    assert!(!frame.is_lit(top_left + Point::new(SQUARE_SIDE, 0)));
}

#[test]
fn square_at_corner_stays_on_panel() {
    let reading = JoystickReading::new(AxisReading::new(4095), AxisReading::new(4095));
    let scene = Scene::new(reading, true);
    let frame = render(&scene);
    assert_eq!(scene.cursor, Point::new(119, 3));
    assert!(frame.is_lit(Point::new(126, 7)));
    assert!(!frame.is_lit(Point::new(127, 7)));
    assert!(frame.is_lit(Point::new(126, 10)));
    assert!(!frame.is_lit(Point::new(126, 11)));
    assert!(!frame.is_lit(Point::new(119, 2)));
}

#[test]
fn layout_rectangles_match_panel_geometry() {
    assert_eq!(OUTER_BORDER.top_left, Point::new(2, 2));
    assert_eq!(OUTER_BORDER.size.width, 124);
    assert_eq!(OUTER_BORDER.size.height, 60);
    assert_eq!(INNER_FRAME.top_left, Point::new(3, 3));
    assert_eq!(INNER_FRAME.size.width, 122);
    assert_eq!(INNER_FRAME.size.height, 58);
}
