#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for joystick-to-LED level scaling.

use joystick_panel::joystick::{ADC_MAX, ADC_MIDPOINT, AxisReading, JoystickReading, LedLevels};
use embassy_time::{Duration, Instant};
use joystick_panel::panel::Tick;
use joystick_panel::toggle::{PanelState, ToggleButton};

#[test]
fn level_above_midpoint_is_reading_minus_midpoint() {
    for raw in ADC_MIDPOINT..=ADC_MAX {
        assert_eq!(AxisReading::new(raw).led_level(), raw - ADC_MIDPOINT);
    }
}

#[test]
fn level_below_midpoint_is_midpoint_minus_reading() {
    for raw in 0..ADC_MIDPOINT {
        assert_eq!(AxisReading::new(raw).led_level(), ADC_MIDPOINT - raw);
    }
}

#[test]
fn extremes_and_center() {
    assert_eq!(AxisReading::new(0).led_level(), 2048);
    assert_eq!(AxisReading::new(ADC_MAX).led_level(), 2047);
    assert_eq!(AxisReading::CENTER.led_level(), 0);
}

#[test]
fn readings_above_adc_range_are_clamped() {
    assert_eq!(AxisReading::new(u16::MAX).raw(), ADC_MAX);
    assert_eq!(AxisReading::from(5000).led_level(), 2047);
}

#[test]
fn blue_follows_x_and_red_follows_y() {
    let reading = JoystickReading::new(AxisReading::new(3000), AxisReading::new(1000));
    assert_eq!(
        reading.led_levels(),
        LedLevels {
            blue: 3000 - 2048,
            red: 2048 - 1000,
        }
    );
}

#[test]
fn inactive_tick_leaves_leds_alone() {
    let reading = JoystickReading::new(AxisReading::new(4000), AxisReading::new(100));

    let active = Tick::new(reading, true, false);
    assert_eq!(active.levels, Some(reading.led_levels()));
    assert!(!active.scene.border);

    let inactive = Tick::new(reading, false, false);
    assert_eq!(inactive.levels, None);
    assert!(inactive.scene.border);
    assert_eq!(inactive.scene.cursor, active.scene.cursor);
}

#[test]
fn blank_while_inactive_turns_leds_off() {
    let reading = JoystickReading::new(AxisReading::new(4000), AxisReading::new(100));
    let tick = Tick::new(reading, false, true);
    assert_eq!(tick.levels, Some(LedLevels::OFF));
    assert!(tick.scene.border);
}

#[test]
fn blank_then_reactivated_follows_reading() {
    let reading = JoystickReading::new(AxisReading::new(3000), AxisReading::new(1000));
    let tick = Tick::new(reading, true, true);
    assert_eq!(tick.levels, Some(reading.led_levels()));
}

#[test]
fn button_presses_reach_the_pwm_through_tick() {
    let state = PanelState::new();
    let reading = JoystickReading::new(AxisReading::new(3500), AxisReading::new(500));
    let mut now = Instant::from_millis(1_000);
    let next_tick = |state: &PanelState| {
        Tick::new(reading, state.is_active(), state.take_blank_request())
    };

    // Joystick button deactivates without blanking: levels stay where they were.
    assert!(state.press(ToggleButton::Joystick, now).is_some());
    assert_eq!(next_tick(&state).levels, None);

    // Reactivate, then button A switches the LEDs off and darkens them once.
    now += Duration::from_millis(500);
    assert!(state.press(ToggleButton::Joystick, now).is_some());
    assert_eq!(next_tick(&state).levels, Some(reading.led_levels()));
    now += Duration::from_millis(500);
    assert!(state.press(ToggleButton::A, now).is_some());
    assert_eq!(next_tick(&state).levels, Some(LedLevels::OFF));
    assert_eq!(next_tick(&state).levels, None);

    // Button A again: LEDs follow the stick.
    now += Duration::from_millis(500);
    assert!(state.press(ToggleButton::A, now).is_some());
    assert_eq!(next_tick(&state).levels, Some(reading.led_levels()));
}
