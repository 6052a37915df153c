//! A device abstraction for push buttons that wake on a GPIO edge interrupt,
//! plus the background task that turns presses into panel toggles.
//!
//! See [`Button`] and [`spawn_toggle_button`] for usage.

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_time::Instant;

use crate::toggle::{PanelState, ToggleButton};
use crate::{Error, Result};

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. A press is a rising edge.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can cause pins to stay HIGH after button release. Use Ground instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. A press is a falling edge.
    Ground,
}

// ============================================================================
// Button Virtual Device
// ============================================================================

/// A push button whose presses are edges reported by the GPIO interrupt.
///
/// The button itself does no debouncing: every edge is reported. Debouncing is
/// time-based and shared, see [`PanelState`].
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use joystick_panel::button::{Button, PressedTo};
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// async fn example(p: embassy_rp::Peripherals) {
///     let mut button = Button::new(p.PIN_5, PressedTo::Ground);
///     button.wait_for_press().await;
/// }
/// ```
pub struct Button<'a> {
    input: Input<'a>,
    pressed_to: PressedTo,
}

impl<'a> Button<'a> {
    /// Creates a new `Button` instance from a pin.
    ///
    /// The pin is configured based on the connection type:
    /// - [`PressedTo::Voltage`]: Uses internal pull-down (button to 3.3V)
    /// - [`PressedTo::Ground`]: Uses internal pull-up (button to GND)
    #[must_use]
    pub fn new<P: Pin>(pin: Peri<'a, P>, pressed_to: PressedTo) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            input: Input::new(pin, pull),
            pressed_to,
        }
    }

    /// Waits for the next press edge. Does not wait for release.
    pub async fn wait_for_press(&mut self) {
        match self.pressed_to {
            PressedTo::Voltage => self.input.wait_for_rising_edge().await,
            PressedTo::Ground => self.input.wait_for_falling_edge().await,
        }
    }
}

// ============================================================================
// Toggle task
// ============================================================================

/// Spawns the background task that feeds `button` presses into `panel_state`.
///
/// `green_led`, if given, is driven to follow [`PanelState::is_green_on`] after
/// every accepted press.
///
/// # Errors
///
/// Returns [`Error::TaskSpawn`] if no task slot is free (at most two toggle buttons).
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use embassy_executor::Spawner;
/// use embassy_rp::gpio::{Level, Output};
/// use joystick_panel::button::{Button, PressedTo, spawn_toggle_button};
/// use joystick_panel::toggle::{PanelState, ToggleButton};
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// static PANEL_STATE: PanelState = PanelState::new();
///
/// fn example(p: embassy_rp::Peripherals, spawner: Spawner) -> joystick_panel::Result<()> {
///     let green_led = Output::new(p.PIN_11, Level::Low);
///     let joystick_button = Button::new(p.PIN_22, PressedTo::Ground);
///     spawn_toggle_button(spawner, joystick_button, ToggleButton::Joystick, &PANEL_STATE, Some(green_led))?;
///     Ok(())
/// }
/// ```
pub fn spawn_toggle_button(
    spawner: Spawner,
    button: Button<'static>,
    toggle_button: ToggleButton,
    panel_state: &'static PanelState,
    green_led: Option<Output<'static>>,
) -> Result<()> {
    let token = toggle_button_task(button, toggle_button, panel_state, green_led);
    spawner.spawn(token).map_err(Error::TaskSpawn)
}

#[embassy_executor::task(pool_size = 2)]
async fn toggle_button_task(
    mut button: Button<'static>,
    toggle_button: ToggleButton,
    panel_state: &'static PanelState,
    mut green_led: Option<Output<'static>>,
) -> ! {
    info!("toggle button {} watching", toggle_button);
    loop {
        button.wait_for_press().await;
        let Some(toggle) = panel_state.press(toggle_button, Instant::now()) else {
            continue; // bounce
        };

        if let (Some(green_led), Some(green_on)) = (green_led.as_mut(), toggle.green_on) {
            green_led.set_level(Level::from(green_on));
        }
        match toggle.button {
            ToggleButton::Joystick => {
                info!("green LED and display border toggled (active={})", toggle.active);
            }
            ToggleButton::A => {
                info!("blue and red LEDs toggled (active={})", toggle.active);
            }
        }
    }
}
