//! The main polling loop: read the stick, drive the LEDs, redraw the OLED.
//!
//! [`Tick`] is one iteration's decisions as plain data, so it can be checked on
//! the host. [`JoystickPanel`] owns the devices and applies a `Tick` every
//! [`LOOP_PERIOD`].

#[cfg(not(feature = "host"))]
use core::convert::Infallible;

use embassy_time::Duration;

#[cfg(not(feature = "host"))]
use defmt::info;
#[cfg(not(feature = "host"))]
use embassy_time::Timer;
#[cfg(not(feature = "host"))]
use embedded_hal::i2c::I2c;

use crate::joystick::{JoystickReading, LedLevels};
use crate::scene::Scene;
#[cfg(not(feature = "host"))]
use crate::{
    Result, joystick::Joystick, led_pair::LedPair, oled::Oled, toggle::PanelState,
};

/// Delay between loop iterations.
pub const LOOP_PERIOD: Duration = Duration::from_millis(50);

// ============================================================================
// Tick
// ============================================================================

/// What one loop iteration does with a reading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tick {
    /// The reading this tick was computed from.
    pub reading: JoystickReading,
    /// New LED levels, or `None` to leave the PWM untouched.
    pub levels: Option<LedLevels>,
    /// The picture to show.
    pub scene: Scene,
}

impl Tick {
    /// Decide LED levels and the scene for `reading`.
    ///
    /// Active LEDs follow the reading. Inactive LEDs keep their last level,
    /// unless `blank_requested` (button A switched them off), which darkens them.
    #[must_use]
    pub fn new(reading: JoystickReading, leds_active: bool, blank_requested: bool) -> Self {
        let levels = match (leds_active, blank_requested) {
            (true, _) => Some(reading.led_levels()),
            (false, true) => Some(LedLevels::OFF),
            (false, false) => None,
        };
        Self {
            reading,
            levels,
            scene: Scene::new(reading, leds_active),
        }
    }
}

// ============================================================================
// JoystickPanel
// ============================================================================

/// The assembled firmware: joystick, LED pair, OLED, and the shared toggle state.
///
/// Buttons run in their own tasks (see [`spawn_toggle_button`](crate::button::spawn_toggle_button))
/// and only touch `panel_state`.
#[cfg(not(feature = "host"))]
pub struct JoystickPanel<'d, I2C> {
    joystick: Joystick<'d>,
    leds: LedPair<'d>,
    oled: Oled<I2C>,
    panel_state: &'static PanelState,
}

#[cfg(not(feature = "host"))]
impl<'d, I2C> JoystickPanel<'d, I2C>
where
    I2C: I2c,
{
    /// Bundles already-initialized devices.
    #[must_use]
    pub const fn new(
        joystick: Joystick<'d>,
        leds: LedPair<'d>,
        oled: Oled<I2C>,
        panel_state: &'static PanelState,
    ) -> Self {
        Self {
            joystick,
            leds,
            oled,
            panel_state,
        }
    }

    /// Runs one iteration and returns what it did.
    ///
    /// # Errors
    ///
    /// Propagates ADC and OLED failures.
    pub async fn step(&mut self) -> Result<Tick> {
        let reading = self.joystick.read().await?;
        info!("joystick x={} y={}", reading.x.raw(), reading.y.raw());

        let blank_requested = self.panel_state.take_blank_request();
        let tick = Tick::new(reading, self.panel_state.is_active(), blank_requested);
        if let Some(levels) = tick.levels {
            self.leds.set_levels(levels);
        }

        info!(
            "cursor column={} row={}",
            tick.scene.cursor.x,
            reading.row_offset()
        );
        self.oled.show(&tick.scene)?;
        Ok(tick)
    }

    /// Loops forever, one [`step`](Self::step) per [`LOOP_PERIOD`].
    ///
    /// # Errors
    ///
    /// Returns the first ADC or OLED failure; there is no retry.
    pub async fn run(mut self) -> Result<Infallible> {
        info!("joystick panel running");
        loop {
            self.step().await?;
            Timer::after(LOOP_PERIOD).await;
        }
    }
}
