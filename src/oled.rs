//! A device abstraction for the 128x64 SSD1306 OLED on an I2C bus.
//!
//! See [`Oled`] for usage.

use defmt::info;
use embassy_rp::i2c;
use embedded_graphics::prelude::Drawable;
use embedded_hal::i2c::I2c;
use ssd1306::mode::{BufferedGraphicsMode, DisplayConfig};
use ssd1306::prelude::{DisplayRotation, DisplaySize128x64, I2CInterface};
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::scene::Scene;
use crate::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// 7-bit I2C address of the panel.
pub const OLED_ADDRESS: u8 = 0x3C;

/// Bus clock for the panel.
pub const OLED_BUS_HZ: u32 = 400_000;

/// I2C settings for the panel: 400 kHz with the internal pull-ups enabled.
#[must_use]
pub fn bus_config() -> i2c::Config {
    let mut config = i2c::Config::default();
    config.frequency = OLED_BUS_HZ;
    config.sda_pullup = true;
    config.scl_pullup = true;
    config
}

type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The OLED, driven in buffered mode: every [`show`](Self::show) redraws the whole panel.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use embassy_rp::i2c::I2c;
/// use joystick_panel::{joystick::JoystickReading, oled::{self, Oled}, scene::Scene};
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// fn example(p: embassy_rp::Peripherals) -> joystick_panel::Result<()> {
///     let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, oled::bus_config());
///     let mut oled = Oled::new(i2c)?;
///     oled.show(&Scene::new(JoystickReading::CENTERED, true))?;
///     Ok(())
/// }
/// ```
pub struct Oled<I2C> {
    display: Display<I2C>,
}

impl<I2C> Oled<I2C>
where
    I2C: I2c,
{
    /// Initializes the controller at [`OLED_ADDRESS`] and blanks the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Oled`] if the controller does not acknowledge.
    pub fn new(i2c: I2C) -> Result<Self> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_ADDRESS);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(Error::Oled)?;
        display.clear_buffer();
        display.flush().map_err(Error::Oled)?;
        info!("oled ready at {=u8:#x}", OLED_ADDRESS);
        Ok(Self { display })
    }

    /// Clears the buffer, draws `scene`, and sends the whole frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Oled`] if the transfer fails.
    pub fn show(&mut self, scene: &Scene) -> Result<()> {
        self.display.clear_buffer();
        scene.draw(&mut self.display).map_err(Error::Oled)?;
        self.display.flush().map_err(Error::Oled)
    }
}
