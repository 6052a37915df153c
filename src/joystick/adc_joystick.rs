//! The joystick as a device: two ADC channels sampled on demand.

use embassy_rp::adc::{self, Adc, AdcPin, Async, Channel, InterruptHandler};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::ADC;
use embassy_rp::{Peri, bind_interrupts};

use super::{AxisReading, JoystickReading};
use crate::{Error, Result};

bind_interrupts!(
    /// ADC FIFO interrupt binding used by [`Joystick`].
    pub struct AdcIrqs {
        ADC_IRQ_FIFO => InterruptHandler;
    }
);

/// A 2-axis analog joystick wired to two ADC-capable pins.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use joystick_panel::joystick::Joystick;
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// async fn example(p: embassy_rp::Peripherals) -> joystick_panel::Result<()> {
///     let mut joystick = Joystick::new(p.ADC, p.PIN_26, p.PIN_27);
///     let reading = joystick.read().await?;
///     defmt::info!("x={} y={}", reading.x.raw(), reading.y.raw());
///     Ok(())
/// }
/// ```
pub struct Joystick<'d> {
    adc: Adc<'d, Async>,
    x_channel: Channel<'d>,
    y_channel: Channel<'d>,
}

impl<'d> Joystick<'d> {
    /// Claims the ADC and both axis pins. Axis pins float (no pull).
    #[must_use]
    pub fn new(
        adc: Peri<'d, ADC>,
        x_pin: Peri<'d, impl AdcPin + 'd>,
        y_pin: Peri<'d, impl AdcPin + 'd>,
    ) -> Self {
        Self {
            adc: Adc::new(adc, AdcIrqs, adc::Config::default()),
            x_channel: Channel::new_pin(x_pin, Pull::None),
            y_channel: Channel::new_pin(y_pin, Pull::None),
        }
    }

    /// Samples X then Y.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Adc`] if either conversion fails.
    pub async fn read(&mut self) -> Result<JoystickReading> {
        let x = self.adc.read(&mut self.x_channel).await.map_err(Error::Adc)?;
        let y = self.adc.read(&mut self.y_channel).await.map_err(Error::Adc)?;
        Ok(JoystickReading::new(AxisReading::new(x), AxisReading::new(y)))
    }
}
