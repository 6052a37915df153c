//! A device abstraction for two LEDs sharing one PWM slice.
//!
//! See [`LedPair`] for usage.

use defmt::info;
use embassy_rp::Peri;
use embassy_rp::pwm::{ChannelAPin, ChannelBPin, Config, Pwm, Slice};
use fixed::FixedU16;
use fixed::types::extra::U4;

use crate::joystick::LedLevels;

/// Counter wrap value. Levels run `0..=PWM_TOP`.
pub const PWM_TOP: u16 = 2048;

/// System clock divider for the slice.
const PWM_DIVIDER: u16 = 16;

/// Blue and red LEDs on the A and B outputs of one PWM slice.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use joystick_panel::{joystick::LedLevels, led_pair::LedPair};
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// fn example(p: embassy_rp::Peripherals) {
///     // GPIO 12 is slice 6 output A, GPIO 13 is slice 6 output B.
///     let mut leds = LedPair::new(p.PWM_SLICE6, p.PIN_12, p.PIN_13);
///     leds.set_levels(LedLevels { blue: 1024, red: 0 });
///     leds.set_levels(LedLevels::OFF);
/// }
/// ```
pub struct LedPair<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Kept so updates don't reset the divider
}

impl<'d> LedPair<'d> {
    /// Configures the slice (divider 16, top [`PWM_TOP`], edge-aligned) with both LEDs off.
    #[must_use]
    pub fn new<S: Slice>(
        slice: Peri<'d, S>,
        blue_pin: Peri<'d, impl ChannelAPin<S>>,
        red_pin: Peri<'d, impl ChannelBPin<S>>,
    ) -> Self {
        let mut cfg = Config::default();
        cfg.top = PWM_TOP;
        cfg.divider = FixedU16::<U4>::from_num(PWM_DIVIDER);
        cfg.phase_correct = false;
        cfg.compare_a = 0;
        cfg.compare_b = 0;
        cfg.enable = true;
        let pwm = Pwm::new_output_ab(slice, blue_pin, red_pin, cfg.clone());
        info!("led pair top={} div={}", PWM_TOP, PWM_DIVIDER);
        Self { pwm, cfg }
    }

    /// Sets both compare registers. Levels above [`PWM_TOP`] saturate at fully on.
    pub fn set_levels(&mut self, levels: LedLevels) {
        self.cfg.compare_a = levels.blue.min(PWM_TOP);
        self.cfg.compare_b = levels.red.min(PWM_TOP);
        self.pwm.set_config(&self.cfg);
    }
}
