#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]
//! Joystick panel firmware.
//!
//! Wiring (BitDogLab-style board):
//!
//! | Signal            | GPIO | Peripheral        |
//! |-------------------|------|-------------------|
//! | Joystick X        | 26   | ADC0              |
//! | Joystick Y        | 27   | ADC1              |
//! | Joystick button   | 22   | input, pull-up    |
//! | Button A          | 5    | input, pull-up    |
//! | Blue LED          | 12   | PWM slice 6 A     |
//! | Red LED           | 13   | PWM slice 6 B     |
//! | Green LED         | 11   | output            |
//! | OLED SDA          | 14   | I2C1              |
//! | OLED SCL          | 15   | I2C1              |

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::I2c;
use joystick_panel::{
    Result,
    button::{Button, PressedTo, spawn_toggle_button},
    joystick::Joystick,
    led_pair::LedPair,
    oled::{self, Oled},
    panel::JoystickPanel,
    toggle::{PanelState, ToggleButton},
};
use {defmt::info, defmt_rtt as _, panic_probe as _};

#[cfg(feature = "pico2")]
#[unsafe(link_section = ".start_block")]
#[used]
static IMAGE_DEF: embassy_rp::block::ImageDef = embassy_rp::block::ImageDef::secure_exe();

/// Written by the button tasks, read by the main loop.
static PANEL_STATE: PanelState = PanelState::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Green LED starts off; only the joystick button toggles it.
    let green_led = Output::new(p.PIN_11, Level::Low);
    let joystick_button = Button::new(p.PIN_22, PressedTo::Ground);
    let button_a = Button::new(p.PIN_5, PressedTo::Ground);

    let joystick = Joystick::new(p.ADC, p.PIN_26, p.PIN_27);
    let leds = LedPair::new(p.PWM_SLICE6, p.PIN_12, p.PIN_13);

    info!("system initialized");

    spawn_toggle_button(
        spawner,
        joystick_button,
        ToggleButton::Joystick,
        &PANEL_STATE,
        Some(green_led),
    )?;
    spawn_toggle_button(spawner, button_a, ToggleButton::A, &PANEL_STATE, None)?;

    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, oled::bus_config());
    let oled = Oled::new(i2c)?;

    JoystickPanel::new(joystick, leds, oled, &PANEL_STATE).run().await
}
