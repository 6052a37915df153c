//! Device abstractions for a Pico joystick panel: a 2-axis analog stick, two
//! PWM LEDs that glow with stick deflection, two toggle buttons, and a 128x64
//! SSD1306 OLED showing where the stick points.
//!
//! The arithmetic ([`joystick`]), the shared toggle state ([`toggle`]), and the
//! picture ([`scene`]) compile on the host too, so they are tested without hardware.
//! The firmware entry point is `demos/joystick_panel.rs`.
//!
//! # Glossary
//!
//! - **ADC (Analog-to-Digital Converter):** turns the stick's voltages into 12-bit readings.
//! - **PWM ([Pulse Width Modulation](https://en.wikipedia.org/wiki/Pulse-width_modulation)) Slices:**
//!   Both Pico 1 and 2 have 8 slices (& 16 channels). These "slices" are unrelated to Rust slices.
//! - **Debounce:** ignoring the burst of edges a mechanical switch produces for a short window.
#![cfg_attr(not(feature = "host"), no_std)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time checks: exactly one architecture must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "arm", feature = "riscv")), not(feature = "host")))]
compile_error!("Must enable exactly one architecture feature: 'arm' or 'riscv'");

#[cfg(all(feature = "arm", feature = "riscv"))]
compile_error!("Cannot enable both 'arm' and 'riscv' features simultaneously");

// Compile-time check: pico1 only supports ARM
#[cfg(all(feature = "pico1", feature = "riscv"))]
compile_error!("Pico 1 (RP2040) only supports ARM architecture, not RISC-V");

// These modules require embassy_rp and are excluded when testing on host
#[cfg(not(feature = "host"))]
pub mod button;
#[cfg(not(feature = "host"))]
pub mod led_pair;
#[cfg(not(feature = "host"))]
pub mod oled;
#[cfg(feature = "host")]
pub mod to_png;

mod error;
pub mod frame;
pub mod joystick;
pub mod panel;
pub mod scene;
pub mod toggle;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
