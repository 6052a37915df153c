//! Error and result types shared by every device abstraction in this crate.

use derive_more::{Debug, Display, Error, From};
use display_interface::DisplayError;
use embassy_executor::SpawnError;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while bringing up or running the panel.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A background task (for example a button watcher) could not be spawned.
    #[display("task spawn failed: {_0:?}")]
    TaskSpawn(#[error(not(source))] SpawnError),

    /// An ADC conversion did not complete.
    #[cfg(not(feature = "host"))]
    #[display("ADC conversion failed: {_0:?}")]
    Adc(#[error(not(source))] embassy_rp::adc::Error),

    /// The OLED rejected a command or a buffer flush over I2C.
    #[display("OLED transfer failed: {_0:?}")]
    Oled(#[error(not(source))] DisplayError),
}
