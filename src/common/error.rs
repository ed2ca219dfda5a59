// src/common/error.rs

use core::fmt::Debug;

/// A configuration value outside the set the sensor supports.
///
/// These are programmer errors: retrying the same call cannot succeed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Rset is not one of 240k, 270k, 300k or 600k ohms.
    #[error("Unsupported Rset value: {0} ohms")]
    InvalidRset(u32),

    /// Integration time code is not in 0..=3.
    #[error("Invalid integration time code: {0:#04x}")]
    InvalidIntegrationTime(u8),

    /// Address is not 7-bit, or its read companion (address + 1) is not.
    #[error("Invalid I2C address: {0:#04x}")]
    InvalidAddress(u8),
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Veml6070Error<E = ()>
where
    E: Debug,
{
    /// Underlying bus transport error (no ACK, I/O fault, ...).
    #[error("Bus error: {0:?}")]
    Bus(E),

    /// Illegal configuration value supplied at construction or reconfiguration.
    #[error("Configuration error: {0}")]
    Config(ConfigError),

    /// A deadline-bounded read did not complete in time.
    #[error("Measurement timed out")]
    Timeout,

    /// `poll_measurement` was called without a preceding `start_measurement`.
    #[error("No measurement in progress")]
    NoMeasurementInProgress,
}

impl<E: Debug> Veml6070Error<E> {
    /// Whether repeating the whole operation may succeed.
    ///
    /// Bus faults and timeouts are transient; configuration mistakes and
    /// API misuse are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Veml6070Error::Bus(_) | Veml6070Error::Timeout)
    }
}

impl<E: Debug> From<ConfigError> for Veml6070Error<E> {
    fn from(e: ConfigError) -> Self {
        Veml6070Error::Config(e)
    }
}
