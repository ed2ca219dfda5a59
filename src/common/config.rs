// src/common/config.rs

use core::convert::TryFrom;
use core::time::Duration;

use super::{
    address::I2cAddr,
    command::CommandByte,
    error::ConfigError,
    state::PowerState,
    timing,
    types::{IntegrationTime, Rset},
};

/// Static sensor configuration.
///
/// Refresh time and sensitivity are pure functions of this struct; nothing
/// is cached.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    pub address: I2cAddr,
    pub rset: Rset,
    pub integration_time: IntegrationTime,
}

impl SensorConfig {
    /// Validates raw values as they would come from board wiring tables.
    pub fn new(address: u8, rset_ohms: u32, integration_time: u8) -> Result<Self, ConfigError> {
        Ok(SensorConfig {
            address: I2cAddr::try_from(address)?,
            rset: Rset::try_from(rset_ohms)?,
            integration_time: IntegrationTime::try_from(integration_time)?,
        })
    }

    pub const fn with_rset(mut self, rset: Rset) -> Self {
        self.rset = rset;
        self
    }

    pub const fn with_integration_time(mut self, integration_time: IntegrationTime) -> Self {
        self.integration_time = integration_time;
        self
    }

    pub const fn with_address(mut self, address: I2cAddr) -> Self {
        self.address = address;
        self
    }

    /// Time for one complete measurement, in seconds.
    pub fn refresh_time(&self) -> f32 {
        self.rset.base_refresh_time() * self.integration_time.multiplier()
    }

    /// Time for one complete measurement, exact to the microsecond.
    pub fn refresh_duration(&self) -> Duration {
        let micros = self.rset.base_refresh_micros() * self.integration_time.multiplier_halves() / 2;
        Duration::from_micros(micros as u64)
    }

    /// How long a read waits after enabling the sensor.
    pub fn measurement_wait(&self) -> Duration {
        self.refresh_duration() * timing::REFRESH_SAFETY_FACTOR
    }

    /// UV-A sensitivity in W/(m²·step).
    pub fn sensitivity(&self) -> f32 {
        self.rset.base_sensitivity() / self.integration_time.multiplier()
    }

    pub fn command_byte(&self, state: PowerState) -> CommandByte {
        CommandByte::new(state, self.integration_time)
    }
}
