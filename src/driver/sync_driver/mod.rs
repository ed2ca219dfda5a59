// src/driver/sync_driver/mod.rs

mod measurement;

pub use measurement::Measurement;

use crate::common::{
    address::I2cAddr,
    command::CommandByte,
    config::SensorConfig,
    error::Veml6070Error,
    hal_traits::{Veml6070Bus, Veml6070Timer},
    state::PowerState,
    timing,
    types::{IntegrationTime, Rset},
};
use super::complete_cycle;
use core::time::Duration;

/// Blocking VEML6070 driver.
///
/// Owns the bus and timer collaborators. Every public method holds
/// `&mut self` for its whole duration, so bus transactions of two
/// operations can never interleave.
#[derive(Debug)]
pub struct SyncVeml6070<B, T>
where
    B: Veml6070Bus,
    T: Veml6070Timer,
{
    bus: B,
    timer: T,
    config: SensorConfig,
    state: PowerState,
    /// Cycle id of the measurement started by `start_measurement`, if any.
    pending_cycle: Option<u32>,
    cycle_counter: u32,
}

impl<B, T> SyncVeml6070<B, T>
where
    B: Veml6070Bus,
    T: Veml6070Timer,
{
    /// Applies the configured integration time, then shuts the sensor down.
    ///
    /// Blocks for the 200 ms settle time.
    pub fn new(bus: B, timer: T, config: SensorConfig) -> Result<Self, Veml6070Error<B::Error>> {
        let mut sensor = SyncVeml6070 {
            bus,
            timer,
            config,
            state: PowerState::Active,
            pending_cycle: None,
            cycle_counter: 0,
        };
        sensor.set_integration_time(config.integration_time)?;
        sensor.disable()?;
        Ok(sensor)
    }

    /// Like `new`, but validates raw configuration values first.
    ///
    /// An illegal value fails with `Veml6070Error::Config` before any bus
    /// transaction is issued.
    pub fn try_new(
        bus: B,
        timer: T,
        address: u8,
        rset_ohms: u32,
        integration_time: u8,
    ) -> Result<Self, Veml6070Error<B::Error>> {
        let config = SensorConfig::new(address, rset_ohms, integration_time)?;
        Self::new(bus, timer, config)
    }

    /// Returns the bus and timer.
    pub fn free(self) -> (B, T) {
        (self.bus, self.timer)
    }

    // --- Configuration ---

    /// Writes the new integration time and waits for the sensor to settle.
    ///
    /// The stored setting only changes once the write succeeded. A started
    /// measurement would straddle the change, so it is abandoned: the same
    /// write shuts the sensor down and the handle stops being accepted.
    pub fn set_integration_time(
        &mut self,
        integration_time: IntegrationTime,
    ) -> Result<(), Veml6070Error<B::Error>> {
        if self.pending_cycle.take().is_some() {
            self.state.deactivate();
        }
        let cmd = CommandByte::new(self.state, integration_time);
        self.write_command(cmd)?;
        self.config.integration_time = integration_time;
        self.timer.delay_ms(timing::SETTLE_TIME.as_millis() as u32);
        Ok(())
    }

    #[inline]
    pub fn integration_time(&self) -> IntegrationTime {
        self.config.integration_time
    }

    #[inline]
    pub fn rset(&self) -> Rset {
        self.config.rset
    }

    #[inline]
    pub fn address(&self) -> I2cAddr {
        self.config.address
    }

    #[inline]
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    #[inline]
    pub fn power_state(&self) -> PowerState {
        self.state
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.state.is_active()
    }

    /// Time for one complete measurement with the current settings, in seconds.
    pub fn refresh_time(&self) -> f32 {
        self.config.refresh_time()
    }

    pub fn refresh_duration(&self) -> Duration {
        self.config.refresh_duration()
    }

    /// UV-A sensitivity in W/(m²·step).
    pub fn sensitivity(&self) -> f32 {
        self.config.sensitivity()
    }

    // --- Power State ---

    pub fn enable(&mut self) -> Result<(), Veml6070Error<B::Error>> {
        self.state.activate();
        self.write_command(self.config.command_byte(self.state))
    }

    /// Shuts the sensor down. The driver considers itself idle even if the
    /// write fails.
    pub fn disable(&mut self) -> Result<(), Veml6070Error<B::Error>> {
        self.state.deactivate();
        self.pending_cycle = None;
        self.write_command(self.config.command_byte(self.state))
    }

    // --- Measurement ---

    /// Runs a full measurement cycle and returns the 16-bit count.
    ///
    /// Waits two refresh times after enabling so that a cycle begun with
    /// stale settings has completed. The sensor is shut down afterwards,
    /// also when a bus transaction failed; the first error is returned.
    pub fn read_raw(&mut self) -> Result<u16, Veml6070Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("veml6070 read cycle, wait {} us", self.config.measurement_wait().as_micros() as u32);

        let result = self.enable().and_then(|()| {
            let wait = self.config.measurement_wait();
            self.timer.delay_us(wait.as_micros() as u32);
            self.read_count()
        });
        self.finish_cycle(result)
    }

    /// Irradiance in W/m².
    pub fn read_intensity(&mut self) -> Result<f32, Veml6070Error<B::Error>> {
        let raw = self.read_raw()?;
        Ok(raw as f32 * self.sensitivity())
    }

    // --- Low-Level Helpers (Private) ---

    fn write_command(&mut self, cmd: CommandByte) -> Result<(), Veml6070Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("veml6070 cmd {:#x} -> {:#x}", cmd.bits(), self.config.address.low());

        self.bus
            .write_byte(self.config.address.low(), cmd.bits())
            .map_err(Veml6070Error::Bus)
    }

    /// MSB comes from the high address, LSB from the low one.
    fn read_count(&mut self) -> Result<u16, Veml6070Error<B::Error>> {
        let msb = self
            .bus
            .read_byte(self.config.address.high())
            .map_err(Veml6070Error::Bus)?;
        let lsb = self
            .bus
            .read_byte(self.config.address.low())
            .map_err(Veml6070Error::Bus)?;
        Ok(((msb as u16) << 8) | lsb as u16)
    }

    /// Powers down after a cycle, whatever its outcome.
    fn finish_cycle<V>(
        &mut self,
        result: Result<V, Veml6070Error<B::Error>>,
    ) -> Result<V, Veml6070Error<B::Error>> {
        let powered_down = self.disable();
        complete_cycle(result, powered_down)
    }
}
