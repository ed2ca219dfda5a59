// src/driver/async_driver.rs

use crate::common::{
    address::I2cAddr,
    command::CommandByte,
    config::SensorConfig,
    error::Veml6070Error,
    state::PowerState,
    timing,
    types::IntegrationTime,
};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use super::complete_cycle;

/// Async VEML6070 driver over `embedded-hal-async` I2C and delay.
///
/// Same measurement cycle and power-down policy as `SyncVeml6070`; the
/// settle and refresh waits are awaited instead of blocking.
#[derive(Debug)]
pub struct AsyncVeml6070<I2C, D> {
    i2c: I2C,
    delay: D,
    config: SensorConfig,
    state: PowerState,
}

impl<I2C, D> AsyncVeml6070<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub async fn new(i2c: I2C, delay: D, config: SensorConfig) -> Result<Self, Veml6070Error<I2C::Error>> {
        let mut sensor = AsyncVeml6070 {
            i2c,
            delay,
            config,
            state: PowerState::Active,
        };
        sensor.set_integration_time(config.integration_time).await?;
        sensor.disable().await?;
        Ok(sensor)
    }

    /// Returns previously consumed I2C and delay instances.
    pub fn free(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    pub async fn set_integration_time(
        &mut self,
        integration_time: IntegrationTime,
    ) -> Result<(), Veml6070Error<I2C::Error>> {
        self.write_command(CommandByte::new(self.state, integration_time)).await?;
        self.config.integration_time = integration_time;
        self.delay.delay_ms(timing::SETTLE_TIME.as_millis() as u32).await;
        Ok(())
    }

    pub fn integration_time(&self) -> IntegrationTime {
        self.config.integration_time
    }

    pub fn address(&self) -> I2cAddr {
        self.config.address
    }

    pub fn power_state(&self) -> PowerState {
        self.state
    }

    pub fn refresh_time(&self) -> f32 {
        self.config.refresh_time()
    }

    pub fn sensitivity(&self) -> f32 {
        self.config.sensitivity()
    }

    pub async fn enable(&mut self) -> Result<(), Veml6070Error<I2C::Error>> {
        self.state.activate();
        self.write_command(self.config.command_byte(self.state)).await
    }

    pub async fn disable(&mut self) -> Result<(), Veml6070Error<I2C::Error>> {
        self.state.deactivate();
        self.write_command(self.config.command_byte(self.state)).await
    }

    pub async fn read_raw(&mut self) -> Result<u16, Veml6070Error<I2C::Error>> {
        let result = match self.enable().await {
            Ok(()) => {
                let wait = self.config.measurement_wait();
                self.delay.delay_us(wait.as_micros() as u32).await;
                self.read_count().await
            }
            Err(e) => Err(e),
        };

        let powered_down = self.disable().await;
        complete_cycle(result, powered_down)
    }

    /// Irradiance in W/m².
    pub async fn read_intensity(&mut self) -> Result<f32, Veml6070Error<I2C::Error>> {
        let raw = self.read_raw().await?;
        Ok(raw as f32 * self.sensitivity())
    }

    async fn write_command(&mut self, cmd: CommandByte) -> Result<(), Veml6070Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("veml6070 cmd {:#x}", cmd.bits());

        self.i2c
            .write(self.config.address.low(), &[cmd.bits()])
            .await
            .map_err(Veml6070Error::Bus)
    }

    async fn read_count(&mut self) -> Result<u16, Veml6070Error<I2C::Error>> {
        let mut msb = [0u8; 1];
        let mut lsb = [0u8; 1];
        self.i2c
            .read(self.config.address.high(), &mut msb)
            .await
            .map_err(Veml6070Error::Bus)?;
        self.i2c
            .read(self.config.address.low(), &mut lsb)
            .await
            .map_err(Veml6070Error::Bus)?;
        Ok(u16::from_be_bytes([msb[0], lsb[0]]))
    }
}
