// src/driver/sync_driver/measurement.rs

//! Non-blocking measurement cycle on top of `nb`.
//!
//! `start_measurement` enables the sensor and returns a handle;
//! `poll_measurement` reports `WouldBlock` until two refresh times have
//! passed, then reads the count and shuts the sensor down again.

use super::SyncVeml6070;
use crate::common::{
    error::Veml6070Error,
    hal_traits::{Veml6070Bus, Veml6070Clock, Veml6070Timer},
    timing,
};
use core::time::Duration;
use nb::Result as NbResult;

/// Handle for a measurement started with `start_measurement`.
///
/// Only the handle of the most recent start is accepted by
/// `poll_measurement`; any disable or integration-time change in between
/// invalidates it.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement<I> {
    cycle: u32,
    ready_at: I,
}

impl<I: Copy> Measurement<I> {
    /// Instant from which the count is valid.
    pub fn ready_at(&self) -> I {
        self.ready_at
    }
}

impl<B, T> SyncVeml6070<B, T>
where
    B: Veml6070Bus,
    T: Veml6070Timer + Veml6070Clock,
{
    /// Enables the sensor without waiting for the conversion.
    pub fn start_measurement(&mut self) -> Result<Measurement<T::Instant>, Veml6070Error<B::Error>> {
        if let Err(e) = self.enable() {
            return self.finish_cycle(Err(e));
        }
        self.cycle_counter = self.cycle_counter.wrapping_add(1);
        self.pending_cycle = Some(self.cycle_counter);
        Ok(Measurement {
            cycle: self.cycle_counter,
            ready_at: self.timer.now() + self.config.measurement_wait(),
        })
    }

    /// Returns the count once the measurement is complete.
    ///
    /// Fails with `NoMeasurementInProgress` if the handle does not belong to
    /// the measurement currently running: the sensor was disabled or
    /// reconfigured since, another measurement was started, or the handle
    /// was already completed.
    pub fn poll_measurement(
        &mut self,
        measurement: &Measurement<T::Instant>,
    ) -> NbResult<u16, Veml6070Error<B::Error>> {
        if self.pending_cycle != Some(measurement.cycle) {
            return Err(nb::Error::Other(Veml6070Error::NoMeasurementInProgress));
        }
        if self.timer.now() < measurement.ready_at {
            return Err(nb::Error::WouldBlock);
        }
        let result = self.read_count();
        self.finish_cycle(result).map_err(nb::Error::Other)
    }

    /// Abandons a started measurement and shuts the sensor down.
    pub fn cancel_measurement(&mut self) -> Result<(), Veml6070Error<B::Error>> {
        self.disable()
    }

    /// Blocking read bounded by `timeout`.
    ///
    /// On expiry the sensor is shut down and `Timeout` is returned.
    pub fn read_raw_with_timeout(&mut self, timeout: Duration) -> Result<u16, Veml6070Error<B::Error>> {
        let deadline = self.timer.now() + timeout;
        let measurement = self.start_measurement()?;

        loop {
            match self.poll_measurement(&measurement) {
                Ok(raw) => return Ok(raw),
                Err(nb::Error::Other(e)) => return Err(e),
                Err(nb::Error::WouldBlock) => {
                    if self.timer.now() >= deadline {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("veml6070 measurement timed out");
                        return self.finish_cycle(Err(Veml6070Error::Timeout));
                    }
                    self.timer.delay_us(timing::POLL_INTERVAL.as_micros() as u32);
                }
            }
        }
    }
}
