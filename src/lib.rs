// src/lib.rs

//! Driver for the Vishay VEML6070 UV-A light sensor.
//!
//! The sensor sits on I2C at two consecutive addresses and has a single
//! command register. A measurement is: enable, wait two refresh times,
//! read MSB and LSB, shut down. The raw count times the sensitivity gives
//! the irradiance in W/m².
//!
//! The blocking driver talks to the bus and waits through the
//! [`Veml6070Bus`] and [`Veml6070Timer`] traits; enable `impl-generic-hal`
//! for adapters from `embedded-hal` peripherals, or `async` for a driver on
//! top of `embedded-hal-async`.

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{
    ConfigError, I2cAddr, IntegrationTime, PowerState, Rset, SensorConfig, Veml6070Bus,
    Veml6070Clock, Veml6070Error, Veml6070Timer,
};
pub use driver::{Measurement, SyncVeml6070};

#[cfg(feature = "async")]
pub use driver::AsyncVeml6070;

#[cfg(feature = "impl-generic-hal")]
pub use common::{HalBus, HalDelay};
