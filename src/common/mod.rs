// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod state;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

pub use address::I2cAddr;
pub use command::CommandByte;
pub use config::SensorConfig;
pub use error::{ConfigError, Veml6070Error};
pub use hal_traits::{Veml6070Bus, Veml6070Clock, Veml6070Instant, Veml6070Timer};
pub use state::PowerState;
pub use types::{IntegrationTime, Rset};

// --- Feature-gated re-exports ---

#[cfg(feature = "impl-generic-hal")]
pub use hal_traits::{HalBus, HalDelay};
