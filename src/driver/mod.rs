// src/driver/mod.rs

use crate::common::error::Veml6070Error;
use core::fmt::Debug;

pub mod sync_driver;

#[cfg(feature = "async")]
pub mod async_driver;

#[cfg(test)]
pub(crate) mod mock;

// Re-export the driver structs
pub use sync_driver::{Measurement, SyncVeml6070};

#[cfg(feature = "async")]
pub use async_driver::AsyncVeml6070;

/// Combines the outcome of a measurement cycle with that of the power-down
/// that always follows it. The cycle's own error takes precedence.
pub(crate) fn complete_cycle<V, E: Debug>(
    result: Result<V, Veml6070Error<E>>,
    powered_down: Result<(), Veml6070Error<E>>,
) -> Result<V, Veml6070Error<E>> {
    #[cfg(feature = "defmt")]
    {
        if result.is_err() && powered_down.is_err() {
            defmt::warn!("veml6070 power-down after failed cycle also failed");
        }
    }

    let value = result?;
    powered_down?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockBusError;

    #[test]
    fn test_complete_cycle_first_error_wins() {
        let both: Result<u16, _> = complete_cycle(
            Err(Veml6070Error::Timeout),
            Err(Veml6070Error::Bus(MockBusError)),
        );
        assert!(matches!(both, Err(Veml6070Error::Timeout)));

        let down_only = complete_cycle(Ok(7u16), Err(Veml6070Error::Bus(MockBusError)));
        assert!(matches!(down_only, Err(Veml6070Error::Bus(MockBusError))));

        assert_eq!(complete_cycle::<_, MockBusError>(Ok(7u16), Ok(())).ok(), Some(7));
    }
}
