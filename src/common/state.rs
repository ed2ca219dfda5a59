// src/common/state.rs

/// Power state of the sensor as last commanded by the driver.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Shut down (SD = 1). No conversions take place.
    #[default]
    Idle,
    /// Converting (SD = 0). Counts become valid after a full refresh time.
    Active,
}

impl PowerState {
    /// Value of the SD bit for this state.
    #[inline]
    pub const fn shutdown_bit(self) -> u8 {
        match self {
            PowerState::Idle => 1,
            PowerState::Active => 0,
        }
    }

    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, PowerState::Active)
    }

    /// Idle -> Active. Returns the previous state.
    pub fn activate(&mut self) -> PowerState {
        core::mem::replace(self, PowerState::Active)
    }

    /// Active -> Idle. Returns the previous state.
    pub fn deactivate(&mut self) -> PowerState {
        core::mem::replace(self, PowerState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut state = PowerState::default();
        assert_eq!(state, PowerState::Idle);
        assert_eq!(state.activate(), PowerState::Idle);
        assert!(state.is_active());
        assert_eq!(state.deactivate(), PowerState::Active);
        assert!(!state.is_active());
    }

    #[test]
    fn test_shutdown_bit() {
        assert_eq!(PowerState::Idle.shutdown_bit(), 1);
        assert_eq!(PowerState::Active.shutdown_bit(), 0);
    }
}
