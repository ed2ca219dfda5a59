// src/common/types.rs

use core::convert::TryFrom;
use core::fmt;

use super::error::ConfigError;

// --- External Resistor (Rset) ---

/// External resistor fitted between the sensor's RSET pin and ground.
///
/// Fixed by the board wiring; scales both the refresh time and the
/// sensitivity of the sensor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rset {
    R240k,
    R270k,
    R300k,
    R600k,
}

impl Rset {
    pub const ALL: [Rset; 4] = [Rset::R240k, Rset::R270k, Rset::R300k, Rset::R600k];

    /// Resistance in ohms.
    pub const fn ohms(self) -> u32 {
        match self {
            Rset::R240k => 240_000,
            Rset::R270k => 270_000,
            Rset::R300k => 300_000,
            Rset::R600k => 600_000,
        }
    }

    /// Refresh time at 1T, in seconds.
    pub const fn base_refresh_time(self) -> f32 {
        match self {
            Rset::R240k => 0.1,
            Rset::R270k => 0.1125,
            Rset::R300k => 0.125,
            Rset::R600k => 0.25,
        }
    }

    /// Refresh time at 1T, in microseconds. Same table as `base_refresh_time`.
    pub const fn base_refresh_micros(self) -> u32 {
        match self {
            Rset::R240k => 100_000,
            Rset::R270k => 112_500,
            Rset::R300k => 125_000,
            Rset::R600k => 250_000,
        }
    }

    /// Sensitivity at 1T, in W/(m²·step).
    pub const fn base_sensitivity(self) -> f32 {
        match self {
            Rset::R240k => 0.05,
            Rset::R270k => 0.05625,
            Rset::R300k => 0.0625,
            Rset::R600k => 0.125,
        }
    }
}

impl Default for Rset {
    fn default() -> Self {
        Rset::R270k
    }
}

impl TryFrom<u32> for Rset {
    type Error = ConfigError;

    fn try_from(ohms: u32) -> Result<Self, Self::Error> {
        match ohms {
            240_000 => Ok(Rset::R240k),
            270_000 => Ok(Rset::R270k),
            300_000 => Ok(Rset::R300k),
            600_000 => Ok(Rset::R600k),
            other => Err(ConfigError::InvalidRset(other)),
        }
    }
}

impl From<Rset> for u32 {
    fn from(value: Rset) -> Self {
        value.ohms()
    }
}

impl fmt::Display for Rset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}k", self.ohms() / 1000)
    }
}

// --- Integration Time ---

/// Integration time, as a multiple of the Rset-dependent base time `T`.
///
/// Longer integration accumulates more counts per unit of light, so the
/// per-step sensitivity shrinks by the same factor the refresh time grows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IntegrationTime {
    Half = 0x00,
    One = 0x01,
    Two = 0x02,
    Four = 0x03,
}

impl IntegrationTime {
    pub const ALL: [IntegrationTime; 4] = [
        IntegrationTime::Half,
        IntegrationTime::One,
        IntegrationTime::Two,
        IntegrationTime::Four,
    ];

    /// Two-bit code placed in the IT field of the command byte.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn multiplier(self) -> f32 {
        match self {
            IntegrationTime::Half => 0.5,
            IntegrationTime::One => 1.0,
            IntegrationTime::Two => 2.0,
            IntegrationTime::Four => 4.0,
        }
    }

    /// Multiplier expressed in halves, for integer timing arithmetic.
    pub(crate) const fn multiplier_halves(self) -> u32 {
        match self {
            IntegrationTime::Half => 1,
            IntegrationTime::One => 2,
            IntegrationTime::Two => 4,
            IntegrationTime::Four => 8,
        }
    }
}

impl Default for IntegrationTime {
    fn default() -> Self {
        IntegrationTime::One
    }
}

impl TryFrom<u8> for IntegrationTime {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(IntegrationTime::Half),
            0x01 => Ok(IntegrationTime::One),
            0x02 => Ok(IntegrationTime::Two),
            0x03 => Ok(IntegrationTime::Four),
            other => Err(ConfigError::InvalidIntegrationTime(other)),
        }
    }
}

impl From<IntegrationTime> for u8 {
    fn from(value: IntegrationTime) -> Self {
        value.code()
    }
}

impl fmt::Display for IntegrationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationTime::Half => write!(f, "1/2T"),
            IntegrationTime::One => write!(f, "1T"),
            IntegrationTime::Two => write!(f, "2T"),
            IntegrationTime::Four => write!(f, "4T"),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rset_try_from() {
        assert_eq!(Rset::try_from(240_000), Ok(Rset::R240k));
        assert_eq!(Rset::try_from(270_000), Ok(Rset::R270k));
        assert_eq!(Rset::try_from(300_000), Ok(Rset::R300k));
        assert_eq!(Rset::try_from(600_000), Ok(Rset::R600k));
        assert_eq!(Rset::try_from(999_999), Err(ConfigError::InvalidRset(999_999)));
        assert_eq!(Rset::try_from(0), Err(ConfigError::InvalidRset(0)));
    }

    #[test]
    fn test_rset_ohms_round_trip() {
        for rset in Rset::ALL {
            assert_eq!(Rset::try_from(u32::from(rset)), Ok(rset));
        }
    }

    #[test]
    fn test_integration_time_try_from() {
        assert_eq!(IntegrationTime::try_from(0), Ok(IntegrationTime::Half));
        assert_eq!(IntegrationTime::try_from(3), Ok(IntegrationTime::Four));
        assert_eq!(
            IntegrationTime::try_from(4),
            Err(ConfigError::InvalidIntegrationTime(4))
        );
    }

    #[test]
    fn test_micros_table_matches_seconds_table() {
        for rset in Rset::ALL {
            let from_secs = (rset.base_refresh_time() * 1_000_000.0 + 0.5) as u32;
            assert_eq!(from_secs, rset.base_refresh_micros());
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Rset::default(), Rset::R270k);
        assert_eq!(IntegrationTime::default(), IntegrationTime::One);
    }
}
