// src/common/address.rs

use super::error::ConfigError;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit I2C address of a VEML6070.
///
/// The part answers on two consecutive addresses: the base ("low") address
/// accepts command writes and returns the LSB of the count, the next
/// ("high") address returns the MSB.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cAddr(u8);

impl I2cAddr {
    pub const DEFAULT_ADDRESS: I2cAddr = I2cAddr(0x38);

    const MAX_SEVEN_BIT: u8 = 0x7F;

    /// Creates an address if both it and its high companion fit in 7 bits.
    pub fn new(address: u8) -> Result<Self, ConfigError> {
        if address < Self::MAX_SEVEN_BIT {
            Ok(I2cAddr(address))
        } else {
            Err(ConfigError::InvalidAddress(address))
        }
    }

    /// Address for command writes and the LSB read.
    #[inline]
    pub const fn low(&self) -> u8 {
        self.0
    }

    /// Address for the MSB read.
    #[inline]
    pub const fn high(&self) -> u8 {
        self.0 + 1
    }
}

impl Default for I2cAddr {
    fn default() -> Self {
        Self::DEFAULT_ADDRESS
    }
}

impl TryFrom<u8> for I2cAddr {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<I2cAddr> for u8 {
    fn from(value: I2cAddr) -> Self {
        value.0
    }
}

impl fmt::Display for I2cAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
