// src/common/command.rs

//! VEML6070 command byte.
//!
//! The sensor has a single write-only command register, written as one
//! byte to the low address:
//!
//! ```text
//! bit: 5 4 3 2 1 0
//!      0 0 IT IT 1 SD
//! ```

use super::{state::PowerState, types::IntegrationTime};

/// Bit 1 is reserved and must be written as 1.
pub const RESERVED_BITS: u8 = 0x02;
/// Only the low six bits are significant.
pub const COMMAND_MASK: u8 = 0x3F;

const SD_MASK: u8 = 0x01;
const IT_MASK: u8 = 0x03;
const IT_SHIFT: u8 = 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandByte(u8);

impl CommandByte {
    /// Assembles the command byte from the shutdown flag and the IT code.
    pub const fn new(state: PowerState, integration_time: IntegrationTime) -> Self {
        let cmd = (state.shutdown_bit() & SD_MASK)
            | ((integration_time.code() & IT_MASK) << IT_SHIFT)
            | RESERVED_BITS;
        CommandByte(cmd & COMMAND_MASK)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn power_state(self) -> PowerState {
        if self.0 & SD_MASK != 0 {
            PowerState::Idle
        } else {
            PowerState::Active
        }
    }

    pub fn integration_time(self) -> IntegrationTime {
        match (self.0 >> IT_SHIFT) & IT_MASK {
            0x00 => IntegrationTime::Half,
            0x01 => IntegrationTime::One,
            0x02 => IntegrationTime::Two,
            _ => IntegrationTime::Four,
        }
    }
}

impl From<CommandByte> for u8 {
    fn from(value: CommandByte) -> Self {
        value.0
    }
}
