// src/driver/mock.rs

extern crate std;

use core::time::Duration;
use std::collections::VecDeque;
use std::vec::Vec;

use crate::common::hal_traits::{Veml6070Bus, Veml6070Clock, Veml6070Timer};

// --- Mock Bus ---

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError;

/// One attempted bus transaction, failed or not.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transaction {
    Write { address: u8, value: u8 },
    Read { address: u8 },
}

#[derive(Debug, Default)]
pub struct MockBus {
    pub log: Vec<Transaction>,
    read_queue: VecDeque<u8>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes returned by subsequent reads, in order.
    pub fn stage_read_data(&mut self, data: &[u8]) {
        self.read_queue.extend(data.iter().copied());
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.log
            .iter()
            .filter_map(|t| match *t {
                Transaction::Write { address, value } => Some((address, value)),
                Transaction::Read { .. } => None,
            })
            .collect()
    }

    pub fn reads(&self) -> Vec<u8> {
        self.log
            .iter()
            .filter_map(|t| match *t {
                Transaction::Read { address } => Some(address),
                Transaction::Write { .. } => None,
            })
            .collect()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl Veml6070Bus for MockBus {
    type Error = MockBusError;

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.log.push(Transaction::Write { address, value });
        if self.fail_writes {
            Err(MockBusError)
        } else {
            Ok(())
        }
    }

    fn read_byte(&mut self, address: u8) -> Result<u8, Self::Error> {
        self.log.push(Transaction::Read { address });
        if self.fail_reads {
            return Err(MockBusError);
        }
        Ok(self.read_queue.pop_front().unwrap_or(0))
    }
}

// --- Mock Timer / Clock ---

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MockInstant(pub u64);

impl core::ops::Add<Duration> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        MockInstant(self.0.saturating_add(rhs.as_micros() as u64))
    }
}

impl core::ops::Sub<MockInstant> for MockInstant {
    type Output = Duration;
    fn sub(self, rhs: MockInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

/// Fake clock: delays return immediately and advance `now`.
#[derive(Debug, Default)]
pub struct MockTimer {
    pub current_time_us: u64,
    pub delays_us: Vec<u64>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_time(&mut self, us: u64) {
        self.current_time_us = self.current_time_us.saturating_add(us);
    }

    pub fn total_delay(&self) -> Duration {
        Duration::from_micros(self.delays_us.iter().sum())
    }
}

impl Veml6070Timer for MockTimer {
    fn delay_us(&mut self, us: u32) {
        self.delays_us.push(us as u64);
        self.advance_time(us as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_us.push((ms as u64) * 1000);
        self.advance_time((ms as u64) * 1000);
    }
}

impl Veml6070Clock for MockTimer {
    type Instant = MockInstant;

    fn now(&self) -> Self::Instant {
        MockInstant(self.current_time_us)
    }
}
