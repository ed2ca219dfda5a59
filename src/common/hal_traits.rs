// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Byte-level access to the sensor's two I2C addresses.
///
/// The VEML6070 has no register map: every transaction is a single byte
/// written to, or read from, a 7-bit address.
pub trait Veml6070Bus {
    /// Associated error type for transport failures.
    type Error: Debug;

    /// Writes one byte to `address`.
    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads one byte from `address`.
    fn read_byte(&mut self, address: u8) -> Result<u8, Self::Error>;
}

/// Abstraction for the blocking delays the driver has to observe.
///
/// Note: This could be replaced by `embedded_hal::delay::DelayNs` directly;
/// `HalDelay` bridges the two.
pub trait Veml6070Timer {
    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Instant type returned by a `Veml6070Clock`.
pub trait Veml6070Instant:
    Copy + Ord + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> Veml6070Instant for T where
    T: Copy + Ord + Add<Duration, Output = T> + Sub<T, Output = Duration>
{
}

/// Monotonic time source, needed only by the non-blocking measurement API.
pub trait Veml6070Clock {
    type Instant: Veml6070Instant;

    fn now(&self) -> Self::Instant;
}

impl<B: Veml6070Bus + ?Sized> Veml6070Bus for &mut B {
    type Error = B::Error;

    #[inline]
    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        B::write_byte(self, address, value)
    }

    #[inline]
    fn read_byte(&mut self, address: u8) -> Result<u8, Self::Error> {
        B::read_byte(self, address)
    }
}

impl<T: Veml6070Timer + ?Sized> Veml6070Timer for &mut T {
    #[inline]
    fn delay_us(&mut self, us: u32) {
        T::delay_us(self, us)
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}

impl<C: Veml6070Clock + ?Sized> Veml6070Clock for &mut C {
    type Instant = C::Instant;

    #[inline]
    fn now(&self) -> Self::Instant {
        C::now(self)
    }
}

// --- embedded-hal adapters ---

/// Adapts any `embedded_hal::i2c::I2c` peripheral into a `Veml6070Bus`.
#[cfg(feature = "impl-generic-hal")]
#[derive(Debug)]
pub struct HalBus<I2C>(pub I2C);

#[cfg(feature = "impl-generic-hal")]
impl<I2C> HalBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        HalBus(i2c)
    }

    /// Returns the wrapped peripheral.
    pub fn free(self) -> I2C {
        self.0
    }
}

#[cfg(feature = "impl-generic-hal")]
impl<I2C> Veml6070Bus for HalBus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.0.write(address, &[value])
    }

    fn read_byte(&mut self, address: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.0.read(address, &mut buf)?;
        Ok(buf[0])
    }
}

/// Adapts any `embedded_hal::delay::DelayNs` into a `Veml6070Timer`.
#[cfg(feature = "impl-generic-hal")]
#[derive(Debug)]
pub struct HalDelay<D>(pub D);

#[cfg(feature = "impl-generic-hal")]
impl<D> Veml6070Timer for HalDelay<D>
where
    D: embedded_hal::delay::DelayNs,
{
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms)
    }
}

#[cfg(all(test, feature = "impl-generic-hal"))]
mod tests {
    extern crate std;

    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};
    use std::vec::Vec;

    #[derive(Debug)]
    struct FakeI2cError;

    impl embedded_hal::i2c::Error for FakeI2cError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    #[derive(Default)]
    struct FakeI2c {
        writes: Vec<(u8, Vec<u8>)>,
        reads: Vec<u8>,
        next_read: u8,
        fail: bool,
    }

    impl ErrorType for FakeI2c {
        type Error = FakeI2cError;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(FakeI2cError);
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(buf) => {
                        self.reads.push(address);
                        buf.fill(self.next_read);
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_hal_bus_single_byte_transactions() {
        let mut bus = HalBus::new(FakeI2c { next_read: 0xA5, ..Default::default() });
        bus.write_byte(0x38, 0x06).unwrap();
        assert_eq!(bus.read_byte(0x39).unwrap(), 0xA5);
        let i2c = bus.free();
        assert_eq!(i2c.writes, std::vec![(0x38u8, std::vec![0x06u8])]);
        assert_eq!(i2c.reads, std::vec![0x39u8]);
    }

    #[test]
    fn test_hal_bus_propagates_errors() {
        let mut bus = HalBus::new(FakeI2c { fail: true, ..Default::default() });
        assert!(bus.write_byte(0x38, 0x06).is_err());
        assert!(bus.read_byte(0x38).is_err());
    }
}
