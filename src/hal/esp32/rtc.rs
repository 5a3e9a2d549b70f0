//! DS1307 RTC implementation of the time source capability.
//!
//! Wraps the `ds1307` driver crate; the chip's register protocol stays in
//! the driver, this adapter only converts between the driver's datetime
//! types and [`RtcReading`].

use crate::traits::{RtcReading, TimeSource};
use ds1307::{DateTimeAccess, Ds1307, NaiveDateTime, Timelike};
use embedded_hal::i2c::I2c;

/// Battery-backed DS1307 real-time clock on an I2C bus.
///
/// # Example
///
/// ```ignore
/// use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
/// use rs_menuclock::hal::esp32::Ds1307Rtc;
/// use rs_menuclock::{init_time_source, Clock};
///
/// let i2c = I2cDriver::new(peripherals.i2c0, sda, scl, &I2cConfig::new())?;
/// let mut rtc = Ds1307Rtc::new(i2c);
/// init_time_source(&mut rtc, build_epoch)?;
/// let clock = Clock::new(rtc);
/// ```
pub struct Ds1307Rtc<I2C> {
    driver: Ds1307<I2C>,
}

impl<I2C: I2c> Ds1307Rtc<I2C> {
    /// Creates the adapter over an I2C bus the DS1307 is wired to.
    pub fn new(i2c: I2C) -> Self {
        Self {
            driver: Ds1307::new(i2c),
        }
    }
}

impl<I2C: I2c> TimeSource for Ds1307Rtc<I2C> {
    type Error = RtcError;

    fn begin(&mut self) -> Result<(), RtcError> {
        // The DS1307 needs no bring-up sequence; probe the oscillator
        // register once so wiring faults surface at startup.
        self.driver.running().map(|_| ()).map_err(RtcError::from)
    }

    fn is_running(&mut self) -> Result<bool, RtcError> {
        self.driver.running().map_err(RtcError::from)
    }

    fn read_now(&mut self) -> Result<RtcReading, RtcError> {
        let dt = self.driver.datetime().map_err(RtcError::from)?;
        Ok(RtcReading {
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            epoch_seconds: dt.and_utc().timestamp() as u32,
        })
    }

    fn set_absolute(&mut self, epoch_seconds: u32) -> Result<(), RtcError> {
        let dt = NaiveDateTime::from_timestamp_opt(i64::from(epoch_seconds), 0)
            .ok_or(RtcError::InvalidEpoch)?;
        self.driver.set_datetime(&dt).map_err(RtcError::from)?;
        // Writing the time does not start a halted oscillator on its own
        self.driver.set_running().map_err(RtcError::from)
    }
}

/// RTC adapter error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RtcError {
    /// I2C communication with the chip failed.
    Bus,
    /// The epoch does not map to a datetime the chip can store
    /// (the DS1307 covers 2000-2099).
    InvalidEpoch,
}

impl<E> From<ds1307::Error<E>> for RtcError {
    fn from(e: ds1307::Error<E>) -> Self {
        match e {
            ds1307::Error::InvalidInputData => RtcError::InvalidEpoch,
            _ => RtcError::Bus,
        }
    }
}
