//! Hardware abstraction trait for the real-time-clock time source.
//!
//! The RTC peripheral (register protocol, bus handling, battery backup) is
//! an external collaborator. The clock core consumes it through
//! [`TimeSource`], which is the whole surface the core needs: start the
//! peripheral, ask whether it has ever been set, read the current time, and
//! write an absolute time back.
//!
//! # Implementation
//!
//! For testing and desktop development use [`crate::hal::MockRtc`]. For
//! hardware, use the DS1307 adapter from `hal::esp32` (requires the `esp32`
//! feature).
//!
//! # Example
//!
//! ```
//! use rs_menuclock::traits::TimeSource;
//! use rs_menuclock::hal::MockRtc;
//!
//! let mut rtc = MockRtc::new();
//! rtc.set_time(7, 30, 0);
//!
//! let reading = rtc.read_now().unwrap();
//! assert_eq!((reading.hour, reading.minute, reading.second), (7, 30, 0));
//! ```

/// One reading of the hardware clock.
///
/// All fields come from the same register read, so `epoch_seconds` and the
/// wall-clock components describe the same instant. The components are raw
/// hardware values and may be out of range after a bus glitch; validation
/// belongs to the consumer (see
/// [`Clock::update_time`](crate::clock::Clock::update_time)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RtcReading {
    /// Hour of day, nominally `0..=23`.
    pub hour: u8,
    /// Minute of hour, nominally `0..=59`.
    pub minute: u8,
    /// Second of minute, nominally `0..=59`.
    pub second: u8,
    /// Absolute seconds since the Unix epoch, used for relative adjustment.
    pub epoch_seconds: u32,
}

/// Time source trait - abstracts a battery-backed real-time clock.
///
/// Implement this trait for your RTC hardware. The clock core calls
/// [`begin`](Self::begin)/[`is_running`](Self::is_running)/
/// [`set_absolute`](Self::set_absolute) once at startup for seeding (see
/// [`init_time_source`](crate::clock::init_time_source)),
/// [`read_now`](Self::read_now) on every poll, and
/// [`set_absolute`](Self::set_absolute) again during adjustment.
///
/// # Implementation Notes
///
/// - `read_now` must fill every field of [`RtcReading`] from a single
///   register read
/// - Timeout and retry policy around bus communication belongs to the
///   implementation, not to callers; every method is expected to complete in
///   bounded, small time
/// - `is_running` reports whether the oscillator has ever been started; a
///   factory-fresh or battery-drained chip reports `false`
pub trait TimeSource {
    /// Error type for time source operations.
    type Error;

    /// Starts/enables the peripheral.
    ///
    /// Called once at startup before any other method.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Returns true if the hardware clock is ticking.
    ///
    /// `false` means the chip has never had a time set (or lost it), and
    /// should be seeded with a default.
    fn is_running(&mut self) -> Result<bool, Self::Error>;

    /// Reads the current wall-clock time.
    fn read_now(&mut self) -> Result<RtcReading, Self::Error>;

    /// Sets the absolute time in seconds since the Unix epoch.
    fn set_absolute(&mut self, epoch_seconds: u32) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_clone() {
        let reading = RtcReading {
            hour: 12,
            minute: 34,
            second: 56,
            epoch_seconds: 1_000_000,
        };
        let copied = reading;
        assert_eq!(reading, copied);
    }

    #[test]
    fn reading_debug() {
        let reading = RtcReading {
            hour: 1,
            minute: 2,
            second: 3,
            epoch_seconds: 4,
        };
        let s = format!("{reading:?}");
        assert!(s.contains("epoch_seconds: 4"));
    }
}
