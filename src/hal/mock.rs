//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for the hardware capabilities plus a
//! recording listener, enabling development and testing on desktop without
//! a physical RTC or OLED.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockRtc`] | [`TimeSource`] | Settable epoch-backed readings, failure injection |
//! | [`MockDisplay`] | [`TextDisplay`] | Records printed lines |
//! | [`RecordingListener`] | [`TimeListener`] | Records received notifications |
//!
//! # Example
//!
//! ```rust
//! use rs_menuclock::hal::{MockDisplay, MockRtc};
//! use rs_menuclock::traits::MenuEntry;
//! use rs_menuclock::Clock;
//!
//! let mut rtc = MockRtc::new();
//! rtc.set_time(21, 5, 0);
//!
//! let mut clock = Clock::new(rtc);
//! clock.update_time();
//!
//! let mut display = MockDisplay::new();
//! clock.render(&mut display).unwrap();
//! assert_eq!(display.printed, ["21:05:00"]);
//! ```
//!
//! [`TimeSource`]: crate::traits::TimeSource
//! [`TextDisplay`]: crate::traits::TextDisplay
//! [`TimeListener`]: crate::traits::TimeListener

use crate::time::{TimeOfDay, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::traits::{RtcReading, TextDisplay, TimeListener, TimeSource};

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

// ============================================================================
// Time Source Mock
// ============================================================================

/// Mock RTC for testing.
///
/// Keeps an absolute epoch as its single source of truth and derives the
/// wall-clock components from it, so adjustments written through
/// [`TimeSource::set_absolute`] round-trip into later readings the same way
/// they do on a battery-backed chip.
///
/// Corrupt readings and bus failures can be injected one poll at a time.
///
/// # Example
///
/// ```rust
/// use rs_menuclock::hal::MockRtc;
/// use rs_menuclock::traits::TimeSource;
///
/// let mut rtc = MockRtc::new();
/// rtc.set_time(23, 59, 59);
///
/// let reading = rtc.read_now().unwrap();
/// assert_eq!((reading.hour, reading.minute, reading.second), (23, 59, 59));
///
/// // One glitched read, then back to normal
/// rtc.corrupt_next(24, 0, 0);
/// assert_eq!(rtc.read_now().unwrap().hour, 24);
/// assert_eq!(rtc.read_now().unwrap().hour, 23);
/// ```
#[derive(Debug)]
pub struct MockRtc {
    /// Whether the oscillator is ticking. `set_absolute` turns it on.
    pub running: bool,
    /// Absolute seconds since the Unix epoch; readings derive from this.
    pub epoch: u32,
    /// Number of times `begin` was called.
    pub begin_count: usize,
    /// Every epoch written through `set_absolute`, in order.
    pub set_epochs: Vec<u32>,
    corrupt_next: Option<(u8, u8, u8)>,
    fail_next_read: bool,
}

impl MockRtc {
    /// Creates a running mock RTC at epoch 0 (midnight).
    pub fn new() -> Self {
        Self {
            running: true,
            epoch: 0,
            begin_count: 0,
            set_epochs: Vec::new(),
            corrupt_next: None,
            fail_next_read: false,
        }
    }

    /// Marks the clock as never set, as a factory-fresh chip reports.
    pub fn stopped(mut self) -> Self {
        self.running = false;
        self
    }

    /// Sets the wall-clock time (epoch day 0).
    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        self.epoch = u32::from(hour) * SECONDS_PER_HOUR
            + u32::from(minute) * SECONDS_PER_MINUTE
            + u32::from(second);
    }

    /// Sets the absolute epoch directly.
    pub fn set_epoch(&mut self, epoch_seconds: u32) {
        self.epoch = epoch_seconds;
    }

    /// Makes the next `read_now` return the given raw components.
    ///
    /// Later reads revert to the epoch-derived values. Use out-of-range
    /// components to simulate a bus glitch.
    pub fn corrupt_next(&mut self, hour: u8, minute: u8, second: u8) {
        self.corrupt_next = Some((hour, minute, second));
    }

    /// Makes the next `read_now` fail outright.
    pub fn fail_next_read(&mut self) {
        self.fail_next_read = true;
    }
}

impl Default for MockRtc {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MockRtc {
    type Error = ();

    fn begin(&mut self) -> Result<(), ()> {
        self.begin_count += 1;
        Ok(())
    }

    fn is_running(&mut self) -> Result<bool, ()> {
        Ok(self.running)
    }

    fn read_now(&mut self) -> Result<RtcReading, ()> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(());
        }

        if let Some((hour, minute, second)) = self.corrupt_next.take() {
            return Ok(RtcReading {
                hour,
                minute,
                second,
                epoch_seconds: self.epoch,
            });
        }

        let t = self.epoch % SECONDS_PER_DAY;
        Ok(RtcReading {
            hour: (t / SECONDS_PER_HOUR) as u8,
            minute: (t / SECONDS_PER_MINUTE % 60) as u8,
            second: (t % 60) as u8,
            epoch_seconds: self.epoch,
        })
    }

    fn set_absolute(&mut self, epoch_seconds: u32) -> Result<(), ()> {
        self.epoch = epoch_seconds;
        self.running = true;
        self.set_epochs.push(epoch_seconds);
        Ok(())
    }
}

// ============================================================================
// Display Mock
// ============================================================================

/// Mock display for testing rendering.
///
/// Records every printed line for verification.
///
/// # Example
///
/// ```rust
/// use rs_menuclock::hal::MockDisplay;
/// use rs_menuclock::traits::TextDisplay;
///
/// let mut display = MockDisplay::new();
/// display.init().unwrap();
/// display.print_text("12:00:00").unwrap();
/// assert_eq!(display.printed, ["12:00:00"]);
/// ```
#[derive(Debug, Default)]
pub struct MockDisplay {
    /// Every line printed, in order.
    pub printed: Vec<String>,
    /// Whether `init` was called.
    pub initialized: bool,
    /// Number of times `clear` was called.
    pub clear_count: usize,
}

impl MockDisplay {
    /// Creates a new mock display.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently printed line, if any.
    pub fn last_printed(&self) -> Option<&str> {
        self.printed.last().map(String::as_str)
    }
}

impl TextDisplay for MockDisplay {
    type Error = ();

    fn init(&mut self) -> Result<(), ()> {
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ()> {
        self.clear_count += 1;
        Ok(())
    }

    fn print_text(&mut self, text: &str) -> Result<(), ()> {
        self.printed.push(text.into());
        Ok(())
    }
}

// ============================================================================
// Listener Mock
// ============================================================================

/// Listener that records every notification it receives.
///
/// # Example
///
/// ```rust
/// use rs_menuclock::hal::RecordingListener;
/// use rs_menuclock::traits::TimeListener;
/// use rs_menuclock::TimeOfDay;
///
/// let mut listener = RecordingListener::new();
/// listener.on_time_change(TimeOfDay::NOON);
/// assert_eq!(listener.notifications, [TimeOfDay::NOON]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingListener {
    /// Every received time, in notification order.
    pub notifications: Vec<TimeOfDay>,
}

impl RecordingListener {
    /// Creates a listener with an empty notification log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimeListener for RecordingListener {
    fn on_time_change(&mut self, time: TimeOfDay) {
        self.notifications.push(time);
    }
}

// ============================================================================
// Tests
// ============================================================================
