//! # rs-menuclock
//!
//! The time-tracking core of a small menu-driven OLED clock: polls a
//! battery-backed RTC, validates what the hardware returns, and keeps the
//! displayed time in sync by notifying subscribed menu components on every
//! detected change.
//!
//! ## Features
//!
//! - **Hardware abstraction**: Traits for the RTC time source and the text
//!   display, with mock implementations for desktop testing
//! - **Glitch-tolerant polling**: out-of-range readings are counted and
//!   dropped, never displayed
//! - **Change-driven fan-out**: listeners run only on genuine time changes,
//!   not on every poll
//! - **Whole-minute adjustment**: a "set clock" control nudges the hardware
//!   epoch; the next poll propagates the result
//! - **Menu hosting**: the clock implements the generic menu-entry
//!   capability set, so a menu framework can hold it next to other entries
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Time source, display, listener and menu-entry capabilities
//! - `time` - Seconds-since-midnight value type and `HH:MM:SS` formatting
//! - `clock` - The poll/diff/validate/notify core
//! - `config` - Device and clock configuration
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use rs_menuclock::hal::{MockRtc, RecordingListener};
//! use rs_menuclock::{init_time_source, Clock, TimeOfDay};
//!
//! // Seed a never-set hardware clock, then hand it to the core
//! let mut rtc = MockRtc::new().stopped();
//! init_time_source(&mut rtc, 0).unwrap();
//! rtc.set_time(6, 0, 0);
//!
//! let mut alarm = RecordingListener::new();
//! let mut clock = Clock::new(rtc);
//! clock.subscribe(&mut alarm, 0).unwrap();
//!
//! // Poll from your main loop; listeners fire on the change to 06:00:00
//! clock.update_time();
//! assert_eq!(clock.current_time(), TimeOfDay::from_hms(6, 0, 0).unwrap());
//!
//! drop(clock);
//! assert_eq!(alarm.notifications.len(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// The clock core: polling, validation, subscriptions, adjustment.
pub mod clock;
/// Shared configuration for desktop and ESP32.
pub mod config;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Time-of-day representation and formatting.
pub mod time;
/// Capability traits for hardware, display, listeners and menu entries.
pub mod traits;

// Re-exports for convenience
pub use clock::{init_time_source, AdjustError, Clock, SubscribeError, LISTENER_CAPACITY};
pub use time::{
    format_time, TimeOfDay, TimeString, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
pub use traits::{MenuEntry, RtcReading, TextDisplay, TimeListener, TimeSource};

// Config re-exports
pub use config::{ClockConfig, Config, DeviceConfig};
