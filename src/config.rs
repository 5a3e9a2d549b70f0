//! Shared configuration for desktop and ESP32 builds.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use rs_menuclock::config::{ClockConfig, Config};
//!
//! // Use defaults
//! let config = Config::default();
//!
//! // Or customize
//! let config = Config::default()
//!     .with_clock(ClockConfig::default().with_poll_interval_ms(100));
//! ```

use heapless::String as HString;

/// Maximum length for short config strings (device names)
pub const MAX_SHORT_STRING: usize = 64;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    // Take only what fits
    let take = s.len().min(MAX_SHORT_STRING);
    // Find valid UTF-8 boundary
    let valid_end = s
        .char_indices()
        .take_while(|(i, _)| *i < take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Device identification
    pub device: DeviceConfig,
    /// Clock core configuration
    pub clock: ClockConfig,
}

impl Config {
    /// Set device configuration
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }

    /// Set clock configuration
    pub fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }
}

// ============================================================================
// Device Config
// ============================================================================

/// Device identification
#[derive(Clone, Debug)]
pub struct DeviceConfig {
    /// Device name, shown on the startup splash
    pub name: ShortString,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: short_string("menuclock"),
        }
    }
}

impl DeviceConfig {
    /// Set the device name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = short_string(name);
        self
    }
}

// ============================================================================
// Clock Config
// ============================================================================

/// Epoch used to seed a never-set hardware clock when no build timestamp
/// was provided: 2025-01-01 00:00:00 UTC.
pub const FALLBACK_EPOCH: u32 = 1_735_689_600;

/// Clock core configuration
#[derive(Clone, Debug)]
pub struct ClockConfig {
    /// Seed for a hardware clock that reports it has never been set.
    ///
    /// The hardware binary overrides this with the firmware build
    /// timestamp (`BUILD_EPOCH` compile-time env var).
    pub default_epoch: u32,
    /// Main-loop polling cadence in milliseconds
    pub poll_interval_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_epoch: FALLBACK_EPOCH,
            poll_interval_ms: 250,
        }
    }
}

impl ClockConfig {
    /// Set the seed epoch for a never-set hardware clock
    pub fn with_default_epoch(mut self, epoch_seconds: u32) -> Self {
        self.default_epoch = epoch_seconds;
        self
    }

    /// Set the polling cadence in milliseconds
    pub fn with_poll_interval_ms(mut self, interval_ms: u32) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
