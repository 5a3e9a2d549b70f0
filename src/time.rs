//! Time-of-day representation and `HH:MM:SS` formatting.
//!
//! [`TimeOfDay`] is a seconds-since-midnight value that is always in
//! `[0, 86400)`. Out-of-range hardware readings never become a `TimeOfDay`:
//! [`TimeOfDay::from_hms`] rejects them, and the clock core counts the
//! rejection instead (see [`crate::clock::Clock::update_time`]).
//!
//! Formatting is a pure function of the value and is total: any
//! `TimeOfDay` renders as a zero-padded 24-hour `HH:MM:SS` string.

use core::fmt;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: u32 = 60;
/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u32 = 3_600;
/// Seconds in one day. `TimeOfDay` values are strictly below this.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Fixed-capacity buffer holding a formatted `HH:MM:SS` string.
///
/// Derived from a [`TimeOfDay`] on demand, never stored as authoritative
/// state.
pub type TimeString = heapless::String<8>;

/// A wall-clock time of day as seconds since midnight.
///
/// # Invariant
///
/// The wrapped value is always in `[0, 86400)`. Construction either
/// validates ([`from_hms`](Self::from_hms)) or wraps
/// ([`from_secs`](Self::from_secs)), so arithmetic elsewhere never has to
/// re-check the range.
///
/// # Example
///
/// ```
/// use rs_menuclock::TimeOfDay;
///
/// let t = TimeOfDay::from_hms(1, 1, 1).unwrap();
/// assert_eq!(t.as_secs(), 3661);
/// assert_eq!(t.to_string(), "01:01:01");
///
/// // Out-of-range fields are rejected, not wrapped
/// assert!(TimeOfDay::from_hms(24, 0, 0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: Self = Self(0);

    /// Noon, `12:00:00`. The deterministic startup value before the first
    /// successful hardware read.
    pub const NOON: Self = Self(SECONDS_PER_DAY / 2);

    /// Builds a `TimeOfDay` from wall-clock components.
    ///
    /// Returns `None` unless `hour < 24`, `minute < 60` and `second < 60`.
    /// This is the validation gate for raw hardware readings.
    pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }
        Some(Self(
            hour as u32 * SECONDS_PER_HOUR
                + minute as u32 * SECONDS_PER_MINUTE
                + second as u32,
        ))
    }

    /// Builds a `TimeOfDay` from a raw seconds count, wrapping at midnight.
    ///
    /// Total for any input; `86400` wraps to `00:00:00`.
    ///
    /// ```
    /// use rs_menuclock::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_secs(86_400), TimeOfDay::MIDNIGHT);
    /// assert_eq!(TimeOfDay::from_secs(86_399).to_string(), "23:59:59");
    /// ```
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs % SECONDS_PER_DAY)
    }

    /// Seconds since midnight, in `[0, 86400)`.
    #[inline]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }

    /// Hour component, `0..=23`.
    #[inline]
    pub const fn hour(&self) -> u8 {
        (self.0 / SECONDS_PER_HOUR % 24) as u8
    }

    /// Minute component, `0..=59`.
    #[inline]
    pub const fn minute(&self) -> u8 {
        (self.0 / SECONDS_PER_MINUTE % 60) as u8
    }

    /// Second component, `0..=59`.
    #[inline]
    pub const fn second(&self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl Default for TimeOfDay {
    /// Noon, so a device that has not yet completed a hardware read shows a
    /// plausible mid-range time instead of garbage.
    fn default() -> Self {
        Self::NOON
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Formats a time of day into a fixed-capacity [`TimeString`].
///
/// ```
/// use rs_menuclock::{format_time, TimeOfDay};
///
/// assert_eq!(format_time(TimeOfDay::MIDNIGHT).as_str(), "00:00:00");
/// assert_eq!(format_time(TimeOfDay::from_secs(3661)).as_str(), "01:01:01");
/// ```
pub fn format_time(time: TimeOfDay) -> TimeString {
    use core::fmt::Write;

    let mut out = TimeString::new();
    // 8 bytes always fit the HH:MM:SS rendering of an in-range value
    let _ = write!(out, "{time}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hms_valid_range() {
        let t = TimeOfDay::from_hms(23, 59, 59).unwrap();
        assert_eq!(t.as_secs(), SECONDS_PER_DAY - 1);

        let t = TimeOfDay::from_hms(0, 0, 0).unwrap();
        assert_eq!(t, TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn from_hms_rejects_out_of_range_fields() {
        assert!(TimeOfDay::from_hms(24, 0, 0).is_none());
        assert!(TimeOfDay::from_hms(0, 60, 0).is_none());
        assert!(TimeOfDay::from_hms(0, 0, 60).is_none());
        assert!(TimeOfDay::from_hms(255, 255, 255).is_none());
    }

    #[test]
    fn from_secs_wraps_at_midnight() {
        assert_eq!(TimeOfDay::from_secs(0), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::from_secs(SECONDS_PER_DAY), TimeOfDay::MIDNIGHT);
        assert_eq!(
            TimeOfDay::from_secs(SECONDS_PER_DAY + 61).as_secs(),
            61
        );
    }

    #[test]
    fn component_decomposition() {
        let t = TimeOfDay::from_secs(3661);
        assert_eq!(t.hour(), 1);
        assert_eq!(t.minute(), 1);
        assert_eq!(t.second(), 1);
    }

    #[test]
    fn default_is_noon() {
        let t = TimeOfDay::default();
        assert_eq!(t, TimeOfDay::NOON);
        assert_eq!(t.as_secs(), 43_200);
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_time(TimeOfDay::MIDNIGHT).as_str(), "00:00:00");
        assert_eq!(format_time(TimeOfDay::from_secs(3661)).as_str(), "01:01:01");
        assert_eq!(
            format_time(TimeOfDay::from_secs(86_399)).as_str(),
            "23:59:59"
        );
        assert_eq!(format_time(TimeOfDay::NOON).as_str(), "12:00:00");
    }

    #[test]
    fn format_round_trips() {
        // Sampled sweep plus both endpoints; decoding the string must
        // recover the seconds count it was built from.
        let mut t = 0u32;
        loop {
            let s = format_time(TimeOfDay::from_secs(t));
            let bytes = s.as_bytes();
            assert_eq!(bytes.len(), 8);
            assert_eq!(bytes[2], b':');
            assert_eq!(bytes[5], b':');

            let h = (bytes[0] - b'0') as u32 * 10 + (bytes[1] - b'0') as u32;
            let m = (bytes[3] - b'0') as u32 * 10 + (bytes[4] - b'0') as u32;
            let sec = (bytes[6] - b'0') as u32 * 10 + (bytes[7] - b'0') as u32;
            assert_eq!(h * SECONDS_PER_HOUR + m * SECONDS_PER_MINUTE + sec, t);

            if t == SECONDS_PER_DAY - 1 {
                break;
            }
            t = (t + 997).min(SECONDS_PER_DAY - 1);
        }
    }
}
