//! The clock core: poll/diff/validate/notify, adjustment, subscriptions.
//!
//! [`Clock`] owns the last-known time of day, polls the time source,
//! validates what the hardware returns, and fans detected changes out to a
//! small fixed set of subscribers. It is the one stateful component of the
//! crate; everything it talks to sits behind a capability trait.
//!
//! # Overview
//!
//! The clock core:
//! - Polls the RTC and diffs against the cached time ([`Clock::update_time`])
//! - Rejects out-of-range readings without corrupting visible state
//! - Notifies subscribers synchronously, in registration order
//! - Nudges the hardware clock by whole minutes ([`Clock::adjust`])
//! - Renders its `HH:MM:SS` value through the display capability
//!
//! # Example
//!
//! ```
//! use rs_menuclock::hal::{MockRtc, RecordingListener};
//! use rs_menuclock::Clock;
//!
//! let mut rtc = MockRtc::new();
//! rtc.set_time(8, 15, 0);
//!
//! let mut listener = RecordingListener::new();
//! let mut clock = Clock::new(rtc);
//! clock.subscribe(&mut listener, 0).unwrap();
//!
//! // First poll observes 08:15:00 and notifies the listener
//! clock.update_time();
//! assert_eq!(clock.current_time().to_string(), "08:15:00");
//!
//! // A second poll over the unchanged reading is a deliberate no-op
//! clock.update_time();
//!
//! drop(clock);
//! assert_eq!(listener.notifications.len(), 1);
//! ```
//!
//! # Scheduling
//!
//! All operations run to completion on one logical thread; an external loop
//! (the menu framework's main loop) decides the polling cadence and calls
//! [`Clock::update_time`] periodically. See `src/bin/esp32_main.rs` for the
//! hardware loop.

use crate::time::{format_time, TimeOfDay, SECONDS_PER_MINUTE};
use crate::traits::{MenuEntry, TextDisplay, TimeListener, TimeSource};

/// Number of listener slots in the subscription table.
pub const LISTENER_CAPACITY: usize = 3;

/// Error returned by [`Clock::subscribe`] for an out-of-range slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscribeError {
    /// The slot index is not below [`LISTENER_CAPACITY`].
    InvalidSlot {
        /// The rejected index.
        slot: usize,
    },
}

/// Error returned by [`Clock::adjust`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjustError<E> {
    /// The time source failed while reading or writing.
    Rtc(E),
    /// The adjusted epoch would fall outside the representable range.
    ///
    /// Nothing was written; the hardware clock keeps its previous value.
    OutOfRange {
        /// The requested delta, for diagnostics.
        delta_minutes: i32,
    },
}

/// Starts the time source and seeds it if it has never been set.
///
/// Runs once at startup, before the polling loop; it is not part of the
/// polling cycle. A hardware clock that reports "not running" (factory
/// fresh, or backup battery drained) is seeded with `default_epoch` -
/// typically the firmware build timestamp - so the device starts from a
/// plausible time instead of an undefined one.
///
/// ```
/// use rs_menuclock::hal::MockRtc;
/// use rs_menuclock::init_time_source;
///
/// let mut rtc = MockRtc::new().stopped();
/// init_time_source(&mut rtc, 1_735_689_600).unwrap();
/// assert!(rtc.is_running().unwrap());
/// ```
pub fn init_time_source<R: TimeSource>(rtc: &mut R, default_epoch: u32) -> Result<(), R::Error> {
    rtc.begin()?;
    if !rtc.is_running()? {
        rtc.set_absolute(default_epoch)?;
    }
    Ok(())
}

/// The clock core.
///
/// Owns its [`TimeSource`] (the singleton hardware resource is moved in at
/// construction and wired nowhere else) and non-owning references to up to
/// [`LISTENER_CAPACITY`] externally-owned listeners. The listener borrows
/// last for the clock's whole usage span, which is exactly the lifetime
/// contract the subscription model requires.
///
/// `Clock` also implements [`MenuEntry`], so a menu framework can host it
/// next to other entries: the knob's relative-change events map to
/// [`adjust`](Self::adjust), clicks pass through, and rendering prints the
/// formatted time.
pub struct Clock<'a, R: TimeSource> {
    rtc: R,
    current: TimeOfDay,
    read_errors: u32,
    listeners: [Option<&'a mut dyn TimeListener>; LISTENER_CAPACITY],
    title: &'static str,
}

impl<'a, R: TimeSource> Clock<'a, R> {
    /// Creates a clock core over the given time source.
    ///
    /// The cached time starts at noon ([`TimeOfDay::NOON`]) until the first
    /// successful poll replaces it.
    pub fn new(rtc: R) -> Self {
        Self {
            rtc,
            current: TimeOfDay::default(),
            read_errors: 0,
            listeners: core::array::from_fn(|_| None),
            title: "Time",
        }
    }

    /// Overrides the menu title (default `"Time"`).
    pub fn with_title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    /// Polls the time source and propagates any detected change.
    ///
    /// Reads the wall-clock components, validates them (`hour < 24`,
    /// `minute < 60`, `second < 60`), and on a changed valid reading updates
    /// the cached time and notifies every subscribed listener with the new
    /// value.
    ///
    /// A rejected reading - a failed bus read or an out-of-range component -
    /// increments the error counter and changes nothing else: the last good
    /// time stays cached and visible, and listeners stay quiet. An unchanged
    /// valid reading is the no-op fast path, so listeners only run on
    /// genuine time changes, not on every poll.
    pub fn update_time(&mut self) {
        let reading = match self.rtc.read_now() {
            Ok(reading) => reading,
            Err(_) => {
                self.read_errors += 1;
                return;
            }
        };

        let candidate = match TimeOfDay::from_hms(reading.hour, reading.minute, reading.second) {
            Some(candidate) => candidate,
            None => {
                self.read_errors += 1;
                return;
            }
        };

        if candidate != self.current {
            self.current = candidate;
            self.notify_listeners(candidate);
        }
    }

    /// Registers a listener at the given slot, overwriting any previous
    /// occupant.
    ///
    /// Slots are caller-assigned; wiring happens once at startup and there
    /// is no removal operation. An index at or beyond
    /// [`LISTENER_CAPACITY`] is rejected with
    /// [`SubscribeError::InvalidSlot`].
    pub fn subscribe(
        &mut self,
        listener: &'a mut dyn TimeListener,
        slot: usize,
    ) -> Result<(), SubscribeError> {
        if slot >= LISTENER_CAPACITY {
            return Err(SubscribeError::InvalidSlot { slot });
        }
        self.listeners[slot] = Some(listener);
        Ok(())
    }

    /// Nudges the hardware clock by `delta_minutes` whole minutes.
    ///
    /// Reads the absolute epoch from the time source, offsets it, and
    /// writes it back. The cached time and the listeners are deliberately
    /// untouched: adjustment and polling are separate concerns, connected
    /// only through the time source, so the next scheduled
    /// [`update_time`](Self::update_time) observes and propagates the new
    /// value.
    ///
    /// ```
    /// use rs_menuclock::hal::MockRtc;
    /// use rs_menuclock::Clock;
    ///
    /// let mut rtc = MockRtc::new();
    /// rtc.set_time(12, 0, 0);
    ///
    /// let mut clock = Clock::new(rtc);
    /// clock.update_time();
    ///
    /// clock.adjust(30).unwrap();
    /// // Cached value is stale until the next poll
    /// assert_eq!(clock.current_time().to_string(), "12:00:00");
    ///
    /// clock.update_time();
    /// assert_eq!(clock.current_time().to_string(), "12:30:00");
    /// ```
    ///
    /// # Errors
    ///
    /// [`AdjustError::Rtc`] if the time source fails,
    /// [`AdjustError::OutOfRange`] if the offset epoch does not fit the
    /// epoch range (nothing is written in that case).
    pub fn adjust(&mut self, delta_minutes: i32) -> Result<(), AdjustError<R::Error>> {
        let reading = self.rtc.read_now().map_err(AdjustError::Rtc)?;

        let target = i64::from(reading.epoch_seconds)
            + i64::from(delta_minutes) * i64::from(SECONDS_PER_MINUTE);
        let target = u32::try_from(target).map_err(|_| AdjustError::OutOfRange { delta_minutes })?;

        self.rtc.set_absolute(target).map_err(AdjustError::Rtc)
    }

    /// The last-known valid time of day.
    #[inline]
    pub fn current_time(&self) -> TimeOfDay {
        self.current
    }

    /// Number of readings rejected since startup.
    ///
    /// Counts both failed bus reads and out-of-range components. Diagnostic
    /// only; monotonically increasing, never reset.
    #[inline]
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }

    /// Shared access to the underlying time source.
    pub fn time_source(&self) -> &R {
        &self.rtc
    }

    /// Exclusive access to the underlying time source.
    ///
    /// Startup seeding normally happens before construction via
    /// [`init_time_source`]; this accessor exists for diagnostics and
    /// tests.
    pub fn time_source_mut(&mut self) -> &mut R {
        &mut self.rtc
    }

    fn notify_listeners(&mut self, time: TimeOfDay) {
        for slot in self.listeners.iter_mut() {
            if let Some(listener) = slot {
                listener.on_time_change(time);
            }
        }
    }
}

impl<R: TimeSource> TimeListener for Clock<'_, R> {}

impl<'a, R: TimeSource, D: TextDisplay> MenuEntry<D> for Clock<'a, R> {
    fn title(&self) -> &str {
        self.title
    }

    /// The knob nudges the hardware clock in whole-minute steps.
    ///
    /// An adjustment failure is not fatal: the hardware keeps whatever it
    /// had, and the next poll re-reads whatever is actually stored.
    fn on_value_change(&mut self, delta: i32) {
        let _ = self.adjust(delta);
    }

    fn render(&mut self, display: &mut D) -> Result<(), D::Error> {
        display.print_text(format_time(self.current).as_str())
    }
}
