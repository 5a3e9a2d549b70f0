//! Menu-entry and time-change-listener capabilities.
//!
//! A menu framework (external to this crate) hosts a homogeneous set of
//! entries: the clock itself, alarm rows, settings rows, and so on. Every
//! entry implements [`MenuEntry`]; every method except
//! [`render`](MenuEntry::render) has a default body, so concrete entries
//! override only what they react to.
//!
//! [`TimeListener`] is the narrower capability the clock core notifies on
//! every detected time change. It is a supertrait of [`MenuEntry`], so any
//! menu entry can be subscribed via
//! [`Clock::subscribe`](crate::clock::Clock::subscribe) - but so can
//! anything else that implements `on_time_change`.

use crate::time::TimeOfDay;
use crate::traits::TextDisplay;

/// Receiver of time-change notifications.
///
/// The clock core invokes [`on_time_change`](Self::on_time_change) on every
/// subscribed listener, synchronously and in registration order, whenever a
/// poll observes a new valid time. The default body ignores the event.
///
/// A listener must not reach back into the clock that notifies it; the
/// exclusive borrow the clock holds over its listeners makes that
/// structurally impossible.
pub trait TimeListener {
    /// Called with the new time after each detected change.
    fn on_time_change(&mut self, time: TimeOfDay) {
        let _ = time;
    }
}

/// A single entry in the device menu.
///
/// Generic over the display type so entries draw through whatever
/// [`TextDisplay`] the device was wired with. The trait is object-safe;
/// a menu framework typically stores `&mut dyn MenuEntry<D>`.
///
/// # Example
///
/// ```
/// use rs_menuclock::hal::MockDisplay;
/// use rs_menuclock::traits::{MenuEntry, TextDisplay, TimeListener};
///
/// struct Version;
///
/// impl TimeListener for Version {}
///
/// impl<D: TextDisplay> MenuEntry<D> for Version {
///     fn title(&self) -> &str {
///         "Version"
///     }
///
///     fn render(&mut self, display: &mut D) -> Result<(), D::Error> {
///         display.print_text("v0.1.0")
///     }
/// }
///
/// let mut display = MockDisplay::new();
/// let mut entry = Version;
/// entry.render(&mut display).unwrap();
/// assert_eq!(display.printed, ["v0.1.0"]);
/// ```
pub trait MenuEntry<D: TextDisplay>: TimeListener {
    /// Short label shown in the menu list.
    fn title(&self) -> &str;

    /// Handles a relative value change from the input knob.
    ///
    /// `delta` is in entry-specific units (the clock interprets it as
    /// minutes). Default: ignored.
    fn on_value_change(&mut self, delta: i32) {
        let _ = delta;
    }

    /// Handles a click while the entry is open or closed.
    ///
    /// Returns the new open state. Default: pass the state through
    /// unchanged.
    fn on_click(&mut self, is_open: bool) -> bool {
        is_open
    }

    /// Draws the entry's current value through the display.
    fn render(&mut self, display: &mut D) -> Result<(), D::Error>;
}
