//! Contract tests for the clock core: poll/diff/notify, subscriptions,
//! adjustment, rendering, and startup seeding.

use std::cell::Cell;

use rs_menuclock::hal::{MockDisplay, MockRtc, RecordingListener};
use rs_menuclock::traits::{MenuEntry, TimeListener, TimeSource};
use rs_menuclock::{init_time_source, Clock, SubscribeError, TimeOfDay, LISTENER_CAPACITY};

// ============================================================================
// Poll / Diff / Notify
// ============================================================================

#[test]
fn starts_at_noon_before_first_poll() {
    let clock = Clock::new(MockRtc::new());

    assert_eq!(clock.current_time(), TimeOfDay::NOON);
    assert_eq!(clock.read_errors(), 0);
}

#[test]
fn valid_reading_updates_cached_time() {
    let mut rtc = MockRtc::new();
    rtc.set_time(9, 30, 15);

    let mut clock = Clock::new(rtc);
    clock.update_time();

    assert_eq!(
        clock.current_time(),
        TimeOfDay::from_hms(9, 30, 15).unwrap()
    );
    assert_eq!(clock.read_errors(), 0);
}

#[test]
fn change_notifies_each_listener_once() {
    let mut rtc = MockRtc::new();
    rtc.set_time(9, 30, 15);

    let mut listener = RecordingListener::new();
    let mut clock = Clock::new(rtc);
    clock.subscribe(&mut listener, 0).unwrap();

    clock.update_time();

    drop(clock);
    assert_eq!(
        listener.notifications,
        [TimeOfDay::from_hms(9, 30, 15).unwrap()]
    );
}

#[test]
fn unchanged_reading_is_silent() {
    let mut rtc = MockRtc::new();
    rtc.set_time(9, 30, 15);

    let mut listener = RecordingListener::new();
    let mut clock = Clock::new(rtc);
    clock.subscribe(&mut listener, 0).unwrap();

    // Two polls over the same hardware reading
    clock.update_time();
    clock.update_time();

    drop(clock);
    assert_eq!(listener.notifications.len(), 1);
}

#[test]
fn reading_equal_to_cache_never_notifies() {
    // Noon is the startup default, so a hardware clock already at noon
    // produces no change on the first poll.
    let mut rtc = MockRtc::new();
    rtc.set_time(12, 0, 0);

    let mut listener = RecordingListener::new();
    let mut clock = Clock::new(rtc);
    clock.subscribe(&mut listener, 0).unwrap();

    clock.update_time();

    assert_eq!(clock.current_time(), TimeOfDay::NOON);
    drop(clock);
    assert!(listener.notifications.is_empty());
}

// ============================================================================
// Listener Fan-Out
// ============================================================================

/// Stamps each notification with a shared sequence number, so tests can
/// check the order in which distinct listeners ran.
struct StampListener<'s> {
    seq: &'s Cell<u32>,
    stamps: Vec<u32>,
}

impl<'s> StampListener<'s> {
    fn new(seq: &'s Cell<u32>) -> Self {
        Self {
            seq,
            stamps: Vec::new(),
        }
    }
}

impl TimeListener for StampListener<'_> {
    fn on_time_change(&mut self, _time: TimeOfDay) {
        self.stamps.push(self.seq.get());
        self.seq.set(self.seq.get() + 1);
    }
}

#[test]
fn fanout_notifies_all_listeners_in_registration_order() {
    let seq = Cell::new(0);
    let mut first = StampListener::new(&seq);
    let mut second = StampListener::new(&seq);
    let mut third = StampListener::new(&seq);

    let mut rtc = MockRtc::new();
    rtc.set_time(4, 20, 0);

    let mut clock = Clock::new(rtc);
    clock.subscribe(&mut first, 0).unwrap();
    clock.subscribe(&mut second, 1).unwrap();
    clock.subscribe(&mut third, 2).unwrap();

    clock.update_time();

    drop(clock);
    assert_eq!(first.stamps, [0]);
    assert_eq!(second.stamps, [1]);
    assert_eq!(third.stamps, [2]);
}

#[test]
fn subscribe_overwrites_previous_occupant() {
    let mut rtc = MockRtc::new();
    rtc.set_time(4, 20, 0);

    let mut replaced = RecordingListener::new();
    let mut active = RecordingListener::new();

    let mut clock = Clock::new(rtc);
    clock.subscribe(&mut replaced, 0).unwrap();
    clock.subscribe(&mut active, 0).unwrap();

    clock.update_time();

    drop(clock);
    assert!(replaced.notifications.is_empty());
    assert_eq!(active.notifications.len(), 1);
}

#[test]
fn subscribe_rejects_out_of_range_slot() {
    let mut first = RecordingListener::new();
    let mut second = RecordingListener::new();
    let mut clock = Clock::new(MockRtc::new());

    let result = clock.subscribe(&mut first, LISTENER_CAPACITY);
    assert_eq!(
        result,
        Err(SubscribeError::InvalidSlot {
            slot: LISTENER_CAPACITY
        })
    );

    let result = clock.subscribe(&mut second, usize::MAX);
    assert_eq!(result, Err(SubscribeError::InvalidSlot { slot: usize::MAX }));
}

// ============================================================================
// Adjustment
// ============================================================================

#[test]
fn adjust_writes_offset_epoch_to_time_source() {
    let mut rtc = MockRtc::new();
    rtc.set_time(10, 0, 0); // epoch 36_000

    let mut clock = Clock::new(rtc);
    clock.adjust(30).unwrap();

    assert_eq!(clock.time_source().set_epochs, [36_000 + 1800]);
}

#[test]
fn adjust_alone_leaves_cached_time_and_listeners_untouched() {
    let mut rtc = MockRtc::new();
    rtc.set_time(10, 0, 0);

    let mut listener = RecordingListener::new();
    let mut clock = Clock::new(rtc);
    clock.subscribe(&mut listener, 0).unwrap();

    clock.update_time();
    clock.adjust(30).unwrap();

    // The cached value is stale until the next poll
    assert_eq!(clock.current_time(), TimeOfDay::from_hms(10, 0, 0).unwrap());

    drop(clock);
    assert_eq!(listener.notifications.len(), 1);
}

#[test]
fn adjust_then_poll_propagates_change() {
    let mut rtc = MockRtc::new();
    rtc.set_time(10, 0, 0);

    let mut clock = Clock::new(rtc);
    clock.update_time();
    let before = clock.current_time().as_secs();

    clock.adjust(30).unwrap();
    clock.update_time();

    assert_eq!(clock.current_time().as_secs(), before + 1800);
}

#[test]
fn adjust_negative_moves_clock_back() {
    let mut rtc = MockRtc::new();
    rtc.set_time(2, 0, 0);

    let mut clock = Clock::new(rtc);
    clock.update_time();

    clock.adjust(-60).unwrap();
    clock.update_time();

    assert_eq!(clock.current_time(), TimeOfDay::from_hms(1, 0, 0).unwrap());
}

// ============================================================================
// Menu Hosting
// ============================================================================

#[test]
fn menu_value_change_maps_to_adjust() {
    let mut rtc = MockRtc::new();
    rtc.set_time(10, 0, 0);

    let mut clock = Clock::new(rtc);
    MenuEntry::<MockDisplay>::on_value_change(&mut clock, 1);

    assert_eq!(clock.time_source().set_epochs, [36_000 + 60]);
}

#[test]
fn menu_click_passes_state_through() {
    let mut clock = Clock::new(MockRtc::new());

    assert!(MenuEntry::<MockDisplay>::on_click(&mut clock, true));
    assert!(!MenuEntry::<MockDisplay>::on_click(&mut clock, false));
}

#[test]
fn menu_title_defaults_to_time() {
    let clock = Clock::new(MockRtc::new());
    assert_eq!(MenuEntry::<MockDisplay>::title(&clock), "Time");

    let named = Clock::new(MockRtc::new()).with_title("Clock");
    assert_eq!(MenuEntry::<MockDisplay>::title(&named), "Clock");
}

#[test]
fn render_prints_formatted_time() {
    let mut rtc = MockRtc::new();
    rtc.set_time(7, 5, 9);

    let mut clock = Clock::new(rtc);
    clock.update_time();

    let mut display = MockDisplay::new();
    clock.render(&mut display).unwrap();

    assert_eq!(display.printed, ["07:05:09"]);
}

#[test]
fn render_before_first_poll_shows_startup_default() {
    let mut clock = Clock::new(MockRtc::new());
    let mut display = MockDisplay::new();

    clock.render(&mut display).unwrap();

    assert_eq!(display.printed, ["12:00:00"]);
}

// ============================================================================
// Startup Seeding
// ============================================================================

#[test]
fn init_seeds_never_set_clock_with_default_epoch() {
    let mut rtc = MockRtc::new().stopped();

    init_time_source(&mut rtc, 1_000_000).unwrap();

    assert_eq!(rtc.begin_count, 1);
    assert!(rtc.is_running().unwrap());
    assert_eq!(rtc.set_epochs, [1_000_000]);
}

#[test]
fn init_leaves_running_clock_alone() {
    let mut rtc = MockRtc::new();
    rtc.set_time(5, 0, 0);

    init_time_source(&mut rtc, 1_000_000).unwrap();

    assert_eq!(rtc.begin_count, 1);
    assert!(rtc.set_epochs.is_empty());

    let reading = rtc.read_now().unwrap();
    assert_eq!((reading.hour, reading.minute, reading.second), (5, 0, 0));
}
