//! End-to-end scenarios through the composed tracker

use std::cell::Cell;
use std::rc::Rc;

use choretracker_core::config::{
    Settings, COLUMN_COUNT, DEMO_ACTIVATION_MS, POLL_INTERVAL_MS, ROW_COUNT, TASK_DEBOUNCE_MS,
    TITLE_DISPLAY_MS, WIRING,
};
use choretracker_core::demo::DemoContent;
use choretracker_core::navigation::NavMode;
use choretracker_core::render::{DisplaySet, RenderDispatcher, RenderError};
use choretracker_core::system::{ChoreTracker, Event};
use choretracker_hal::{InputPin, Level, OutputPin};
use proptest::prelude::*;
use rand_core::{impls, RngCore};

#[derive(Clone)]
struct Button(Rc<Cell<bool>>);

impl Button {
    fn new() -> Self {
        Self(Rc::new(Cell::new(false)))
    }

    fn set(&self, pressed: bool) {
        self.0.set(pressed);
    }
}

impl InputPin for Button {
    // Active-low with pull-up
    fn is_high(&self) -> bool {
        !self.0.get()
    }
}

#[derive(Clone)]
struct Led(Rc<Cell<Level>>);

impl OutputPin for Led {
    fn set_high(&mut self) {
        self.0.set(Level::High);
    }

    fn set_low(&mut self) {
        self.0.set(Level::Low);
    }

    fn level(&self) -> Level {
        self.0.get()
    }
}

struct Counter(u32);

impl RngCore for Counter {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(37);
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[derive(Default)]
struct NullDisplay {
    progress: Vec<u8>,
    titles: Vec<String>,
}

impl RenderDispatcher for NullDisplay {
    fn render_title(&mut self, _: DisplaySet, title: &str, _: usize) -> Result<(), RenderError> {
        self.titles.push(title.to_string());
        Ok(())
    }

    fn render_content(&mut self, _: DisplaySet, _: usize, _: usize) -> Result<(), RenderError> {
        Ok(())
    }

    fn render_activation_progress(&mut self, percent: u8) -> Result<(), RenderError> {
        self.progress.push(percent);
        Ok(())
    }

    fn render_activation_cancelled(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn render_demo_enter_animation(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn render_demo_exit_animation(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn render_task_status(&mut self, _: usize, _: bool) -> Result<(), RenderError> {
        Ok(())
    }

    fn render_demo_content(
        &mut self,
        _: DisplaySet,
        _: usize,
        _: usize,
        _: &DemoContent,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}

struct Appliance {
    tracker: ChoreTracker<Button, Led, Counter>,
    tasks: [Button; 8],
    rows: [Button; 2],
    leds: [Led; 8],
    display: NullDisplay,
    now: u64,
}

impl Appliance {
    fn boot() -> Self {
        let tasks: [Button; 8] = core::array::from_fn(|_| Button::new());
        let rows: [Button; 2] = core::array::from_fn(|_| Button::new());
        let leds: [Led; 8] = core::array::from_fn(|_| Led(Rc::new(Cell::new(Level::Low))));
        let tracker = ChoreTracker::new(tasks.clone(), rows.clone(), leds.clone(), &WIRING, Counter(0));
        Self {
            tracker,
            tasks,
            rows,
            leds,
            display: NullDisplay::default(),
            now: 0,
        }
    }

    fn run_for(&mut self, ms: u64) -> Vec<Event> {
        let end = self.now + ms;
        let mut events = Vec::new();
        while self.now < end {
            events.extend_from_slice(self.tracker.tick(self.now, &mut self.display).events());
            self.now += POLL_INTERVAL_MS;
        }
        events
    }

    fn hold_rows(&mut self, ms: u64) -> Vec<Event> {
        self.rows[0].set(true);
        self.rows[1].set(true);
        let events = self.run_for(ms);
        self.rows[0].set(false);
        self.rows[1].set(false);
        events
    }

    fn led_on(&self) -> [bool; 8] {
        core::array::from_fn(|i| self.leds[i].level() == Level::High)
    }
}

fn count(events: &[Event], wanted: Event) -> usize {
    events.iter().filter(|e| **e == wanted).count()
}

#[test]
fn test_boot_state() {
    let app = Appliance::boot();
    let nav = app.tracker.navigator();
    for row in 0..ROW_COUNT {
        assert_eq!(nav.current_column(row), 0);
        assert_eq!(nav.mode(row), Some(NavMode::ShowingContent));
        assert!(nav.needs_display_update(row));
    }
    // Every LED lit: every task still to do
    assert_eq!(app.led_on(), [true; 8]);
    assert!(!app.tracker.is_demo_active());
}

#[test]
fn test_bouncy_task_button_commits_once_per_window() {
    let mut app = Appliance::boot();
    let mut events = Vec::new();
    // Chatter every poll for one debounce window, then settle pressed
    for n in 0..(TASK_DEBOUNCE_MS / POLL_INTERVAL_MS) {
        app.tasks[3].set(n % 2 == 0);
        events.extend(app.run_for(POLL_INTERVAL_MS));
    }
    app.tasks[3].set(true);
    events.extend(app.run_for(500));

    let changes: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Event::TaskChanged { channel: 3, .. }))
        .collect();
    assert!(!changes.is_empty() && changes.len() <= 2);
    assert_eq!(changes.last(), Some(&&Event::TaskChanged { channel: 3, completed: true }));
    assert!(!app.led_on()[3]);
}

#[test]
fn test_title_reverts_exactly_once() {
    let mut app = Appliance::boot();
    app.run_for(100);
    app.rows[0].set(true);
    let select_at = app.now;
    let events = app.run_for(50);
    app.rows[0].set(false);
    assert_eq!(count(&events, Event::ColumnSelected { row: 0, column: 1 }), 1);
    assert_eq!(app.display.titles.last().map(String::as_str), Some("Child 2"));

    let mut reverted_at = None;
    while app.now < select_at + TITLE_DISPLAY_MS * 2 {
        let now = app.now;
        let events = app.run_for(POLL_INTERVAL_MS);
        if events.contains(&Event::TitleExpired { row: 0 }) {
            assert!(reverted_at.is_none());
            reverted_at = Some(now);
        }
    }
    let reverted_at = reverted_at.unwrap();
    assert!(reverted_at >= select_at + TITLE_DISPLAY_MS);
    assert!(reverted_at <= select_at + TITLE_DISPLAY_MS + POLL_INTERVAL_MS);
}

#[test]
fn test_demo_entry_exactly_once() {
    let mut app = Appliance::boot();
    let events = app.hold_rows(DEMO_ACTIVATION_MS + 2000);
    assert_eq!(count(&events, Event::DemoEntered), 1);
    assert_eq!(count(&events, Event::HoldStarted), 1);
    assert!(app.tracker.is_demo_active());
    assert!(app.display.progress.windows(2).all(|w| w[0] <= w[1]));
    assert!(app.display.progress.iter().all(|p| *p <= 100));
}

#[test]
fn test_released_hold_does_not_carry_over() {
    let mut app = Appliance::boot();
    let events = app.hold_rows(DEMO_ACTIVATION_MS - 10);
    assert!(!events.contains(&Event::DemoEntered));
    // Let the release settle past the row-select debounce
    let events = app.run_for(300);
    assert!(events.contains(&Event::HoldCancelled));

    let events = app.hold_rows(DEMO_ACTIVATION_MS - 10);
    assert!(!events.contains(&Event::DemoEntered));
    assert!(!app.tracker.is_demo_active());
}

#[test]
fn test_demo_seed_outputs() {
    let mut app = Appliance::boot();
    app.hold_rows(DEMO_ACTIVATION_MS + 100);
    assert!(app.tracker.is_demo_active());

    let complete = app.tracker.outputs().states();
    assert_eq!(complete, [true, false, true, false, false, true, false, false]);
    // Inverted: complete tasks are dark
    assert_eq!(app.led_on(), complete.map(|c| !c));

    let content = app.tracker.demo().content();
    assert_eq!(content.completion_percentage(0), 2.0 * 100.0 / 6.0);
    assert_eq!(content.task_summary(1).as_str(), "1/6 tasks done");
}

#[test]
fn test_row_cycle_closes() {
    let mut app = Appliance::boot();
    for _ in 0..COLUMN_COUNT {
        app.rows[1].set(true);
        app.run_for(250);
        app.rows[1].set(false);
        app.run_for(250);
    }
    assert_eq!(app.tracker.navigator().current_column(1), 0);
    assert_eq!(app.tracker.navigator().current_column(0), 0);
}

#[test]
fn test_display_count_from_settings() {
    let mut app = Appliance::boot();
    let mut settings = Settings::default();
    settings.apply("display_count", "4").unwrap();
    app.tracker.apply_settings(&settings);
    assert_eq!(app.tracker.enabled_displays(), DisplaySet::row(0));
}

proptest! {
    #[test]
    fn prop_any_task_change_exits_demo(channel in 0usize..8, press in any::<bool>()) {
        let mut app = Appliance::boot();
        if !press {
            // Latch first so the change under test is a release
            app.tasks[channel].set(true);
            app.run_for(100);
        }

        app.hold_rows(DEMO_ACTIVATION_MS + 300);
        app.run_for(300);
        prop_assert!(app.tracker.is_demo_active());

        app.tasks[channel].set(press);
        let events = app.run_for(200);
        prop_assert_eq!(count(&events, Event::DemoExited), 1);
        prop_assert!(!app.tracker.is_demo_active());
        prop_assert_eq!(app.led_on(), [true; 8]);
    }
}
