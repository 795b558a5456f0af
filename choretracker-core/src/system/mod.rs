//! Composed appliance state
//!
//! One [`ChoreTracker`] owns every channel and state machine. The
//! firmware calls [`ChoreTracker::tick`] once per poll with the current
//! time; each call runs, in order:
//!
//! 1. Input: task buttons (setting their LEDs) then row selects
//! 2. Demo activation from the held row selects
//! 3. Demo update, or navigation plus task status
//! 4. Row rendering for any row awaiting a redraw
//!
//! Nothing here logs. What happened is returned as a [`TickReport`].

use choretracker_hal::{InputPin, OutputPin};
use heapless::Vec;
use rand_core::RngCore;

use crate::config::{
    Settings, Wiring, ROW_COUNT, ROW_SELECT_COUNT, TASK_BUTTON_COUNT, TASK_LED_COUNT,
};
use crate::demo::{ActivationEvent, DemoActivation, DemoMode};
use crate::input::{RowSelects, TaskButtons, TaskChange};
use crate::navigation::Navigator;
use crate::output::TaskOutputs;
use crate::render::{DisplaySet, RenderDispatcher, RenderError, RenderExt};

/// Events one tick can report
pub const MAX_EVENTS: usize = 32;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    TaskChanged { channel: usize, completed: bool },
    ColumnSelected { row: usize, column: usize },
    TitleExpired { row: usize },
    HoldStarted,
    HoldCancelled,
    DemoEntered,
    DemoExited,
    /// Demo statistics are due for logging
    DemoStats,
    RenderFailed(RenderError),
}

/// Events from one tick, in the order they happened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    events: Vec<Event, MAX_EVENTS>,
}

impl TickReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, event: Event) {
        let _ = self.events.push(event);
    }

    fn record(&mut self, result: Result<(), RenderError>) {
        if let Err(err) = result {
            self.push(Event::RenderFailed(err));
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }
}

pub struct ChoreTracker<I, O, R> {
    buttons: TaskButtons<I>,
    row_selects: RowSelects<I>,
    outputs: TaskOutputs<O>,
    navigator: Navigator,
    activation: DemoActivation,
    demo: DemoMode,
    rng: R,
    enabled: DisplaySet,
}

impl<I, O, R> ChoreTracker<I, O, R>
where
    I: InputPin,
    O: OutputPin,
    R: RngCore,
{
    /// Boot state: every LED incomplete, both rows on column 0 awaiting
    /// their first paint, demo inactive, every display enabled
    pub fn new(
        task_pins: [I; TASK_BUTTON_COUNT],
        row_pins: [I; ROW_SELECT_COUNT],
        led_pins: [O; TASK_LED_COUNT],
        wiring: &Wiring,
        rng: R,
    ) -> Self {
        Self {
            buttons: TaskButtons::new(task_pins, &wiring.task_buttons),
            row_selects: RowSelects::new(row_pins, &wiring.row_selects),
            outputs: TaskOutputs::new(led_pins),
            navigator: Navigator::new(),
            activation: DemoActivation::default(),
            demo: DemoMode::new(),
            rng,
            enabled: DisplaySet::all(),
        }
    }

    /// Take on the runtime settings that affect behaviour
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_display_count(settings.display_count());
    }

    /// Render only to the first `count` displays
    pub fn set_display_count(&mut self, count: usize) {
        self.enabled = DisplaySet::first(count);
        self.navigator.force_redraw_all();
    }

    pub fn enabled_displays(&self) -> DisplaySet {
        self.enabled
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn outputs(&self) -> &TaskOutputs<O> {
        &self.outputs
    }

    pub fn buttons(&self) -> &TaskButtons<I> {
        &self.buttons
    }

    pub fn row_selects(&self) -> &RowSelects<I> {
        &self.row_selects
    }

    pub fn activation(&self) -> &DemoActivation {
        &self.activation
    }

    pub fn demo(&self) -> &DemoMode {
        &self.demo
    }

    pub fn is_demo_active(&self) -> bool {
        self.demo.is_active()
    }

    /// Run one poll cycle at `now_ms`
    pub fn tick<D: RenderDispatcher>(&mut self, now_ms: u64, display: &mut D) -> TickReport {
        let mut report = TickReport::new();

        let changes = self.buttons.poll(now_ms, &mut self.outputs);
        let presses = self.row_selects.poll(now_ms);
        for change in &changes {
            report.push(Event::TaskChanged {
                channel: change.channel,
                completed: change.completed,
            });
        }

        match self.activation.update(self.row_selects.all_held(), now_ms) {
            Some(ActivationEvent::Started) => {
                report.push(Event::HoldStarted);
                report.record(display.render_activation_progress(0));
            }
            Some(ActivationEvent::Progress(percent)) => {
                report.record(display.render_activation_progress(percent));
            }
            Some(ActivationEvent::Cancelled) => {
                report.push(Event::HoldCancelled);
                report.record(display.render_activation_cancelled());
                self.navigator.force_redraw_all();
            }
            Some(ActivationEvent::Activated) => {
                // Changes from this poll still get their status before the seed takes the LEDs
                for change in &changes {
                    report.record(display.render_task_status(change.channel, change.completed));
                }
                report.record(display.render_activation_progress(100));
                self.enter_demo(now_ms, display, &mut report);
                return report;
            }
            None => {}
        }

        if self.demo.is_active() {
            self.update_demo(now_ms, &changes, display, &mut report);
        } else {
            self.update_normal(now_ms, &changes, presses, display, &mut report);
        }

        self.render_rows(display, &mut report);
        report
    }

    fn update_demo<D: RenderDispatcher>(
        &mut self,
        now_ms: u64,
        changes: &[TaskChange],
        display: &mut D,
        report: &mut TickReport,
    ) {
        if !changes.is_empty() {
            self.exit_demo(display, report);
            return;
        }

        let update = self.demo.update(now_ms, &mut self.rng);
        if update.animated {
            self.navigator.force_redraw_all();
        }
        if update.stats_due {
            report.push(Event::DemoStats);
        }
    }

    fn update_normal<D: RenderDispatcher>(
        &mut self,
        now_ms: u64,
        changes: &[TaskChange],
        presses: [bool; ROW_COUNT],
        display: &mut D,
        report: &mut TickReport,
    ) {
        for change in changes {
            report.record(display.render_task_status(change.channel, change.completed));
        }

        for (row, pressed) in presses.into_iter().enumerate() {
            if !pressed {
                continue;
            }
            if let Some(column) = self.navigator.handle_row_select(row, now_ms) {
                report.push(Event::ColumnSelected { row, column });
            }
        }

        for (row, reverted) in self.navigator.update(now_ms).into_iter().enumerate() {
            if reverted {
                report.push(Event::TitleExpired { row });
            }
        }
    }

    fn enter_demo<D: RenderDispatcher>(
        &mut self,
        now_ms: u64,
        display: &mut D,
        report: &mut TickReport,
    ) {
        self.demo.start(now_ms);

        self.outputs.set_all_complete();
        let content = self.demo.content();
        for channel in 0..TASK_LED_COUNT {
            self.outputs
                .set_task_output(channel, content.channel_completed(channel));
        }

        report.push(Event::DemoEntered);
        report.record(display.render_demo_enter_animation());
        self.navigator.force_redraw_all();
    }

    fn exit_demo<D: RenderDispatcher>(&mut self, display: &mut D, report: &mut TickReport) {
        self.activation.exit();
        self.demo.stop();
        self.outputs.set_all_incomplete();

        report.push(Event::DemoExited);
        report.record(display.render_demo_exit_animation());
        self.navigator.force_redraw_all();
    }

    /// Paint rows whose redraw flag is set, then clear it
    ///
    /// Deferred while a hold is in progress so the progress view stays up.
    /// A failed paint still clears the flag; the next change repaints.
    fn render_rows<D: RenderDispatcher>(&mut self, display: &mut D, report: &mut TickReport) {
        if self.activation.is_holding() {
            return;
        }

        for row in 0..ROW_COUNT {
            if !self.navigator.needs_display_update(row) {
                continue;
            }

            let result = if self.demo.is_active() {
                let column = self.navigator.current_column(row);
                display.render_demo_row(row, column, self.demo.content(), self.enabled)
            } else {
                match self.navigator.view(row) {
                    Some(view) => {
                        display.render_row(row, view, self.navigator.titles(), self.enabled)
                    }
                    None => Ok(()),
                }
            };

            report.record(result);
            self.navigator.clear_update_flag(row);
        }
    }
}
