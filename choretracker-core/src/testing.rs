//! Host test doubles: mock channels, a recording dispatcher, a scripted RNG

use std::cell::Cell;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use choretracker_hal::{InputPin, Level, OutputPin};
use rand_core::{impls, RngCore};

use crate::demo::DemoContent;
use crate::render::{DisplaySet, RenderDispatcher, RenderError};

/// Input line whose level the test sets; clones share the line
#[derive(Debug, Clone)]
pub struct MockInput {
    level: Rc<Cell<Level>>,
    active: Level,
}

impl MockInput {
    /// Pulled-up button, released
    pub fn active_low() -> Self {
        Self {
            level: Rc::new(Cell::new(Level::High)),
            active: Level::Low,
        }
    }

    pub fn press(&self) {
        self.level.set(self.active);
    }

    pub fn release(&self) {
        self.level.set(self.active.inverted());
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.level.get().is_high()
    }
}

/// Output line that remembers its level; clones share the line
#[derive(Debug, Clone)]
pub struct MockOutput {
    level: Rc<Cell<Level>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            level: Rc::new(Cell::new(Level::Low)),
        }
    }

    pub fn level(&self) -> Level {
        self.level.get()
    }
}

impl OutputPin for MockOutput {
    fn set_high(&mut self) {
        self.level.set(Level::High);
    }

    fn set_low(&mut self) {
        self.level.set(Level::Low);
    }

    fn level(&self) -> Level {
        self.level.get()
    }
}

/// One dispatcher call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Title {
        targets: DisplaySet,
        title: String,
        column: usize,
    },
    Content {
        targets: DisplaySet,
        column: usize,
        position: usize,
    },
    Progress(u8),
    Cancelled,
    DemoEnter,
    DemoExit,
    TaskStatus {
        channel: usize,
        completed: bool,
    },
    DemoContent {
        targets: DisplaySet,
        column: usize,
        position: usize,
    },
}

/// Records every call; fails each one with `fail_with` when set
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub calls: Vec<Call>,
    pub fail_with: Option<RenderError>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, call: Call) -> Result<(), RenderError> {
        self.calls.push(call);
        match self.fail_with {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl RenderDispatcher for RecordingDispatcher {
    fn render_title(
        &mut self,
        targets: DisplaySet,
        title: &str,
        column: usize,
    ) -> Result<(), RenderError> {
        self.record(Call::Title {
            targets,
            title: title.into(),
            column,
        })
    }

    fn render_content(
        &mut self,
        targets: DisplaySet,
        column: usize,
        position: usize,
    ) -> Result<(), RenderError> {
        self.record(Call::Content {
            targets,
            column,
            position,
        })
    }

    fn render_activation_progress(&mut self, percent: u8) -> Result<(), RenderError> {
        self.record(Call::Progress(percent))
    }

    fn render_activation_cancelled(&mut self) -> Result<(), RenderError> {
        self.record(Call::Cancelled)
    }

    fn render_demo_enter_animation(&mut self) -> Result<(), RenderError> {
        self.record(Call::DemoEnter)
    }

    fn render_demo_exit_animation(&mut self) -> Result<(), RenderError> {
        self.record(Call::DemoExit)
    }

    fn render_task_status(&mut self, channel: usize, completed: bool) -> Result<(), RenderError> {
        self.record(Call::TaskStatus { channel, completed })
    }

    fn render_demo_content(
        &mut self,
        targets: DisplaySet,
        column: usize,
        position: usize,
        _content: &DemoContent,
    ) -> Result<(), RenderError> {
        self.record(Call::DemoContent {
            targets,
            column,
            position,
        })
    }
}

/// RNG that replays a fixed list of `u32`s, wrapping around
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
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
