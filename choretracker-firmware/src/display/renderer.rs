//! Text renderer
//!
//! Implements the core's render dispatcher by describing each display's
//! contents as one line of text.

use core::fmt::Write;

use defmt::*;
use heapless::String;

use choretracker_core::config::{row_of_display, COLUMN_COUNT};
use choretracker_core::demo::DemoContent;
use choretracker_core::render::{DisplaySet, RenderDispatcher, RenderError};

/// Longest line a display description can take
const LINE_LEN: usize = 48;

/// Column a logical column index stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Person(usize),
    Weather,
    Family,
}

fn column_kind(column: usize) -> Option<ColumnKind> {
    match column {
        0 | 1 => Some(ColumnKind::Person(column)),
        2 => Some(ColumnKind::Weather),
        3 => Some(ColumnKind::Family),
        _ => None,
    }
}

/// Describe demo display `display` showing `column`
fn demo_line(display: usize, column: usize, position: usize, content: &DemoContent) -> String<LINE_LEN> {
    let mut line = String::new();
    let _ = match column_kind(column) {
        Some(ColumnKind::Person(person)) => match content.person(person).and_then(|p| p.task(position)) {
            Some(task) => write!(
                line,
                "{} [{}] {}",
                task.name,
                if task.is_completed() { "x" } else { " " },
                task.description
            ),
            None => write!(line, "{}", content.task_summary(person).as_str()),
        },
        Some(ColumnKind::Weather) => {
            let weather = content.weather();
            write!(line, "{} {}C", weather.condition, weather.temperature_c)
        }
        Some(ColumnKind::Family) => match content.family_events().get(position) {
            Some(event) => write!(
                line,
                "{} {}{}",
                event.time,
                event.name,
                if event.active { " (today)" } else { "" }
            ),
            None => Ok(()),
        },
        None => write!(line, "display {}", display),
    };
    line
}

/// Renders to the defmt log
pub struct LogRenderer {
    frames: u32,
}

impl LogRenderer {
    pub const fn new() -> Self {
        Self { frames: 0 }
    }

    /// Draw requests handled so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    fn check(&mut self, targets: DisplaySet) -> Result<(), RenderError> {
        if targets.is_empty() {
            return Err(RenderError::InvalidTarget);
        }
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }
}

impl RenderDispatcher for LogRenderer {
    fn render_title(
        &mut self,
        targets: DisplaySet,
        title: &str,
        column: usize,
    ) -> Result<(), RenderError> {
        self.check(targets)?;
        for display in targets.iter() {
            info!("[D{}] == {} == ({}/{})", display, title, column + 1, COLUMN_COUNT);
        }
        Ok(())
    }

    fn render_content(
        &mut self,
        targets: DisplaySet,
        column: usize,
        position: usize,
    ) -> Result<(), RenderError> {
        self.check(targets)?;
        for display in targets.iter() {
            debug!("[D{}] column {} slot {}", display, column, position);
        }
        Ok(())
    }

    fn render_activation_progress(&mut self, percent: u8) -> Result<(), RenderError> {
        self.frames = self.frames.wrapping_add(1);
        // Every poll while holding; only log the round numbers
        if percent % 20 == 0 {
            info!("Demo activation: {}%", percent);
        }
        Ok(())
    }

    fn render_activation_cancelled(&mut self) -> Result<(), RenderError> {
        self.frames = self.frames.wrapping_add(1);
        info!("Demo activation cancelled");
        Ok(())
    }

    fn render_demo_enter_animation(&mut self) -> Result<(), RenderError> {
        self.frames = self.frames.wrapping_add(1);
        info!("*** DEMO MODE ***");
        Ok(())
    }

    fn render_demo_exit_animation(&mut self) -> Result<(), RenderError> {
        self.frames = self.frames.wrapping_add(1);
        info!("Leaving demo mode");
        Ok(())
    }

    fn render_task_status(&mut self, channel: usize, completed: bool) -> Result<(), RenderError> {
        self.frames = self.frames.wrapping_add(1);
        info!(
            "[D{}] task {}",
            channel,
            if completed { "done" } else { "to do" }
        );
        Ok(())
    }

    fn render_demo_content(
        &mut self,
        targets: DisplaySet,
        column: usize,
        position: usize,
        content: &DemoContent,
    ) -> Result<(), RenderError> {
        self.check(targets)?;
        for display in targets.iter() {
            let line = demo_line(display, column, position, content);
            trace!(
                "[D{}] row {} phase {}: {}",
                display,
                row_of_display(display).unwrap_or(0),
                content.animation_phase(),
                line.as_str()
            );
        }
        Ok(())
    }
}
