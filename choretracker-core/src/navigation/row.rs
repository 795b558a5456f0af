//! Per-row navigation state
//!
//! A row shows content until its row-select is pressed, then shows the
//! new column's title for a fixed time and reverts on its own.

use crate::config::COLUMN_COUNT;

/// What a row is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavMode {
    /// Column content across the row; held until the next row-select
    ShowingContent,
    /// Column title on the row's first display; time-bounded
    ShowingTitle,
}

/// Navigation inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavEvent {
    /// Row-select press edge
    Select { now_ms: u64 },
    /// Poll with the configured title duration
    Tick { now_ms: u64, title_ms: u64 },
    /// Jump straight to content of a column
    ResetTo { column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowNavigation {
    column: usize,
    mode: NavMode,
    title_start_ms: u64,
    needs_redraw: bool,
}

impl Default for RowNavigation {
    fn default() -> Self {
        Self::new()
    }
}

impl RowNavigation {
    /// Column 0, showing content, first paint pending
    pub const fn new() -> Self {
        Self {
            column: 0,
            mode: NavMode::ShowingContent,
            title_start_ms: 0,
            needs_redraw: true,
        }
    }

    /// Apply an event
    ///
    /// Returns true if the row changed and must be redrawn.
    pub fn handle(&mut self, event: NavEvent) -> bool {
        use NavEvent::*;
        use NavMode::*;

        match (self.mode, event) {
            // Pressing again while a title is up advances again
            (_, Select { now_ms }) => {
                self.column = (self.column + 1) % COLUMN_COUNT;
                self.mode = ShowingTitle;
                self.title_start_ms = now_ms;
            }

            (ShowingTitle, Tick { now_ms, title_ms })
                if now_ms.saturating_sub(self.title_start_ms) >= title_ms =>
            {
                self.mode = ShowingContent;
            }

            (_, ResetTo { column }) if column < COLUMN_COUNT => {
                self.column = column;
                self.mode = ShowingContent;
            }

            _ => return false,
        }

        self.needs_redraw = true;
        true
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn title_start_ms(&self) -> u64 {
        self.title_start_ms
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }
}
