//! Render dispatcher boundary
//!
//! The core decides what each display shows; drawing it is somebody
//! else's job. Implementations range from the real SPI display driver to
//! a defmt text log to a recording mock in tests.

use crate::config::{column_of_display, display_index, title_display, DISPLAYS_PER_ROW, DISPLAY_COUNT};
use crate::demo::DemoContent;
use crate::navigation::{ColumnTitles, RowView};

/// Errors a dispatcher can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Bus transfer to a display failed
    Bus,
    /// Display still busy with a previous frame
    Busy,
    /// Target set names a display that does not exist
    InvalidTarget,
}

/// Set of display indices, one bit per display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySet(u8);

const _: () = assert!(DISPLAY_COUNT <= u8::BITS as usize);

impl DisplaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every display
    pub const fn all() -> Self {
        Self::first(DISPLAY_COUNT)
    }

    /// Displays `0..n`
    pub const fn first(n: usize) -> Self {
        if n >= DISPLAY_COUNT {
            Self(((1u16 << DISPLAY_COUNT) - 1) as u8)
        } else {
            Self(((1u16 << n) - 1) as u8)
        }
    }

    /// Just `display`; empty when out of range
    pub const fn single(display: usize) -> Self {
        if display < DISPLAY_COUNT {
            Self(1 << display)
        } else {
            Self(0)
        }
    }

    /// The displays of `row`; empty for an invalid row
    pub fn row(row: usize) -> Self {
        let mut set = Self::empty();
        for col in 0..DISPLAYS_PER_ROW {
            if let Some(display) = display_index(row, col) {
                set.insert(display);
            }
        }
        set
    }

    /// Add `display`; false when out of range
    pub fn insert(&mut self, display: usize) -> bool {
        if display < DISPLAY_COUNT {
            self.0 |= 1 << display;
            true
        } else {
            false
        }
    }

    pub fn contains(&self, display: usize) -> bool {
        display < DISPLAY_COUNT && self.0 & (1 << display) != 0
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Display indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..DISPLAY_COUNT).filter(move |&d| self.contains(d))
    }
}

/// Drawing operations the core asks for
///
/// `position` is the display's column within its row (0-3). `column` is
/// the row's selected logical column.
pub trait RenderDispatcher {
    /// Column title on `targets`
    fn render_title(
        &mut self,
        targets: DisplaySet,
        title: &str,
        column: usize,
    ) -> Result<(), RenderError>;

    /// Column content on `targets`
    fn render_content(
        &mut self,
        targets: DisplaySet,
        column: usize,
        position: usize,
    ) -> Result<(), RenderError>;

    /// Demo activation progress, 0-100; redrawn every poll while holding
    fn render_activation_progress(&mut self, percent: u8) -> Result<(), RenderError>;

    /// Hold released before demo activation
    fn render_activation_cancelled(&mut self) -> Result<(), RenderError>;

    fn render_demo_enter_animation(&mut self) -> Result<(), RenderError>;

    fn render_demo_exit_animation(&mut self) -> Result<(), RenderError>;

    /// Task on `channel` changed outside demo mode
    fn render_task_status(&mut self, channel: usize, completed: bool) -> Result<(), RenderError>;

    /// Demo view on `targets`
    fn render_demo_content(
        &mut self,
        targets: DisplaySet,
        column: usize,
        position: usize,
        content: &DemoContent,
    ) -> Result<(), RenderError>;
}

/// Row-level drawing built on [`RenderDispatcher`]
pub trait RenderExt: RenderDispatcher {
    /// Paint `row` according to `view`, limited to `enabled` displays
    ///
    /// A title goes to the row's first display only. Content goes to
    /// every display of the row, each with its own position. Displays
    /// outside `enabled` are skipped.
    fn render_row(
        &mut self,
        row: usize,
        view: RowView,
        titles: &ColumnTitles,
        enabled: DisplaySet,
    ) -> Result<(), RenderError> {
        match view {
            RowView::Title { column } => {
                let Some(display) = title_display(row) else {
                    return Err(RenderError::InvalidTarget);
                };
                let targets = DisplaySet::single(display).intersection(enabled);
                if targets.is_empty() {
                    return Ok(());
                }
                self.render_title(targets, titles.get(column), column)
            }
            RowView::Content { column } => {
                let targets = DisplaySet::row(row).intersection(enabled);
                for display in targets.iter() {
                    let position = column_of_display(display).unwrap_or(0);
                    self.render_content(DisplaySet::single(display), column, position)?;
                }
                Ok(())
            }
        }
    }

    /// Paint the demo view across `row`
    fn render_demo_row(
        &mut self,
        row: usize,
        column: usize,
        content: &DemoContent,
        enabled: DisplaySet,
    ) -> Result<(), RenderError> {
        let targets = DisplaySet::row(row).intersection(enabled);
        for display in targets.iter() {
            let position = column_of_display(display).unwrap_or(0);
            self.render_demo_content(DisplaySet::single(display), column, position, content)?;
        }
        Ok(())
    }
}

impl<T: RenderDispatcher> RenderExt for T {}
