//! Display layout
//!
//! Displays are numbered row-major: row 0 holds displays 0-3, row 1 holds
//! 4-7. Task button `n` sits under display `n`.

use super::hardware::{DISPLAYS_PER_ROW, DISPLAY_COUNT, ROW_COUNT, TASK_BUTTON_COUNT};

/// Display at `(row, col)`, or `None` off the grid
pub fn display_index(row: usize, col: usize) -> Option<usize> {
    if row >= ROW_COUNT || col >= DISPLAYS_PER_ROW {
        return None;
    }
    Some(row * DISPLAYS_PER_ROW + col)
}

/// Row a display belongs to
pub fn row_of_display(display: usize) -> Option<usize> {
    (display < DISPLAY_COUNT).then_some(display / DISPLAYS_PER_ROW)
}

/// Position of a display within its row
pub fn column_of_display(display: usize) -> Option<usize> {
    (display < DISPLAY_COUNT).then_some(display % DISPLAYS_PER_ROW)
}

/// First display of a row, where column titles are drawn
pub fn title_display(row: usize) -> Option<usize> {
    display_index(row, 0)
}

pub fn display_for_button(button: usize) -> Option<usize> {
    (button < TASK_BUTTON_COUNT).then_some(button)
}

pub fn button_for_display(display: usize) -> Option<usize> {
    (display < DISPLAY_COUNT).then_some(display)
}
