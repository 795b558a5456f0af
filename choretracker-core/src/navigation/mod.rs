//! Row navigation
//!
//! Two independent rows share one set of column titles and one title
//! duration. Redraw flags follow a one-shot protocol: whoever renders a
//! row clears its flag, otherwise the row repaints every poll.

pub mod row;
pub mod titles;

pub use row::{NavEvent, NavMode, RowNavigation};
pub use titles::{ColumnTitles, DEFAULT_TITLES, MAX_TITLE_LEN, UNKNOWN_TITLE};

use crate::config::{display_index, ROW_COUNT, TITLE_DISPLAY_MS};

/// What a row should currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RowView {
    Title { column: usize },
    Content { column: usize },
}

/// Navigation for both rows
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Navigator {
    rows: [RowNavigation; ROW_COUNT],
    titles: ColumnTitles,
    title_ms: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            rows: [RowNavigation::new(); ROW_COUNT],
            titles: ColumnTitles::default(),
            title_ms: TITLE_DISPLAY_MS,
        }
    }

    /// Row-select press on `row`
    ///
    /// Returns the column now selected, or `None` for an invalid row.
    pub fn handle_row_select(&mut self, row: usize, now_ms: u64) -> Option<usize> {
        let state = self.rows.get_mut(row)?;
        state.handle(NavEvent::Select { now_ms });
        Some(state.column())
    }

    /// Expire titles whose time is up
    ///
    /// Entry `row` is true on the one poll where that row reverts.
    pub fn update(&mut self, now_ms: u64) -> [bool; ROW_COUNT] {
        let title_ms = self.title_ms;
        let mut reverted = [false; ROW_COUNT];
        for (row, state) in self.rows.iter_mut().enumerate() {
            reverted[row] = state.handle(NavEvent::Tick { now_ms, title_ms });
        }
        reverted
    }

    /// Current column of `row`; 0 for an invalid row
    pub fn current_column(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, RowNavigation::column)
    }

    pub fn mode(&self, row: usize) -> Option<NavMode> {
        self.rows.get(row).map(RowNavigation::mode)
    }

    pub fn should_show_title(&self, row: usize) -> bool {
        self.mode(row) == Some(NavMode::ShowingTitle)
    }

    pub fn should_show_content(&self, row: usize) -> bool {
        self.mode(row) == Some(NavMode::ShowingContent)
    }

    pub fn view(&self, row: usize) -> Option<RowView> {
        let state = self.rows.get(row)?;
        let column = state.column();
        Some(match state.mode() {
            NavMode::ShowingTitle => RowView::Title { column },
            NavMode::ShowingContent => RowView::Content { column },
        })
    }

    pub fn needs_display_update(&self, row: usize) -> bool {
        self.rows.get(row).is_some_and(RowNavigation::needs_redraw)
    }

    pub fn clear_update_flag(&mut self, row: usize) {
        if let Some(state) = self.rows.get_mut(row) {
            state.clear_redraw();
        }
    }

    /// Jump `row` to content of `column`, skipping the title
    ///
    /// Returns false if either index is out of range.
    pub fn reset_to_column(&mut self, row: usize, column: usize) -> bool {
        self.rows
            .get_mut(row)
            .is_some_and(|state| state.handle(NavEvent::ResetTo { column }))
    }

    /// Repaint `row` without changing what it shows
    pub fn force_redraw(&mut self, row: usize) {
        if let Some(state) = self.rows.get_mut(row) {
            state.force_redraw();
        }
    }

    pub fn force_redraw_all(&mut self) {
        for state in &mut self.rows {
            state.force_redraw();
        }
    }

    /// Change how long titles stay up; applies to both rows
    pub fn set_title_duration(&mut self, ms: u64) {
        self.title_ms = ms;
    }

    pub fn title_duration_ms(&self) -> u64 {
        self.title_ms
    }

    pub fn column_title(&self, column: usize) -> &str {
        self.titles.get(column)
    }

    pub fn set_column_title(&mut self, column: usize, title: &str) -> bool {
        self.titles.set(column, title)
    }

    pub fn titles(&self) -> &ColumnTitles {
        &self.titles
    }

    /// Display showing `col` of `row`
    pub fn display_index(&self, row: usize, col: usize) -> Option<usize> {
        display_index(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COLUMN_COUNT;
    use proptest::prelude::*;

    #[test]
    fn test_boot_state() {
        let nav = Navigator::new();
        for row in 0..ROW_COUNT {
            assert_eq!(nav.current_column(row), 0);
            assert!(nav.should_show_content(row));
            assert!(nav.needs_display_update(row));
        }
        assert_eq!(nav.title_duration_ms(), 2000);
    }

    #[test]
    fn test_rows_independent() {
        let mut nav = Navigator::new();
        assert_eq!(nav.handle_row_select(1, 0), Some(1));
        assert_eq!(nav.current_column(0), 0);
        assert!(nav.should_show_content(0));
        assert!(nav.should_show_title(1));
    }

    #[test]
    fn test_title_reverts_once() {
        let mut nav = Navigator::new();
        nav.clear_update_flag(0);
        nav.clear_update_flag(1);

        nav.handle_row_select(0, 500);
        nav.clear_update_flag(0);

        let mut reverts = 0;
        for now in (500..5000).step_by(10) {
            if nav.update(now)[0] {
                assert_eq!(now, 2500);
                assert!(nav.needs_display_update(0));
                nav.clear_update_flag(0);
                reverts += 1;
            }
        }
        assert_eq!(reverts, 1);
        assert!(nav.should_show_content(0));
        assert!(!nav.needs_display_update(1));
    }

    #[test]
    fn test_title_duration_configurable() {
        let mut nav = Navigator::new();
        nav.set_title_duration(300);
        nav.handle_row_select(0, 0);
        nav.handle_row_select(1, 0);
        assert_eq!(nav.update(299), [false, false]);
        assert_eq!(nav.update(300), [true, true]);
    }

    #[test]
    fn test_view_follows_mode() {
        let mut nav = Navigator::new();
        assert_eq!(nav.view(0), Some(RowView::Content { column: 0 }));
        nav.handle_row_select(0, 0);
        assert_eq!(nav.view(0), Some(RowView::Title { column: 1 }));
        assert_eq!(nav.view(2), None);
    }

    #[test]
    fn test_invalid_row_safe_defaults() {
        let mut nav = Navigator::new();
        assert_eq!(nav.handle_row_select(2, 0), None);
        assert_eq!(nav.current_column(2), 0);
        assert!(!nav.should_show_title(2));
        assert!(!nav.should_show_content(2));
        assert!(!nav.needs_display_update(2));
        assert!(!nav.reset_to_column(2, 1));
        nav.force_redraw(2);
        nav.clear_update_flag(2);
    }

    #[test]
    fn test_reset_and_force_redraw() {
        let mut nav = Navigator::new();
        nav.clear_update_flag(0);
        assert!(nav.reset_to_column(0, 2));
        assert_eq!(nav.current_column(0), 2);
        assert!(nav.needs_display_update(0));

        nav.clear_update_flag(0);
        nav.force_redraw(0);
        assert!(nav.needs_display_update(0));
        assert_eq!(nav.current_column(0), 2);
        assert!(nav.should_show_content(0));

        assert!(!nav.reset_to_column(0, COLUMN_COUNT));
    }

    #[test]
    fn test_titles_and_layout() {
        let mut nav = Navigator::new();
        assert!(nav.set_column_title(0, "Emma"));
        assert_eq!(nav.column_title(0), "Emma");
        assert_eq!(nav.column_title(9), UNKNOWN_TITLE);
        assert_eq!(nav.display_index(1, 2), Some(6));
        assert_eq!(nav.display_index(1, 4), None);
    }

    proptest! {
        #[test]
        fn prop_cycle_closes(row in 0usize..ROW_COUNT, start in 0usize..COLUMN_COUNT, laps in 1usize..5) {
            let mut nav = Navigator::new();
            nav.reset_to_column(row, start);

            for n in 0..COLUMN_COUNT * laps {
                let column = nav.handle_row_select(row, n as u64 * 250).unwrap();
                prop_assert!(column < COLUMN_COUNT);
            }
            prop_assert_eq!(nav.current_column(row), start);
        }

        #[test]
        fn prop_modes_exclusive(presses in proptest::collection::vec((0usize..ROW_COUNT, 0u64..100), 0..40)) {
            let mut nav = Navigator::new();
            let mut now = 0;
            for (row, gap) in presses {
                now += gap * 10;
                nav.handle_row_select(row, now);
                nav.update(now);
                for r in 0..ROW_COUNT {
                    prop_assert!(nav.should_show_title(r) != nav.should_show_content(r));
                    prop_assert!(nav.current_column(r) < COLUMN_COUNT);
                }
            }
        }
    }
}
