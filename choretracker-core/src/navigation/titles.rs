//! Column titles
//!
//! Labels shown when a row switches column. Independent of any row's
//! navigation state and editable at runtime.

use heapless::String;

use crate::config::COLUMN_COUNT;

/// Maximum title length in bytes
pub const MAX_TITLE_LEN: usize = 16;

/// Returned for column indices that do not exist
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Factory titles
pub const DEFAULT_TITLES: [&str; COLUMN_COUNT] = ["Child 1", "Child 2", "Weather", "Family"];

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColumnTitles {
    titles: [String<MAX_TITLE_LEN>; COLUMN_COUNT],
}

impl Default for ColumnTitles {
    fn default() -> Self {
        let mut titles = Self {
            titles: core::array::from_fn(|_| String::new()),
        };
        for (column, title) in DEFAULT_TITLES.iter().enumerate() {
            titles.set(column, title);
        }
        titles
    }
}

impl ColumnTitles {
    /// Title of `column`, or [`UNKNOWN_TITLE`]
    pub fn get(&self, column: usize) -> &str {
        self.titles
            .get(column)
            .map_or(UNKNOWN_TITLE, |title| title.as_str())
    }

    /// Replace the title of `column`
    ///
    /// Longer titles are cut at the last whole character that fits.
    /// Returns false for a column that does not exist.
    pub fn set(&mut self, column: usize, title: &str) -> bool {
        let Some(slot) = self.titles.get_mut(column) else {
            return false;
        };
        slot.clear();
        for c in title.chars() {
            if slot.push(c).is_err() {
                break;
            }
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(|title| title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let titles = ColumnTitles::default();
        assert_eq!(titles.get(0), "Child 1");
        assert_eq!(titles.get(3), "Family");
        assert_eq!(titles.iter().count(), COLUMN_COUNT);
    }

    #[test]
    fn test_unknown_sentinel() {
        let titles = ColumnTitles::default();
        assert_eq!(titles.get(4), UNKNOWN_TITLE);
        assert_eq!(titles.get(usize::MAX), "Unknown");
    }

    #[test]
    fn test_set_title() {
        let mut titles = ColumnTitles::default();
        assert!(titles.set(0, "Emma"));
        assert!(titles.set(1, "Jack"));
        assert_eq!(titles.get(0), "Emma");
        assert_eq!(titles.get(1), "Jack");
        assert!(!titles.set(4, "Nobody"));
    }

    #[test]
    fn test_long_title_truncated_on_char_boundary() {
        let mut titles = ColumnTitles::default();
        // 15 ASCII bytes, then a 2-byte character that does not fit
        titles.set(2, "abcdefghijklmnoé");
        assert_eq!(titles.get(2), "abcdefghijklmno");

        titles.set(2, "a very long weather column title");
        assert_eq!(titles.get(2).len(), MAX_TITLE_LEN);
    }
}
