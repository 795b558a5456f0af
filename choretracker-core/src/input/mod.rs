//! Debounced channel input
//!
//! Task buttons are latching toggles: every accepted level change is
//! reported. Row-select buttons are momentary: only a press edge is.

pub mod debounce;
pub mod reader;

pub use debounce::Debouncer;
pub use reader::{InputChannel, RowSelects, TaskButtons, TaskChange};
