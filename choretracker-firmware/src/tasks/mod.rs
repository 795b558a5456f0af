//! Embassy async tasks
//!
//! The poll task owns the tracker; the event log task drains what it
//! reports so logging never delays a poll.

pub mod event_log;
pub mod poll;

pub use event_log::{event_log_task, EVENTS};
pub use poll::{poll_task, Tracker};
