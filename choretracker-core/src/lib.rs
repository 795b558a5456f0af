//! Board-agnostic coordination core for the chore tracker
//!
//! Everything that decides what the appliance does lives here, written
//! against the `choretracker-hal` channel traits so it runs unchanged on
//! the RP2040 and on the host under test:
//!
//! - Debounced task-button and row-select input
//! - Task LED output with inverted complete/incomplete logic
//! - Per-row navigation with timed title reversion
//! - Demo mode activation by a sustained dual hold
//! - Demo content (people, tasks, weather, family events)
//! - Render dispatcher boundary
//! - Wiring tables and the settings store
//!
//! [`system::ChoreTracker`] composes the pieces into one `tick(now_ms)`
//! driven by the firmware's poll loop.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod demo;
pub mod input;
pub mod navigation;
pub mod output;
pub mod render;
pub mod system;

#[cfg(test)]
mod testing;
