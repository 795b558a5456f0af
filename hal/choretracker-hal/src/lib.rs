//! ChoreTracker Hardware Abstraction Layer
//!
//! Narrow capability traits the tracker logic is written against. Chip
//! HALs implement them for real GPIO and flash; tests implement them with
//! plain cells.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  choretracker-firmware                   │
//! └──────────────────────────────────────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌─────────────────┐   ┌────────────────────┐
//! │ choretracker-   │──▶│ choretracker-hal   │
//! │ core            │   │ (this crate)       │
//! └─────────────────┘   └────────────────────┘
//!                                  ▲
//!                                  │
//!                       ┌────────────────────┐
//!                       │ choretracker-hal-  │
//!                       │ rp2040             │
//!                       └────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital channels
//! - [`flash::FlashStorage`] - Persistent settings storage

#![no_std]
#![deny(unsafe_code)]

pub mod flash;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use gpio::{InputPin, Level, OutputPin};
