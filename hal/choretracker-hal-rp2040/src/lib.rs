//! RP2040-specific HAL for the chore tracker firmware
//!
//! Implements the shared `choretracker-hal` traits on top of `embassy-rp`:
//!
//! - GPIO channel wrappers for buttons and LEDs
//! - Table-driven pin assignment by GPIO number
//! - Flash storage driver (implements `choretracker_hal::FlashStorage`)

#![no_std]

pub mod flash;
pub mod gpio;
pub mod pins;

pub use choretracker_hal::{FlashStorage as FlashStorageTrait, StorageKey};
