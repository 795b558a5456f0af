//! Settings persistence
//!
//! Loads the settings record from flash, falling back to defaults.

pub mod loader;

pub use loader::{log_settings_summary, SettingsLoadError, SettingsPersistence};
