//! Configuration
//!
//! Static wiring and timing tables, the display layout, and the runtime
//! settings store persisted as postcard binary data.

pub mod hardware;
pub mod layout;
pub mod settings;

pub use hardware::*;
pub use layout::*;
pub use settings::{SettingKey, SettingKind, Settings, SettingsError};
