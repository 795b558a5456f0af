//! Settings persistence
//!
//! The settings record is a postcard blob under `StorageKey::Settings`.
//! A missing record is provisioned with factory defaults; an unreadable
//! one falls back to defaults without touching flash.

use defmt::*;

use choretracker_core::config::settings::{MAX_SETTINGS_SIZE, SETTINGS_VERSION};
use choretracker_core::config::{SettingKey, SettingKind, Settings, SettingsError};
use choretracker_hal_rp2040::flash::{FlashError, Rp2040FlashStorage, StorageKey};
use choretracker_hal_rp2040::FlashStorageTrait;

/// Settings load/store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsLoadError {
    /// Flash operation failed
    Flash(FlashError),
    /// Record is not valid postcard
    Decode,
    /// Settings could not be encoded
    Encode,
    /// Record written by an incompatible firmware
    VersionMismatch,
}

impl From<FlashError> for SettingsLoadError {
    fn from(e: FlashError) -> Self {
        SettingsLoadError::Flash(e)
    }
}

impl From<SettingsError> for SettingsLoadError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::VersionMismatch => SettingsLoadError::VersionMismatch,
            SettingsError::Encode => SettingsLoadError::Encode,
            _ => SettingsLoadError::Decode,
        }
    }
}

pub struct SettingsPersistence<'d> {
    storage: Rp2040FlashStorage<'d>,
}

impl<'d> SettingsPersistence<'d> {
    pub fn new(storage: Rp2040FlashStorage<'d>) -> Self {
        Self { storage }
    }

    /// Read the stored settings
    pub async fn load(&mut self) -> Result<Settings, SettingsLoadError> {
        let mut buffer = [0u8; MAX_SETTINGS_SIZE];
        let len = self.storage.read(StorageKey::Settings, &mut buffer).await?;

        debug!("Read {} bytes of settings from flash", len);

        let settings = Settings::from_bytes(&buffer[..len]).map_err(|e| {
            if e == SettingsError::VersionMismatch {
                warn!("Settings version mismatch, expected {}", SETTINGS_VERSION);
            }
            SettingsLoadError::from(e)
        })?;

        Ok(settings)
    }

    /// Stored settings, or defaults when there are none usable
    pub async fn load_or_default(&mut self) -> Settings {
        match self.load().await {
            Ok(settings) => {
                info!("Loaded settings from flash");
                settings
            }
            Err(SettingsLoadError::Flash(FlashError::NotFound)) => {
                info!("No settings in flash, storing defaults");
                let defaults = Settings::default();
                if let Err(e) = self.save(&defaults).await {
                    warn!("Failed to store default settings: {}", e);
                }
                defaults
            }
            Err(e) => {
                warn!("Stored settings unusable ({}), using defaults", e);
                Settings::default()
            }
        }
    }

    /// Replace the stored settings
    pub async fn save(&mut self, settings: &Settings) -> Result<(), SettingsLoadError> {
        let mut buffer = [0u8; MAX_SETTINGS_SIZE];
        let bytes = settings.to_bytes(&mut buffer)?;
        self.storage.write(StorageKey::Settings, bytes).await?;
        info!("Saved {} bytes of settings", bytes.len());
        Ok(())
    }
}

/// Log the loaded settings; secrets only as set/unset
pub fn log_settings_summary(settings: &Settings) {
    info!("Settings v{}:", settings.version());
    for key in SettingKey::ALL {
        if key.is_secret() {
            let set = !settings.get_str(key).is_empty();
            info!("  {} = <{}>", key.name(), if set { "set" } else { "unset" });
            continue;
        }
        match key.kind() {
            SettingKind::Str => {
                info!("  {} = {}", key.name(), settings.get_str(key))
            }
            SettingKind::Int => {
                info!("  {} = {}", key.name(), settings.get_int(key))
            }
            SettingKind::Bool => {
                info!("  {} = {}", key.name(), settings.get_bool(key))
            }
        }
    }
}
