//! Runtime settings store
//!
//! A fixed set of recognized keys with typed access and defaults. The
//! firmware persists the whole record to flash as postcard binary data;
//! unknown keys arriving as text are ignored.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::DISPLAY_COUNT;

/// Current settings record layout
pub const SETTINGS_VERSION: u8 = 1;

/// Maximum WiFi SSID length
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WiFi password length
pub const MAX_PASSWORD_LEN: usize = 64;

/// Maximum remote-service URL length
pub const MAX_URL_LEN: usize = 64;

/// Maximum remote-service token length
pub const MAX_TOKEN_LEN: usize = 192;

/// Maximum device name length
pub const MAX_DEVICE_NAME_LEN: usize = 32;

/// Maximum weather API key length
pub const MAX_API_KEY_LEN: usize = 64;

/// Upper bound on a postcard-encoded settings record
pub const MAX_SETTINGS_SIZE: usize = 512;

/// Value type stored under a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingKind {
    Str,
    Int,
    Bool,
}

/// Recognized setting keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingKey {
    WifiSsid,
    WifiPassword,
    HaServer,
    HaToken,
    DeviceName,
    DisplayCount,
    DebugMode,
    AudioEnabled,
    WeatherApiKey,
    WeatherEnabled,
}

impl SettingKey {
    pub const ALL: [SettingKey; 10] = [
        SettingKey::WifiSsid,
        SettingKey::WifiPassword,
        SettingKey::HaServer,
        SettingKey::HaToken,
        SettingKey::DeviceName,
        SettingKey::DisplayCount,
        SettingKey::DebugMode,
        SettingKey::AudioEnabled,
        SettingKey::WeatherApiKey,
        SettingKey::WeatherEnabled,
    ];

    /// Text name used in key/value input
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::WifiSsid => "wifi_ssid",
            SettingKey::WifiPassword => "wifi_password",
            SettingKey::HaServer => "ha_server",
            SettingKey::HaToken => "ha_token",
            SettingKey::DeviceName => "device_name",
            SettingKey::DisplayCount => "display_count",
            SettingKey::DebugMode => "debug_mode",
            SettingKey::AudioEnabled => "audio_enabled",
            SettingKey::WeatherApiKey => "weather_api_key",
            SettingKey::WeatherEnabled => "weather_enabled",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn kind(self) -> SettingKind {
        match self {
            SettingKey::DisplayCount => SettingKind::Int,
            SettingKey::DebugMode | SettingKey::AudioEnabled | SettingKey::WeatherEnabled => {
                SettingKind::Bool
            }
            _ => SettingKind::Str,
        }
    }

    /// Credentials that must never be logged
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            SettingKey::WifiPassword | SettingKey::HaToken | SettingKey::WeatherApiKey
        )
    }
}

/// Settings access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Value type does not match the key
    TypeMismatch,
    /// Text value could not be parsed for the key's type
    InvalidValue,
    /// Numeric value outside the accepted range
    OutOfRange,
    /// String longer than the key's capacity
    TooLong,
    /// Serialization failed
    Encode,
    /// Deserialization failed
    Decode,
    /// Stored record has a different layout version
    VersionMismatch,
}

/// Device settings
///
/// Not `defmt::Format`: the record holds credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    version: u8,
    wifi_ssid: String<MAX_SSID_LEN>,
    wifi_password: String<MAX_PASSWORD_LEN>,
    ha_server: String<MAX_URL_LEN>,
    ha_token: String<MAX_TOKEN_LEN>,
    device_name: String<MAX_DEVICE_NAME_LEN>,
    display_count: u8,
    debug_mode: bool,
    audio_enabled: bool,
    weather_api_key: String<MAX_API_KEY_LEN>,
    weather_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            wifi_ssid: text("YOUR_WIFI_SSID"),
            wifi_password: text("YOUR_WIFI_PASSWORD"),
            ha_server: text("http://homeassistant.local:8123"),
            ha_token: text("YOUR_HA_LONG_LIVED_TOKEN"),
            device_name: text("ChoreTracker"),
            display_count: DISPLAY_COUNT as u8,
            debug_mode: true,
            audio_enabled: false,
            weather_api_key: String::new(),
            weather_enabled: false,
        }
    }
}

/// Default string, truncated if it does not fit
fn text<const N: usize>(value: &str) -> String<N> {
    let mut out = String::new();
    for c in value.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

fn assign<const N: usize>(slot: &mut String<N>, value: &str) -> Result<(), SettingsError> {
    if value.len() > N {
        return Err(SettingsError::TooLong);
    }
    slot.clear();
    slot.push_str(value).map_err(|_| SettingsError::TooLong)
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    ["true", "1", "on", "yes"]
        .iter()
        .any(|t| value.eq_ignore_ascii_case(t))
        .then_some(true)
        .or_else(|| {
            ["false", "0", "off", "no"]
                .iter()
                .any(|f| value.eq_ignore_ascii_case(f))
                .then_some(false)
        })
}

impl Settings {
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// String value for `key`; empty for non-string keys
    pub fn get_str(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::WifiSsid => self.wifi_ssid.as_str(),
            SettingKey::WifiPassword => self.wifi_password.as_str(),
            SettingKey::HaServer => self.ha_server.as_str(),
            SettingKey::HaToken => self.ha_token.as_str(),
            SettingKey::DeviceName => self.device_name.as_str(),
            SettingKey::WeatherApiKey => self.weather_api_key.as_str(),
            _ => "",
        }
    }

    /// Integer value for `key`; 0 for non-integer keys
    pub fn get_int(&self, key: SettingKey) -> i32 {
        match key {
            SettingKey::DisplayCount => i32::from(self.display_count),
            _ => 0,
        }
    }

    /// Boolean value for `key`; false for non-boolean keys
    pub fn get_bool(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::DebugMode => self.debug_mode,
            SettingKey::AudioEnabled => self.audio_enabled,
            SettingKey::WeatherEnabled => self.weather_enabled,
            _ => false,
        }
    }

    pub fn set_str(&mut self, key: SettingKey, value: &str) -> Result<(), SettingsError> {
        match key {
            SettingKey::WifiSsid => assign(&mut self.wifi_ssid, value),
            SettingKey::WifiPassword => assign(&mut self.wifi_password, value),
            SettingKey::HaServer => assign(&mut self.ha_server, value),
            SettingKey::HaToken => assign(&mut self.ha_token, value),
            SettingKey::DeviceName => assign(&mut self.device_name, value),
            SettingKey::WeatherApiKey => assign(&mut self.weather_api_key, value),
            _ => Err(SettingsError::TypeMismatch),
        }
    }

    pub fn set_int(&mut self, key: SettingKey, value: i32) -> Result<(), SettingsError> {
        match key {
            SettingKey::DisplayCount => {
                if !(1..=DISPLAY_COUNT as i32).contains(&value) {
                    return Err(SettingsError::OutOfRange);
                }
                self.display_count = value as u8;
                Ok(())
            }
            _ => Err(SettingsError::TypeMismatch),
        }
    }

    pub fn set_bool(&mut self, key: SettingKey, value: bool) -> Result<(), SettingsError> {
        match key {
            SettingKey::DebugMode => self.debug_mode = value,
            SettingKey::AudioEnabled => self.audio_enabled = value,
            SettingKey::WeatherEnabled => self.weather_enabled = value,
            _ => return Err(SettingsError::TypeMismatch),
        }
        Ok(())
    }

    /// Apply a textual `key = value` pair
    ///
    /// Returns `Ok(false)` for keys this device does not know, so a
    /// settings file written for a newer firmware still loads.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<bool, SettingsError> {
        let Some(key) = SettingKey::from_name(name.trim()) else {
            return Ok(false);
        };

        match key.kind() {
            SettingKind::Str => self.set_str(key, value.trim())?,
            SettingKind::Int => {
                let parsed = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| SettingsError::InvalidValue)?;
                self.set_int(key, parsed)?;
            }
            SettingKind::Bool => {
                let parsed = parse_bool(value).ok_or(SettingsError::InvalidValue)?;
                self.set_bool(key, parsed)?;
            }
        }
        Ok(true)
    }

    pub fn device_name(&self) -> &str {
        self.device_name.as_str()
    }

    /// Number of connected displays (1-8)
    pub fn display_count(&self) -> usize {
        usize::from(self.display_count)
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn weather_enabled(&self) -> bool {
        self.weather_enabled
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Encode into `buf` as postcard binary
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], SettingsError> {
        postcard::to_slice(self, buf).map_err(|_| SettingsError::Encode)
    }

    /// Decode a postcard record, rejecting other layout versions and
    /// out-of-range values
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SettingsError> {
        let mut settings: Settings =
            postcard::from_bytes(bytes).map_err(|_| SettingsError::Decode)?;
        if settings.version != SETTINGS_VERSION {
            return Err(SettingsError::VersionMismatch);
        }
        // Stored fields get the same checks as live edits
        let display_count = i32::from(settings.display_count);
        settings.set_int(SettingKey::DisplayCount, display_count)?;
        Ok(settings)
    }
}
