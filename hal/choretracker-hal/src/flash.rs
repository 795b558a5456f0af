//! Flash storage abstractions
//!
//! Key/value persistence for the settings store. Implementations handle
//! wear leveling and integrity; callers only see whole records.

/// Storage keys for persisted records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Device settings (binary postcard format)
    Settings = 0,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::Settings),
            _ => None,
        }
    }
}

/// Errors from flash storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Flash operation failed
    Flash,
    /// Storage layer failed
    Storage,
    /// Key not found
    NotFound,
    /// Buffer too small for the record
    BufferTooSmall,
    /// Record corrupted or invalid
    Corrupted,
    /// Partition is full
    Full,
}

/// Wear-leveled key/value storage
pub trait FlashStorage {
    /// Read the record stored under `key` into `buffer`
    ///
    /// Returns the number of bytes read.
    fn read(
        &mut self,
        key: StorageKey,
        buffer: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, FlashError>>;

    /// Replace the record stored under `key`
    fn write(
        &mut self,
        key: StorageKey,
        data: &[u8],
    ) -> impl core::future::Future<Output = Result<(), FlashError>>;
}

#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        let Some(slot) = buffer.first_mut() else {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        };
        *slot = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        let Some(&byte) = buffer.first() else {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        };
        StorageKey::from_u8(byte)
            .map(|key| (key, 1))
            .ok_or(sequential_storage::map::SerializationError::InvalidFormat)
    }
}
