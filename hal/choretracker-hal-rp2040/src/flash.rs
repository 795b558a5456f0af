//! Flash storage driver for RP2040
//!
//! Wear-leveled key/value records in the last 64KB of flash through
//! sequential-storage.

use choretracker_hal::FlashStorage;
use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

pub use choretracker_hal::flash::{FlashError, StorageKey};

/// Flash storage layout
pub const FLASH_SIZE: usize = 2 * 1024 * 1024; // 2MB on the Pico
pub const CONFIG_PARTITION_SIZE: usize = 64 * 1024;
pub const CONFIG_PARTITION_START: usize = FLASH_SIZE - CONFIG_PARTITION_SIZE;

/// Flash range for the config partition
pub const CONFIG_RANGE: core::ops::Range<u32> =
    (CONFIG_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Scratch buffer for one record
const RECORD_BUFFER_SIZE: usize = 1024;

fn map_error<E>(err: sequential_storage::Error<E>) -> FlashError {
    use sequential_storage::Error;

    match err {
        Error::Storage { .. } => FlashError::Flash,
        Error::FullStorage { .. } => FlashError::Full,
        Error::Corrupted { .. } => FlashError::Corrupted,
        Error::BufferTooSmall { .. } => FlashError::BufferTooSmall,
        _ => FlashError::Storage,
    }
}

pub struct Rp2040FlashStorage<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> Rp2040FlashStorage<'d> {
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }
}

impl<'d> FlashStorage for Rp2040FlashStorage<'d> {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        let mut data_buffer = [0u8; RECORD_BUFFER_SIZE];

        let data = map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            CONFIG_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
        )
        .await
        .map_err(map_error)?
        .ok_or(FlashError::NotFound)?;

        let len = data.len();
        let dest = buffer.get_mut(..len).ok_or(FlashError::BufferTooSmall)?;
        dest.copy_from_slice(data);
        Ok(len)
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        let mut data_buffer = [0u8; RECORD_BUFFER_SIZE];

        map::store_item(
            &mut self.flash,
            CONFIG_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
            &data,
        )
        .await
        .map_err(map_error)
    }
}
