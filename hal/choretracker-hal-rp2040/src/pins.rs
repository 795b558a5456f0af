//! Pin assignment by GPIO number
//!
//! The wiring table names pins by number; the bank hands out the matching
//! `embassy-rp` pin once and refuses a second claim.

use choretracker_hal::Level;
use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{DMA_CH0, FLASH};
use embassy_rp::{Peri, Peripherals};

use crate::gpio::{RpInput, RpOutput};

/// GPIO pins on the RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
}

/// Non-GPIO peripherals left over after building the bank
pub struct RemainingPeripherals {
    pub flash: Peri<'static, FLASH>,
    pub dma_ch0: Peri<'static, DMA_CH0>,
}

macro_rules! bank {
    ($p:ident: $($pin:ident),* $(,)?) => {
        [$(Some(Peri::<'static, AnyPin>::from($p.$pin))),*]
    };
}

/// Every GPIO, each available to be taken once
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Move every GPIO out of `p` into a bank
    pub fn split(p: Peripherals) -> (Self, RemainingPeripherals) {
        let pins = bank!(p:
            PIN_0, PIN_1, PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PIN_9,
            PIN_10, PIN_11, PIN_12, PIN_13, PIN_14, PIN_15, PIN_16, PIN_17, PIN_18, PIN_19,
            PIN_20, PIN_21, PIN_22, PIN_23, PIN_24, PIN_25, PIN_26, PIN_27, PIN_28, PIN_29,
        );
        let remaining = RemainingPeripherals {
            flash: p.FLASH,
            dma_ch0: p.DMA_CH0,
        };
        (Self { pins }, remaining)
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin)?
            .take()
            .ok_or(PinError::AlreadyTaken)
    }

    /// Take a pin as a button input
    pub fn take_input(&mut self, pin_num: u8, pull_up: bool) -> Result<RpInput, PinError> {
        Ok(RpInput::new(self.take(pin_num)?, pull_up))
    }

    /// Take a pin as an output starting at `initial`
    pub fn take_output(&mut self, pin_num: u8, initial: Level) -> Result<RpOutput, PinError> {
        Ok(RpOutput::new(self.take(pin_num)?, initial))
    }
}
