//! GPIO channel wrappers
//!
//! Thin adapters from `embassy-rp` pins to the channel traits the core
//! is written against.

use choretracker_hal::{InputPin, Level, OutputPin};
use embassy_rp::gpio::{self, AnyPin, Input, Output, Pull};
use embassy_rp::Peri;

/// Button input line
pub struct RpInput {
    pin: Input<'static>,
}

impl RpInput {
    /// Configure `pin` as an input, with the internal pull-up if asked
    pub fn new(pin: Peri<'static, AnyPin>, pull_up: bool) -> Self {
        let pull = if pull_up { Pull::Up } else { Pull::None };
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// LED output line
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Configure `pin` as a push-pull output starting at `initial`
    pub fn new(pin: Peri<'static, AnyPin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, to_rp(initial)),
        }
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn level(&self) -> Level {
        Level::from(self.pin.is_set_high())
    }
}

fn to_rp(level: Level) -> gpio::Level {
    match level {
        Level::High => gpio::Level::High,
        Level::Low => gpio::Level::Low,
    }
}
