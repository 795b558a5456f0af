//! Digital channel abstractions
//!
//! A channel is one physical line: a button input or an LED output.
//! The core never touches registers, it only reads and writes levels
//! through these traits.

/// Electrical level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// The opposite level
    pub fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Digital output channel
pub trait OutputPin {
    /// Drive the line high
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);

    /// Drive the line to `level`
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Level the line is currently driven to
    fn level(&self) -> Level;
}

/// Digital input channel
pub trait InputPin {
    /// Check if the line reads high
    fn is_high(&self) -> bool;

    /// Check if the line reads low
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Current level of the line
    fn level(&self) -> Level {
        Level::from(self.is_high())
    }
}
