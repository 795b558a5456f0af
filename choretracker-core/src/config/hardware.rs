//! Hardware wiring and timing tables
//!
//! Logical channel index to GPIO number, input polarity, and the timing
//! constants the poll loop is built around. Count mismatches and bad pin
//! numbers fail the build rather than misbehave at runtime.

use choretracker_hal::Level;

/// GPIO lines available on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Task buttons, one per display
pub const TASK_BUTTON_COUNT: usize = 8;

/// Task status LEDs, paired 1:1 with task buttons
pub const TASK_LED_COUNT: usize = 8;

/// Displays, two rows of four
pub const DISPLAY_COUNT: usize = 8;

/// Display rows
pub const ROW_COUNT: usize = 2;

/// Displays in each row
pub const DISPLAYS_PER_ROW: usize = 4;

/// Columns (content categories) a row cycles through
pub const COLUMN_COUNT: usize = 4;

/// Row-select buttons, one per row
pub const ROW_SELECT_COUNT: usize = 2;

/// Task-button debounce window
pub const TASK_DEBOUNCE_MS: u64 = 50;

/// Row-select debounce window
///
/// Longer than the task window: a double advance is more disruptive
/// than a missed press.
pub const ROW_SELECT_DEBOUNCE_MS: u64 = 200;

/// Delay between poll iterations
pub const POLL_INTERVAL_MS: u64 = 10;

/// Default time a column title stays up after a row-select press
pub const TITLE_DISPLAY_MS: u64 = 2000;

/// Dual hold needed to enter demo mode
pub const DEMO_ACTIVATION_MS: u64 = 5000;

/// Demo animation tick
pub const DEMO_ANIMATION_INTERVAL_MS: u64 = 100;

/// Demo statistics report period
pub const DEMO_STATS_INTERVAL_MS: u64 = 10_000;

const _: () = assert!(TASK_BUTTON_COUNT == TASK_LED_COUNT, "every task button needs an LED");
const _: () = assert!(TASK_BUTTON_COUNT == DISPLAY_COUNT, "every task button needs a display");
const _: () = assert!(ROW_COUNT * DISPLAYS_PER_ROW == DISPLAY_COUNT);
const _: () = assert!(ROW_SELECT_COUNT == ROW_COUNT, "one row-select per row");
const _: () = assert!(COLUMN_COUNT == DISPLAYS_PER_ROW);
const _: () = assert!(POLL_INTERVAL_MS < TASK_DEBOUNCE_MS);

/// Pin configuration with polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO number (0-29 for RP2040)
    pub pin: u8,
    /// Line is active-low
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Active-high output or input without pull
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Active-low input with pull-up (switch to ground)
    pub const fn active_low_pull_up(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }

    /// Level that means "active" on this line
    pub const fn active_level(&self) -> Level {
        if self.inverted {
            Level::Low
        } else {
            Level::High
        }
    }
}

/// Board wiring table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wiring {
    pub task_buttons: [PinConfig; TASK_BUTTON_COUNT],
    pub task_leds: [PinConfig; TASK_LED_COUNT],
    pub row_selects: [PinConfig; ROW_SELECT_COUNT],
}

impl Wiring {
    /// Every pin exists and none is used twice
    pub const fn is_valid(&self) -> bool {
        let mut used: u32 = 0;
        let groups: [&[PinConfig]; 3] = [&self.task_buttons, &self.task_leds, &self.row_selects];

        let mut g = 0;
        while g < groups.len() {
            let pins = groups[g];
            let mut i = 0;
            while i < pins.len() {
                let pin = pins[i].pin;
                if pin >= GPIO_COUNT {
                    return false;
                }
                let bit = 1u32 << pin;
                if used & bit != 0 {
                    return false;
                }
                used |= bit;
                i += 1;
            }
            g += 1;
        }
        true
    }
}

/// Pico wiring
///
/// Buttons switch to ground against the internal pull-up; LEDs are
/// driven high to light. GPIO 0/1 stay free for the debug UART.
pub const WIRING: Wiring = Wiring {
    task_buttons: [
        PinConfig::active_low_pull_up(2),
        PinConfig::active_low_pull_up(3),
        PinConfig::active_low_pull_up(4),
        PinConfig::active_low_pull_up(5),
        PinConfig::active_low_pull_up(6),
        PinConfig::active_low_pull_up(7),
        PinConfig::active_low_pull_up(8),
        PinConfig::active_low_pull_up(9),
    ],
    task_leds: [
        PinConfig::new(10),
        PinConfig::new(11),
        PinConfig::new(12),
        PinConfig::new(13),
        PinConfig::new(14),
        PinConfig::new(15),
        PinConfig::new(18),
        PinConfig::new(19),
    ],
    row_selects: [
        PinConfig::active_low_pull_up(20),
        PinConfig::active_low_pull_up(21),
    ],
};

const _: () = assert!(WIRING.is_valid(), "wiring table has an invalid or duplicate GPIO");
