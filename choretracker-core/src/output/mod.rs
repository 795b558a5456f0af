//! Task LED output
//!
//! LED logic is inverted with respect to task state: a lit LED means the
//! task is still to do. Power-on wiring pulls every LED on, so untouched
//! tasks read as incomplete without an initialization pulse.

use choretracker_hal::{Level, OutputPin};

use crate::config::TASK_LED_COUNT;

/// Output level for a task state
///
/// The single place the inversion lives.
pub fn output_level_for(task_complete: bool) -> Level {
    if task_complete {
        Level::Low
    } else {
        Level::High
    }
}

/// The eight task LEDs
pub struct TaskOutputs<O> {
    pins: [O; TASK_LED_COUNT],
}

impl<O: OutputPin> TaskOutputs<O> {
    /// Take the LED channels, driving every task incomplete
    pub fn new(pins: [O; TASK_LED_COUNT]) -> Self {
        let mut outputs = Self { pins };
        outputs.set_all_incomplete();
        outputs
    }

    /// Show `task_complete` on LED `index`
    ///
    /// Returns false (and does nothing) for an out-of-range index.
    pub fn set_task_output(&mut self, index: usize, task_complete: bool) -> bool {
        match self.pins.get_mut(index) {
            Some(pin) => {
                pin.set_level(output_level_for(task_complete));
                true
            }
            None => false,
        }
    }

    pub fn set_all_incomplete(&mut self) {
        for pin in &mut self.pins {
            pin.set_level(output_level_for(false));
        }
    }

    pub fn set_all_complete(&mut self) {
        for pin in &mut self.pins {
            pin.set_level(output_level_for(true));
        }
    }

    /// Task state currently shown on LED `index`; false when out of range
    pub fn is_complete(&self, index: usize) -> bool {
        self.pins
            .get(index)
            .is_some_and(|pin| pin.level() == output_level_for(true))
    }

    /// Task state shown on every LED, in channel order
    pub fn states(&self) -> [bool; TASK_LED_COUNT] {
        core::array::from_fn(|i| self.is_complete(i))
    }
}
