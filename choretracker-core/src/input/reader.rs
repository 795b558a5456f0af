//! Channel readers
//!
//! Wraps each input line with its polarity and debouncer. The task reader
//! drives the paired LED inside the same commit, so button and LED never
//! disagree between polls.

use choretracker_hal::{InputPin, Level, OutputPin};
use heapless::Vec;

use super::debounce::Debouncer;
use crate::config::{
    PinConfig, ROW_SELECT_COUNT, ROW_SELECT_DEBOUNCE_MS, TASK_BUTTON_COUNT, TASK_DEBOUNCE_MS,
};
use crate::output::TaskOutputs;

/// One debounced input line
pub struct InputChannel<P> {
    pin: P,
    active_level: Level,
    debounce: Debouncer,
}

impl<P: InputPin> InputChannel<P> {
    pub fn new(pin: P, active_level: Level, window_ms: u64) -> Self {
        Self {
            pin,
            active_level,
            debounce: Debouncer::new(window_ms),
        }
    }

    /// Undebounced reading, polarity applied
    pub fn is_active_raw(&self) -> bool {
        self.pin.level() == self.active_level
    }

    /// Sample the line; returns the new stable state on a committed change
    pub fn poll(&mut self, now_ms: u64) -> Option<bool> {
        let raw = self.is_active_raw();
        self.debounce.update(raw, now_ms)
    }

    /// Debounced state
    pub fn is_active(&self) -> bool {
        self.debounce.is_active()
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debounce
    }
}

fn channels<P: InputPin, const N: usize>(
    pins: [P; N],
    config: &[PinConfig; N],
    window_ms: u64,
) -> [InputChannel<P>; N] {
    let mut index = 0;
    pins.map(|pin| {
        let channel = InputChannel::new(pin, config[index].active_level(), window_ms);
        index += 1;
        channel
    })
}

/// Accepted task-button change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskChange {
    pub channel: usize,
    /// Button latched (task done) or released (task to do)
    pub completed: bool,
}

/// The eight latching task buttons
pub struct TaskButtons<P> {
    channels: [InputChannel<P>; TASK_BUTTON_COUNT],
}

impl<P: InputPin> TaskButtons<P> {
    pub fn new(pins: [P; TASK_BUTTON_COUNT], config: &[PinConfig; TASK_BUTTON_COUNT]) -> Self {
        Self {
            channels: channels(pins, config, TASK_DEBOUNCE_MS),
        }
    }

    /// Poll every button
    ///
    /// Each accepted change sets the paired LED before it is reported.
    pub fn poll<O: OutputPin>(
        &mut self,
        now_ms: u64,
        outputs: &mut TaskOutputs<O>,
    ) -> Vec<TaskChange, TASK_BUTTON_COUNT> {
        let mut changes = Vec::new();
        for (channel, input) in self.channels.iter_mut().enumerate() {
            if let Some(completed) = input.poll(now_ms) {
                outputs.set_task_output(channel, completed);
                let _ = changes.push(TaskChange { channel, completed });
            }
        }
        changes
    }

    /// Debounced state of button `channel`; false when out of range
    pub fn is_active(&self, channel: usize) -> bool {
        self.channels.get(channel).is_some_and(InputChannel::is_active)
    }
}

/// The two momentary row-select buttons
pub struct RowSelects<P> {
    channels: [InputChannel<P>; ROW_SELECT_COUNT],
}

impl<P: InputPin> RowSelects<P> {
    pub fn new(pins: [P; ROW_SELECT_COUNT], config: &[PinConfig; ROW_SELECT_COUNT]) -> Self {
        Self {
            channels: channels(pins, config, ROW_SELECT_DEBOUNCE_MS),
        }
    }

    /// Poll both buttons
    ///
    /// Entry `row` is true only on the poll where that button's debounced
    /// state goes from released to pressed. Holding or releasing reports
    /// nothing.
    pub fn poll(&mut self, now_ms: u64) -> [bool; ROW_SELECT_COUNT] {
        let mut pressed = [false; ROW_SELECT_COUNT];
        for (row, input) in self.channels.iter_mut().enumerate() {
            pressed[row] = input.poll(now_ms) == Some(true);
        }
        pressed
    }

    /// Debounced held state of `row`; false when out of range
    pub fn is_held(&self, row: usize) -> bool {
        self.channels.get(row).is_some_and(InputChannel::is_active)
    }

    /// Both buttons held at once
    pub fn all_held(&self) -> bool {
        self.channels.iter().all(InputChannel::is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WIRING;
    use crate::testing::{MockInput, MockOutput};

    fn task_rig() -> (
        TaskButtons<MockInput>,
        TaskOutputs<MockOutput>,
        [MockInput; TASK_BUTTON_COUNT],
    ) {
        let pins: [MockInput; TASK_BUTTON_COUNT] = core::array::from_fn(|_| MockInput::active_low());
        let probes = pins.clone();
        let leds = core::array::from_fn(|_| MockOutput::new());
        (
            TaskButtons::new(pins, &WIRING.task_buttons),
            TaskOutputs::new(leds),
            probes,
        )
    }

    fn row_rig() -> (RowSelects<MockInput>, [MockInput; ROW_SELECT_COUNT]) {
        let pins: [MockInput; ROW_SELECT_COUNT] = core::array::from_fn(|_| MockInput::active_low());
        let probes = pins.clone();
        (RowSelects::new(pins, &WIRING.row_selects), probes)
    }

    #[test]
    fn test_polarity_applied() {
        let pin = MockInput::active_low();
        let channel = InputChannel::new(pin.clone(), Level::Low, 50);
        assert!(!channel.is_active_raw());
        pin.press();
        assert!(channel.is_active_raw());
    }

    #[test]
    fn test_task_change_sets_led() {
        let (mut buttons, mut leds, pins) = task_rig();

        pins[2].press();
        let changes = buttons.poll(0, &mut leds);
        assert_eq!(changes.as_slice(), &[TaskChange { channel: 2, completed: true }]);
        assert!(leds.is_complete(2));
        assert!(buttons.is_active(2));

        pins[2].release();
        assert!(buttons.poll(20, &mut leds).is_empty());
        assert!(leds.is_complete(2));

        let changes = buttons.poll(60, &mut leds);
        assert_eq!(changes.as_slice(), &[TaskChange { channel: 2, completed: false }]);
        assert!(!leds.is_complete(2));
    }

    #[test]
    fn test_task_change_reported_once() {
        let (mut buttons, mut leds, pins) = task_rig();
        pins[7].press();
        assert_eq!(buttons.poll(0, &mut leds).len(), 1);
        for t in 1..20 {
            assert!(buttons.poll(t * 10, &mut leds).is_empty());
        }
    }

    #[test]
    fn test_simultaneous_task_changes() {
        let (mut buttons, mut leds, pins) = task_rig();
        pins[0].press();
        pins[5].press();
        let changes = buttons.poll(0, &mut leds);
        assert_eq!(changes.len(), 2);
        assert_eq!(leds.states(), [true, false, false, false, false, true, false, false]);
    }

    #[test]
    fn test_task_out_of_range_query() {
        let (buttons, _, _) = task_rig();
        assert!(!buttons.is_active(8));
    }

    #[test]
    fn test_row_select_edge_only() {
        let (mut rows, pins) = row_rig();

        pins[1].press();
        assert_eq!(rows.poll(0), [false, true]);
        // Held: no repeat
        assert_eq!(rows.poll(10), [false, false]);
        assert_eq!(rows.poll(500), [false, false]);
        assert!(rows.is_held(1));

        // Release is not a press
        pins[1].release();
        assert_eq!(rows.poll(510), [false, false]);
        assert!(!rows.is_held(1));

        // Re-press after the window
        pins[1].press();
        assert_eq!(rows.poll(520), [false, false]);
        assert_eq!(rows.poll(700), [false, false]);
        assert_eq!(rows.poll(711), [false, true]);
    }

    #[test]
    fn test_row_select_bounce_is_one_press() {
        let (mut rows, pins) = row_rig();
        let mut presses = 0;
        for t in 0..15u64 {
            if t % 2 == 0 {
                pins[0].press();
            } else {
                pins[0].release();
            }
            if rows.poll(t * 10)[0] {
                presses += 1;
            }
        }
        assert_eq!(presses, 1);
    }

    #[test]
    fn test_all_held() {
        let (mut rows, pins) = row_rig();
        pins[0].press();
        rows.poll(0);
        assert!(!rows.all_held());
        pins[1].press();
        rows.poll(10);
        assert!(rows.all_held());
        assert!(!rows.is_held(2));
    }
}
