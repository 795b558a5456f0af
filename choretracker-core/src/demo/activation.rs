//! Demo activation gesture
//!
//! Holding both row-selects for the activation time enters demo mode.
//! Releasing either one early cancels the hold.

use crate::config::DEMO_ACTIVATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivationState {
    Idle,
    Holding { since_ms: u64 },
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivationEvent {
    /// Both row-selects just went down
    Started,
    /// Hold continues, percent of the activation time elapsed
    Progress(u8),
    /// Released before the activation time
    Cancelled,
    /// Held long enough
    Activated,
}

/// Percent of `threshold_ms` covered by `elapsed_ms`, capped at 100
pub fn progress_percent(elapsed_ms: u64, threshold_ms: u64) -> u8 {
    if threshold_ms == 0 {
        return 100;
    }
    (elapsed_ms.saturating_mul(100) / threshold_ms).min(100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoActivation {
    state: ActivationState,
    threshold_ms: u64,
}

impl Default for DemoActivation {
    fn default() -> Self {
        Self::new(DEMO_ACTIVATION_MS)
    }
}

impl DemoActivation {
    pub const fn new(threshold_ms: u64) -> Self {
        Self {
            state: ActivationState::Idle,
            threshold_ms,
        }
    }

    /// Feed the combined row-select level for this poll
    pub fn update(&mut self, both_held: bool, now_ms: u64) -> Option<ActivationEvent> {
        use ActivationState::*;

        match (self.state, both_held) {
            (Idle, true) => {
                self.state = Holding { since_ms: now_ms };
                Some(ActivationEvent::Started)
            }
            (Holding { since_ms }, true) => {
                let elapsed = now_ms.saturating_sub(since_ms);
                if elapsed >= self.threshold_ms {
                    self.state = Active;
                    Some(ActivationEvent::Activated)
                } else {
                    Some(ActivationEvent::Progress(progress_percent(
                        elapsed,
                        self.threshold_ms,
                    )))
                }
            }
            (Holding { .. }, false) => {
                self.state = Idle;
                Some(ActivationEvent::Cancelled)
            }
            // Idle with nothing held, or already active
            _ => None,
        }
    }

    /// Leave the active state; false if demo was not active
    pub fn exit(&mut self) -> bool {
        if self.state == ActivationState::Active {
            self.state = ActivationState::Idle;
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, ActivationState::Holding { .. })
    }

    pub fn is_active(&self) -> bool {
        self.state == ActivationState::Active
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }
}
