//! Demo mode
//!
//! Entered by holding both row-selects, left by any task change. While
//! active the content engine animates on a fixed interval and a stats
//! line is due every few seconds.

pub mod activation;
pub mod content;
pub mod palette;

pub use activation::{progress_percent, ActivationEvent, ActivationState, DemoActivation};
pub use content::{
    DemoContent, DemoPerson, DemoTask, DemoWeather, FamilyEvent, Priority, TaskSummary,
    DEMO_PERSON_COUNT, MAX_FAMILY_EVENTS, MAX_TASKS_PER_PERSON,
};
pub use palette::{Pattern, Rgb565, PALETTE};

use rand_core::RngCore;

use crate::config::{DEMO_ANIMATION_INTERVAL_MS, DEMO_STATS_INTERVAL_MS};

/// What a demo update did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoUpdate {
    /// Animation advanced; displays need repainting
    pub animated: bool,
    /// Time to log a stats line
    pub stats_due: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoMode {
    active: bool,
    started_ms: u64,
    last_animation_ms: u64,
    last_stats_ms: u64,
    content: DemoContent,
}

impl Default for DemoMode {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoMode {
    pub fn new() -> Self {
        Self {
            active: false,
            started_ms: 0,
            last_animation_ms: 0,
            last_stats_ms: 0,
            content: DemoContent::new(),
        }
    }

    /// Enter demo mode with freshly seeded content
    pub fn start(&mut self, now_ms: u64) {
        self.active = true;
        self.started_ms = now_ms;
        self.last_animation_ms = now_ms;
        self.last_stats_ms = now_ms;
        self.content.seed(now_ms);
    }

    /// Leave demo mode; content is kept until the next start
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Advance timers; no-op while inactive
    pub fn update<R: RngCore>(&mut self, now_ms: u64, rng: &mut R) -> DemoUpdate {
        let mut update = DemoUpdate::default();
        if !self.active {
            return update;
        }

        if now_ms.saturating_sub(self.last_animation_ms) >= DEMO_ANIMATION_INTERVAL_MS {
            self.content.animate(rng);
            self.last_animation_ms = now_ms;
            update.animated = true;
        }

        if now_ms.saturating_sub(self.last_stats_ms) >= DEMO_STATS_INTERVAL_MS {
            self.last_stats_ms = now_ms;
            update.stats_due = true;
        }

        update
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Time since entry; 0 while inactive
    pub fn runtime_ms(&self, now_ms: u64) -> u64 {
        if self.active {
            now_ms.saturating_sub(self.started_ms)
        } else {
            0
        }
    }

    pub fn content(&self) -> &DemoContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut DemoContent {
        &mut self.content
    }
}
