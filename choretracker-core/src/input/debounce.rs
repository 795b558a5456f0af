//! Time-window debouncing
//!
//! A raw level that differs from the stable level is committed only when
//! the previous commit is more than one window old. The first change is
//! accepted immediately.

/// Debounced state of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_ms: u64,
    stable: bool,
    last_raw: bool,
    last_change_ms: Option<u64>,
}

impl Debouncer {
    /// Create a debouncer that starts inactive
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            stable: false,
            last_raw: false,
            last_change_ms: None,
        }
    }

    /// Feed one raw sample
    ///
    /// Returns the new stable level when a change is committed. Bounce
    /// inside the window is dropped; a level that persists is committed
    /// on the first poll after the window has passed, exactly once.
    pub fn update(&mut self, raw: bool, now_ms: u64) -> Option<bool> {
        self.last_raw = raw;

        if raw == self.stable {
            return None;
        }

        let settled = match self.last_change_ms {
            None => true,
            Some(at) => now_ms.saturating_sub(at) > self.window_ms,
        };
        if !settled {
            return None;
        }

        self.stable = raw;
        self.last_change_ms = Some(now_ms);
        Some(raw)
    }

    /// Stable (debounced) level
    pub fn is_active(&self) -> bool {
        self.stable
    }

    /// Most recent raw sample
    pub fn last_raw(&self) -> bool {
        self.last_raw
    }

    /// When the stable level last changed
    pub fn last_change_ms(&self) -> Option<u64> {
        self.last_change_ms
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}
