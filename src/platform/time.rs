//! Frame timing
//!
//! Turns the host's millisecond counter into per-frame deltas in seconds.
//! There is no fixed timestep: simulation speed follows the wall clock.

/// Millisecond clock -> frame delta
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first call returns 0, and a
    /// clock that steps backwards is treated as no time passing.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let delta_ms = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now_ms.max(self.last_ms.unwrap_or(0)));
        delta_ms as f32 / 1000.0
    }

    /// Forget the previous reading
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
