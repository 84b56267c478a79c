//! Press/release shift of the three card columns
//!
//! Press moves the name card, artist label and duration label by fixed
//! deltas at once. Release eases them back to rest as one parallel group.

use std::time::{Duration, Instant};

use crate::ui::animation::Tween;

/// Horizontal press offsets for name card, artist label, duration label
pub const SHIFT_DELTAS: [f32; 3] = [13.0, -3.0, -13.0];

/// Length of the release animation
pub const RELEASE_DURATION: Duration = Duration::from_millis(400);

/// Parallel animation group over the three column offsets
#[derive(Debug, Clone)]
pub struct ShiftGroup {
    offsets: [f32; 3],
    tweens: [Tween; 3],
}

impl Default for ShiftGroup {
    fn default() -> Self {
        let tween = Tween::new(RELEASE_DURATION);
        Self {
            offsets: [0.0; 3],
            tweens: [tween.clone(), tween.clone(), tween],
        }
    }
}

impl ShiftGroup {
    /// Group is started and has not reached its end at `now`
    pub fn is_running(&self, now: Instant) -> bool {
        self.tweens.iter().any(|t| t.is_running(now))
    }

    /// Group was started and has not been settled by [`ShiftGroup::settle`]
    pub fn is_active(&self) -> bool {
        self.tweens.iter().any(Tween::is_started)
    }

    /// Current offsets, interpolated while the group runs
    pub fn offsets(&self, now: Instant) -> [f32; 3] {
        if self.is_active() {
            std::array::from_fn(|i| self.tweens[i].value_at(now))
        } else {
            self.offsets
        }
    }

    /// Shift immediately; a running group is stopped and snapped to the press targets
    pub fn press(&mut self, now: Instant) {
        if self.is_running(now) {
            for tween in &mut self.tweens {
                tween.stop();
            }
            self.offsets = SHIFT_DELTAS;
        } else {
            // Finished but not yet settled: take its end values first
            self.settle(now);
            for (offset, delta) in self.offsets.iter_mut().zip(SHIFT_DELTAS) {
                *offset += delta;
            }
        }
    }

    /// Start easing every column from where it is back to rest
    pub fn release(&mut self, now: Instant) {
        let from = self.offsets(now);
        for (tween, start) in self.tweens.iter_mut().zip(from) {
            tween.start(start, 0.0, now);
        }
    }

    /// Finalize a group that reached its end; returns `true` once per completion
    pub fn settle(&mut self, now: Instant) -> bool {
        if !self.is_active() || self.is_running(now) {
            return false;
        }
        for (offset, tween) in self.offsets.iter_mut().zip(self.tweens.iter_mut()) {
            *offset = tween.target();
            tween.stop();
        }
        true
    }
}
