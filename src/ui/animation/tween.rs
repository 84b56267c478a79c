//! Time-based tweens driven by explicit instants
//!
//! Unlike `iced_anim` transitions these take the current `Instant` as an
//! argument, so a caller can ask "where is this value at time t" and
//! "has it finished at time t" without owning a clock. Song card shifts
//! and menu geometry use them because both need exact completion detection.

use std::time::{Duration, Instant};

/// Quadratic ease-out of linear progress in [0, 1]: `1 - (1 - t)^2`
pub fn out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A single value eased (out-quad) from `from` to `to` over `duration`
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    started: Option<Instant>,
}

impl Tween {
    pub fn new(duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            duration,
            started: None,
        }
    }

    /// Start interpolating from `from` to `to` at `now`
    pub fn start(&mut self, from: f32, to: f32, now: Instant) {
        self.from = from;
        self.to = to;
        self.started = Some(now);
    }

    /// Abort without reaching the end value
    pub fn stop(&mut self) {
        self.started = None;
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Normalized linear progress at `now` (1.0 when not started)
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started {
            Some(start) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }

    /// Interpolated value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = out_quad(self.progress(now));
        if eased >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * eased
    }

    /// Started and not yet past its end
    pub fn is_running(&self, now: Instant) -> bool {
        self.started.is_some() && self.progress(now) < 1.0
    }

    /// Whether the tween has been started and not yet stopped
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_quad_endpoints() {
        assert_eq!(out_quad(0.0), 0.0);
        assert_eq!(out_quad(1.0), 1.0);
        assert!((out_quad(0.5) - 0.75).abs() < 1e-6);
        // Clamped outside the unit range
        assert_eq!(out_quad(2.0), 1.0);
    }

    #[test]
    fn tween_eases_to_target() {
        let t0 = Instant::now();
        let mut tween = Tween::new(Duration::from_millis(400));
        assert!(!tween.is_started());

        tween.start(10.0, 0.0, t0);
        assert_eq!(tween.value_at(t0), 10.0);
        assert!(tween.is_running(t0));

        // Ease-out has covered three quarters of the way at half time
        let mid = t0 + Duration::from_millis(200);
        assert!((tween.value_at(mid) - 2.5).abs() < 1e-4);

        let end = t0 + Duration::from_millis(400);
        assert!(!tween.is_running(end));
        assert!(tween.is_started());
        assert_eq!(tween.value_at(end), 0.0);
    }

    #[test]
    fn stopped_tween_is_not_running() {
        let t0 = Instant::now();
        let mut tween = Tween::new(Duration::from_millis(300));
        tween.start(1.0, 100.0, t0);
        tween.stop();
        assert!(!tween.is_started());
        assert!(!tween.is_running(t0 + Duration::from_secs(1)));
    }
}
