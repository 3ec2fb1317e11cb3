use crate::constants::{VELOCITY_RESET_GAP_SEC, VELOCITY_SMOOTHING};

/// Estimates the instantaneous velocity of a sampled scalar (pointer x,
/// scroll y, wheel accumulator) in units per second.
///
/// Samples separated by more than [`VELOCITY_RESET_GAP_SEC`] restart the
/// estimate instead of smoothing into the stale one.
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityTracker {
    last: Option<(f64, f64)>,
    velocity: f64,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget history and start a fresh estimate anchored at `value`.
    pub fn reset(&mut self, value: f64, now: f64) {
        self.last = Some((value, now));
        self.velocity = 0.0;
    }

    pub fn update(&mut self, value: f64, now: f64) {
        let Some((prev_value, prev_time)) = self.last else {
            self.last = Some((value, now));
            return;
        };
        let dt = now - prev_time;
        if dt <= 1e-9 {
            // Same-instant sample; keep the previous anchor so the next
            // update still measures the full span.
            return;
        }
        let instantaneous = (value - prev_value) / dt;
        self.velocity = if dt > VELOCITY_RESET_GAP_SEC {
            instantaneous
        } else {
            self.velocity * VELOCITY_SMOOTHING + instantaneous * (1.0 - VELOCITY_SMOOTHING)
        };
        self.last = Some((value, now));
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}
