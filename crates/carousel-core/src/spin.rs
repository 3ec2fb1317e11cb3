use crate::constants::SPIN_PERIOD_SEC;
use crate::ease::Ease;
use crate::geometry::{panel_base_angle, wrap01};
use crate::tween::ScalarTween;

/// The looping rotation timeline.
///
/// The playhead is a plain signed accumulator in seconds; it never wraps,
/// so the spin has no start boundary and can scrub backwards through as
/// many loops as a drag cares to. [`progress`](Self::progress) folds it
/// into `[0, 1)` per loop, and [`set_progress`](Self::set_progress)
/// rewrites the fractional part while keeping the loop count.
///
/// At most one rate tween is live at a time; installing a new one (or
/// setting the scale directly) replaces it.
#[derive(Clone, Debug)]
pub struct SpinTimeline {
    period: f64,
    playhead: f64,
    time_scale: f64,
    rate_tween: Option<ScalarTween>,
}

impl SpinTimeline {
    pub fn new() -> Self {
        Self {
            period: SPIN_PERIOD_SEC,
            playhead: 0.0,
            time_scale: 1.0,
            rate_tween: None,
        }
    }

    /// Advance by `dt` wall seconds. The rate tween (if any) runs in wall
    /// time, so a frozen timeline still finishes its ramp.
    pub fn advance(&mut self, dt: f64) {
        if let Some(tween) = self.rate_tween.as_mut() {
            self.time_scale = tween.step(dt);
            if tween.done() {
                self.rate_tween = None;
            }
        }
        self.playhead += dt * self.time_scale;
    }

    /// Loop-local progress in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        wrap01(self.playhead / self.period)
    }

    /// Overwrite the fractional progress of the current loop.
    pub fn set_progress(&mut self, progress: f64) {
        let base = (self.playhead / self.period).floor();
        self.playhead = (base + wrap01(progress)) * self.period;
    }

    /// Screen angle of panel `index` out of `count`, degrees in `[0, 360)`.
    /// Panels march clockwise as progress grows.
    pub fn panel_angle(&self, index: usize, count: usize) -> f32 {
        let base = panel_base_angle(index, count) as f64;
        (base - 360.0 * self.progress()).rem_euclid(360.0) as f32
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the rate immediately, killing any rate tween in flight.
    pub fn set_time_scale(&mut self, value: f64) {
        self.rate_tween = None;
        self.time_scale = value;
    }

    /// Snap the rate to `from` and ramp it to `to` over `duration` seconds.
    pub fn ease_time_scale(&mut self, from: f64, to: f64, duration: f64, ease: Ease) {
        self.time_scale = from;
        self.rate_tween = Some(ScalarTween::new(from, to, duration, ease));
    }

    /// Ramp the rate from its current value to `to`.
    pub fn ease_time_scale_to(&mut self, to: f64, duration: f64, ease: Ease) {
        let from = self.time_scale;
        self.ease_time_scale(from, to, duration, ease);
    }

    pub fn rate_tween_active(&self) -> bool {
        self.rate_tween.is_some()
    }
}

impl Default for SpinTimeline {
    fn default() -> Self {
        Self::new()
    }
}
