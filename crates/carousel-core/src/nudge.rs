use crate::constants::{NUDGE_DECAY_SEC, RESTING_RATE, SCROLL_RATE_CLAMP, SCROLL_VELOCITY_SCALE};
use crate::ease::Ease;
use crate::spin::SpinTimeline;

/// Spin rate a scroll velocity (px/s, positive = down) maps to.
pub fn scroll_rate(velocity_y: f64) -> f64 {
    (velocity_y * SCROLL_VELOCITY_SCALE).clamp(-SCROLL_RATE_CLAMP, SCROLL_RATE_CLAMP)
}

/// Resting rate the nudge decays to: spin keeps turning in the scroll's
/// direction rather than snapping back to forward.
pub fn resting_rate_for(rate: f64) -> f64 {
    if rate < 0.0 {
        -RESTING_RATE
    } else {
        RESTING_RATE
    }
}

/// Kick the spin to the scroll-derived rate and let it decay back to
/// resting speed. A fresh impulse replaces a decaying one wholesale.
/// Callers are expected to skip this while a drag owns the spin.
pub fn apply_impulse(spin: &mut SpinTimeline, velocity_y: f64) {
    let rate = scroll_rate(velocity_y);
    spin.ease_time_scale(rate, resting_rate_for(rate), NUDGE_DECAY_SEC, Ease::Power1Out);
}
