use crate::constants::BLUR_FALLOFF_SPAN_DEG;
use crate::tuning::Tuning;

/// Blur radius in px for a panel at `angle_deg` on the ring.
///
/// Panels inside the rear arc blur in proportion to how close they sit to
/// the 180° back pole; everything outside the arc stays sharp. The falloff
/// span is fixed so narrowing the arc trims the curve's tails rather than
/// steepening it.
pub fn blur_px(angle_deg: f32, tuning: &Tuning) -> f32 {
    let a = (angle_deg as f64).rem_euclid(360.0);
    if a <= tuning.blur_arc_start_deg || a >= tuning.blur_arc_end_deg {
        return 0.0;
    }
    let dist = (180.0 - a).abs();
    let px = (1.0 - dist / BLUR_FALLOFF_SPAN_DEG) * tuning.blur_max_px;
    px.max(0.0) as f32
}
