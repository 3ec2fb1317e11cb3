use std::f64::consts::PI;

/// Easing curves used by the carousel timelines.
///
/// `Power1Out` is the default where no curve is called out; the rest are
/// named per call site (throw resume, entrance, tilt).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    ExpoInOut,
    SineInOut,
}

impl Ease {
    /// Map normalized time `t` in [0,1] to eased progress in [0,1].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::ExpoInOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2.0_f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}
