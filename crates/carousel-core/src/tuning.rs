use crate::constants::{BLUR_ARC_END_DEG, BLUR_MAX_PX};

/// How the spin resumes after a thrown drag settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrowResume {
    /// Ramp straight back to the resting rate.
    Plain,
    /// Burst in the throw direction at a speed scaled from the throw,
    /// then decay to the resting rate.
    VelocityScaled,
}

/// Per-instance feel parameters. Everything not worth varying lives in
/// [`crate::constants`] instead.
#[derive(Clone, Copy, Debug)]
pub struct Tuning {
    /// Rear blur arc, degrees. Panels with angle in
    /// `(blur_arc_start_deg, blur_arc_end_deg)` get blurred.
    pub blur_arc_start_deg: f64,
    pub blur_arc_end_deg: f64,
    pub blur_max_px: f64,
    /// Rate multiplier at the start of the entrance spin-up.
    pub entrance_burst: f64,
    pub throw_resume: ThrowResume,
}

impl Tuning {
    /// The variant shipped on the live page.
    pub fn standard() -> Self {
        Self {
            blur_arc_start_deg: 80.0,
            blur_arc_end_deg: BLUR_ARC_END_DEG,
            blur_max_px: BLUR_MAX_PX,
            entrance_burst: 25.0,
            throw_resume: ThrowResume::VelocityScaled,
        }
    }

    /// Narrower blur arc, gentler entrance, no throw burst.
    pub fn mellow() -> Self {
        Self {
            blur_arc_start_deg: 45.0,
            entrance_burst: 18.0,
            throw_resume: ThrowResume::Plain,
            ..Self::standard()
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}
