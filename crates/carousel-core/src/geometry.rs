use crate::constants::{DRAG_DISTANCE_VIEWPORT_FACTOR, RADIUS_VIEWPORT_FACTOR};

/// Fold into `[0, 1)`.
pub fn wrap01(x: f64) -> f64 {
    x.rem_euclid(1.0)
}

/// Fold into `[0, 360)`.
pub fn wrap360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Resting angle of panel `index` when `count` panels share the ring.
pub fn panel_base_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (index as f64 * 360.0 / count as f64) as f32
}

/// Viewport-derived lengths, recomputed on every rebuild.
#[derive(Clone, Copy, Debug)]
pub struct Geometry {
    pub viewport_width: f64,
    /// Z-offset of each panel from the ring centre, px.
    pub radius: f64,
    /// Horizontal pointer travel for one full revolution, px.
    pub drag_distance: f64,
}

impl Geometry {
    pub fn from_viewport_width(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            radius: viewport_width * RADIUS_VIEWPORT_FACTOR,
            drag_distance: viewport_width * DRAG_DISTANCE_VIEWPORT_FACTOR,
        }
    }
}

/// Tracks the viewport width across resize events so a rebuild only fires
/// when the width actually changed (mobile browsers resize the height on
/// every address-bar show/hide).
#[derive(Clone, Copy, Debug)]
pub struct ResizeGate {
    last_width: f64,
}

impl ResizeGate {
    pub fn new(width: f64) -> Self {
        Self { last_width: width }
    }

    /// Record a settled resize. Returns true when the width changed and
    /// the carousel should rebuild.
    pub fn settle(&mut self, width: f64) -> bool {
        if (width - self.last_width).abs() < f64::EPSILON {
            return false;
        }
        self.last_width = width;
        true
    }
}
