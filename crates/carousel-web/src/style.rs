//! Inline-style strings written into the DOM. Pure formatting, no web-sys.

use carousel_core::WrapPose;

/// Panel rotation. The transform origin is pushed back by the ring radius,
/// so rotating about Y is all it takes to place a panel on the cylinder.
#[inline]
pub fn panel_transform(angle_deg: f32) -> String {
    format!("rotateY({:.4}deg)", angle_deg)
}

/// Transform origin shared by every panel: centred, radius px behind.
#[inline]
pub fn panel_origin(radius: f64) -> String {
    format!("50% 50% {:.2}px", -radius)
}

#[inline]
pub fn blur_filter(px: f32) -> String {
    format!("blur({:.2}px)", px)
}

/// Entrance/tilt pose of the wrap element.
#[inline]
pub fn wrap_transform(pose: WrapPose) -> String {
    format!("scale({:.4}) rotate({:.4}deg)", pose.scale, pose.rotation_deg)
}

#[inline]
pub fn content_opacity(alpha: f32) -> String {
    format!("{:.4}", alpha)
}

/// Fade-ins also toggle visibility so hidden content stays out of the
/// accessibility tree and hit testing.
#[inline]
pub fn content_visibility(alpha: f32) -> &'static str {
    if alpha <= 0.0 {
        "hidden"
    } else {
        "visible"
    }
}
