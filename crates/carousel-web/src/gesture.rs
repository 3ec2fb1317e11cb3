//! Pointer-acceptance rules for the drag wiring. Pure logic, no web-sys.

/// Only the primary button starts a drag. A secondary-button press never
/// sees its matching release once the context menu opens, which would
/// leave the spin frozen mid-press.
#[inline]
pub fn starts_drag(button: i16) -> bool {
    button == 0
}

/// Mouse and pen presses are captured for the drag; touch keeps its
/// default behavior so native scrolling still works.
#[inline]
pub fn captures_pointer(pointer_type: &str) -> bool {
    pointer_type != "touch"
}
