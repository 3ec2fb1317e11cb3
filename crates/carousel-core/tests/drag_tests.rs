// Tests for the pointer-drag state machine: scrubbing, taps, throws, and
// the resume ramps that hand the spin back.

use carousel_core::constants::{RESTING_RATE, SPIN_PERIOD_SEC};
use carousel_core::drag::{DragController, DragPhase};
use carousel_core::geometry::Geometry;
use carousel_core::spin::SpinTimeline;
use carousel_core::tuning::Tuning;

fn make_drag() -> DragController {
    // 1200px viewport -> drag distance 3600px
    let geometry = Geometry::from_viewport_width(1200.0);
    DragController::new(geometry.drag_distance)
}

/// Run the glide to completion. Panics if it never settles.
fn settle_throw(drag: &mut DragController, spin: &mut SpinTimeline, tuning: &Tuning) {
    for _ in 0..100_000 {
        drag.tick(0.01, spin, tuning);
        if !drag.is_active() {
            return;
        }
    }
    panic!("glide never settled");
}

#[test]
fn press_freezes_the_spin() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();
    spin.advance(SPIN_PERIOD_SEC * 0.3);
    let before = spin.progress();

    drag.press(100.0, 0.0, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Pressed);
    assert!(drag.is_active());
    assert!((spin.time_scale() - 0.0).abs() < 1e-12);
    assert!((spin.progress() - before).abs() < 1e-12);
}

#[test]
fn drag_scrubs_progress_by_pointer_travel() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();

    drag.press(100.0, 0.0, &mut spin);
    drag.drag_to(50.0, 1.0, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Dragging);
    // 50px leftwards over a 3600px full turn
    assert!((spin.progress() - 50.0 / 3600.0).abs() < 1e-12);
    assert!((spin.time_scale() - 0.0).abs() < 1e-12);
}

#[test]
fn reverse_drag_wraps_progress_below_zero() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();

    drag.press(0.0, 0.0, &mut spin);
    drag.drag_to(300.0, 0.1, &mut spin);
    let expected = 1.0 - 300.0 / 3600.0;
    assert!((spin.progress() - expected).abs() < 1e-12);
    assert!(spin.progress() >= 0.0 && spin.progress() < 1.0);
}

#[test]
fn tap_resumes_without_scrubbing() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();
    spin.advance(SPIN_PERIOD_SEC * 0.3);
    let before = spin.progress();

    drag.press(100.0, 0.0, &mut spin);
    drag.release(100.0, 0.05, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Idle);
    assert!((spin.progress() - before).abs() < 1e-12);
    // Short ramp back to the resting rate
    spin.advance(0.1);
    assert!((spin.time_scale() - RESTING_RATE).abs() < 1e-12);
}

#[test]
fn slow_release_skips_the_throw() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();

    drag.press(0.0, 0.0, &mut spin);
    drag.drag_to(-100.0, 0.3, &mut spin);
    // Nearly still by release time
    drag.drag_to(-105.0, 1.0, &mut spin);
    drag.release(-105.0, 1.0, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Idle);
    spin.advance(0.1);
    assert!((spin.time_scale() - RESTING_RATE).abs() < 1e-12);
}

#[test]
fn fast_release_glides_then_bursts_forward() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();
    let tuning = Tuning::standard();

    drag.press(0.0, 0.0, &mut spin);
    // 1080px in half a second: well past the throw threshold
    drag.drag_to(-1080.0, 0.5, &mut spin);
    drag.release(-1080.0, 0.5, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Thrown);

    let before_glide = spin.progress();
    settle_throw(&mut drag, &mut spin, &tuning);
    // The coast kept scrubbing past the release point
    assert!(spin.progress() > before_glide);
    // Offset is far past 0.25, so the burst hits the 5x clamp
    assert!((spin.time_scale() - 5.0).abs() < 1e-9);
    spin.advance(1.2);
    assert!((spin.time_scale() - RESTING_RATE).abs() < 1e-9);
}

#[test]
fn weak_throw_bursts_at_the_floor() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();
    let tuning = Tuning::standard();

    drag.press(0.0, 0.0, &mut spin);
    // 20px/s: exactly at the throw threshold
    drag.drag_to(-10.0, 0.5, &mut spin);
    drag.release(-10.0, 0.5, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Thrown);

    settle_throw(&mut drag, &mut spin, &tuning);
    // Tiny offset, so the burst clamps up to the 1x floor
    assert!((spin.time_scale() - 1.0).abs() < 1e-9);
}

#[test]
fn throw_burst_scales_the_offset_recorded_during_the_drag() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();
    let tuning = Tuning::standard();

    drag.press(500.0, 0.0, &mut spin);
    // 288px over the 3600px drag distance: recorded offset exactly 0.08
    drag.drag_to(356.0, 1.0, &mut spin);
    drag.drag_to(212.0, 2.0, &mut spin);
    drag.release(212.0, 2.0, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Thrown);

    let release_progress = spin.progress();
    settle_throw(&mut drag, &mut spin, &tuning);
    // The coast scrubbed on past the release point, but the burst is the
    // dragged 0.08 * 20 = 1.6, not the larger glide-end offset
    assert!(spin.progress() > release_progress);
    assert!((spin.time_scale() - 1.6).abs() < 1e-9);
    spin.advance(1.2);
    assert!((spin.time_scale() - RESTING_RATE).abs() < 1e-9);
}

#[test]
fn reverse_throw_bursts_backwards_and_settles_backwards() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();
    let tuning = Tuning::standard();

    drag.press(0.0, 0.0, &mut spin);
    drag.drag_to(500.0, 0.5, &mut spin);
    drag.release(500.0, 0.5, &mut spin);

    settle_throw(&mut drag, &mut spin, &tuning);
    assert!(spin.time_scale() < 0.0);
    spin.advance(1.2);
    assert!((spin.time_scale() + RESTING_RATE).abs() < 1e-9);
}

#[test]
fn plain_resume_ramps_forward_regardless_of_direction() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();
    let tuning = Tuning::mellow();

    drag.press(0.0, 0.0, &mut spin);
    drag.drag_to(500.0, 0.5, &mut spin);
    drag.release(500.0, 0.5, &mut spin);

    settle_throw(&mut drag, &mut spin, &tuning);
    // No burst: the rate eases up from the frozen zero
    assert!((spin.time_scale() - 0.0).abs() < 1e-9);
    spin.advance(0.6);
    assert!(spin.time_scale() > 0.0);
    spin.advance(0.6);
    assert!((spin.time_scale() - RESTING_RATE).abs() < 1e-9);
}

#[test]
fn press_interrupts_a_glide() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();
    let tuning = Tuning::standard();

    drag.press(0.0, 0.0, &mut spin);
    drag.drag_to(-1080.0, 0.5, &mut spin);
    drag.release(-1080.0, 0.5, &mut spin);
    drag.tick(0.05, &mut spin, &tuning);
    let mid_glide = spin.progress();

    drag.press(-900.0, 0.6, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Pressed);
    assert!((spin.time_scale() - 0.0).abs() < 1e-12);
    // Further ticks no longer move anything
    drag.tick(0.5, &mut spin, &tuning);
    assert!((spin.progress() - mid_glide).abs() < 1e-12);
}

#[test]
fn moves_and_releases_while_idle_are_ignored() {
    let mut drag = make_drag();
    let mut spin = SpinTimeline::new();

    drag.drag_to(50.0, 0.0, &mut spin);
    drag.release(50.0, 0.1, &mut spin);
    assert_eq!(drag.phase(), DragPhase::Idle);
    assert!((spin.progress() - 0.0).abs() < 1e-12);
    assert!((spin.time_scale() - 1.0).abs() < 1e-12);
}
