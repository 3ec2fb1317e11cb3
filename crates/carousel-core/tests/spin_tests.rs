// Tests for the looping spin timeline, the rate tween channel, and the
// easing curves they run on.

use carousel_core::constants::SPIN_PERIOD_SEC;
use carousel_core::ease::Ease;
use carousel_core::spin::SpinTimeline;
use carousel_core::tween::ScalarTween;

#[test]
fn ease_endpoints_are_exact() {
    for ease in [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::ExpoInOut,
        Ease::SineInOut,
    ] {
        assert!((ease.apply(0.0) - 0.0).abs() < 1e-12);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn ease_known_midpoints() {
    assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < 1e-12);
    assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-12);
    assert!((Ease::ExpoInOut.apply(0.5) - 0.5).abs() < 1e-12);
    assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-12);
    // Out curves start fast
    assert!(Ease::Power1Out.apply(0.25) > 0.25);
    assert!(Ease::Power2Out.apply(0.25) > Ease::Power1Out.apply(0.25));
    // InOut curves start slow
    assert!(Ease::ExpoInOut.apply(0.1) < 0.1);
    assert!(Ease::SineInOut.apply(0.1) < 0.1);
}

#[test]
fn ease_clamps_out_of_range_time() {
    assert!((Ease::Power2Out.apply(-0.5) - 0.0).abs() < 1e-12);
    assert!((Ease::Power2Out.apply(1.5) - 1.0).abs() < 1e-12);
}

#[test]
fn tween_interpolates_and_finishes() {
    let mut tween = ScalarTween::new(2.0, 10.0, 4.0, Ease::Linear);
    assert!((tween.value() - 2.0).abs() < 1e-12);
    assert!(!tween.done());
    let v = tween.step(1.0);
    assert!((v - 4.0).abs() < 1e-12);
    tween.step(3.0);
    assert!(tween.done());
    assert!((tween.value() - 10.0).abs() < 1e-12);
    // Stepping past the end holds the target
    tween.step(5.0);
    assert!((tween.value() - 10.0).abs() < 1e-12);
    assert!((tween.target() - 10.0).abs() < 1e-12);
}

#[test]
fn tween_survives_zero_duration() {
    let mut tween = ScalarTween::new(0.0, 1.0, 0.0, Ease::Linear);
    tween.step(0.001);
    assert!(tween.done());
    assert!((tween.value() - 1.0).abs() < 1e-12);
}

#[test]
fn spin_advances_one_loop_per_period() {
    let mut spin = SpinTimeline::new();
    assert!((spin.progress() - 0.0).abs() < 1e-12);
    assert!((spin.time_scale() - 1.0).abs() < 1e-12);

    spin.advance(SPIN_PERIOD_SEC / 4.0);
    assert!((spin.progress() - 0.25).abs() < 1e-12);

    // A full period wraps back to where it started
    spin.advance(SPIN_PERIOD_SEC);
    assert!((spin.progress() - 0.25).abs() < 1e-9);
}

#[test]
fn spin_runs_backwards_through_zero() {
    let mut spin = SpinTimeline::new();
    spin.set_time_scale(-1.0);
    spin.advance(SPIN_PERIOD_SEC / 8.0);
    // 0 - 1/8 wraps to 7/8; no start boundary to hit
    assert!((spin.progress() - 0.875).abs() < 1e-12);
    spin.advance(SPIN_PERIOD_SEC);
    assert!((spin.progress() - 0.875).abs() < 1e-9);
}

#[test]
fn set_progress_rewrites_fraction_only() {
    let mut spin = SpinTimeline::new();
    spin.advance(SPIN_PERIOD_SEC * 2.5);
    spin.set_progress(0.1);
    assert!((spin.progress() - 0.1).abs() < 1e-12);
    // Values outside [0,1) fold in
    spin.set_progress(1.75);
    assert!((spin.progress() - 0.75).abs() < 1e-12);
    spin.set_progress(-0.25);
    assert!((spin.progress() - 0.75).abs() < 1e-12);
}

#[test]
fn panel_angles_start_evenly_spaced() {
    let spin = SpinTimeline::new();
    let n = 8;
    for i in 0..n {
        let expected = i as f32 * 360.0 / n as f32;
        assert!((spin.panel_angle(i, n) - expected).abs() < 1e-4);
    }
    // Successive gaps are uniform and close the circle
    let mut total = 0.0f32;
    for i in 0..n {
        let a = spin.panel_angle(i, n);
        let b = spin.panel_angle((i + 1) % n, n);
        let gap = (b - a).rem_euclid(360.0);
        assert!((gap - 45.0).abs() < 1e-3);
        total += gap;
    }
    assert!((total - 360.0).abs() < 1e-2);
}

#[test]
fn panel_angles_track_progress_backwards() {
    let mut spin = SpinTimeline::new();
    spin.advance(SPIN_PERIOD_SEC / 4.0);
    // progress 0.25 pulls every panel back 90 degrees
    assert!((spin.panel_angle(0, 4) - 270.0).abs() < 1e-3);
    assert!((spin.panel_angle(1, 4) - 0.0).abs() < 1e-3);
    assert!((spin.panel_angle(2, 4) - 90.0).abs() < 1e-3);
}

#[test]
fn rate_tween_runs_in_wall_time_while_frozen() {
    let mut spin = SpinTimeline::new();
    spin.set_time_scale(0.0);
    spin.ease_time_scale(0.0, 1.0, 1.0, Ease::Linear);
    // Timeline is frozen but the ramp still advances
    spin.advance(0.5);
    assert!((spin.time_scale() - 0.5).abs() < 1e-12);
    assert!(spin.rate_tween_active());
    spin.advance(0.5);
    assert!((spin.time_scale() - 1.0).abs() < 1e-12);
    assert!(!spin.rate_tween_active());
}

#[test]
fn progress_integrates_a_ramping_rate() {
    let mut spin = SpinTimeline::new();
    spin.ease_time_scale(0.0, 1.0, 1.0, Ease::Linear);
    let dt = 1e-4;
    let mut elapsed = 0.0;
    while elapsed < 1.0 {
        spin.advance(dt);
        elapsed += dt;
    }
    // Linear ramp 0 to 1 over 1s integrates to ~0.5s of playhead
    let expected = 0.5 / SPIN_PERIOD_SEC;
    assert!((spin.progress() - expected).abs() < 1e-4);
}

#[test]
fn new_rate_tween_replaces_the_old_one() {
    let mut spin = SpinTimeline::new();
    spin.ease_time_scale(25.0, 1.0, 2.0, Ease::ExpoInOut);
    assert!((spin.time_scale() - 25.0).abs() < 1e-12);
    spin.ease_time_scale(-60.0, -1.0, 1.2, Ease::Power1Out);
    assert!((spin.time_scale() + 60.0).abs() < 1e-12);
    spin.advance(1.2);
    assert!((spin.time_scale() + 1.0).abs() < 1e-12);
}

#[test]
fn set_time_scale_kills_the_tween() {
    let mut spin = SpinTimeline::new();
    spin.ease_time_scale(5.0, 1.0, 1.2, Ease::Power2Out);
    spin.set_time_scale(0.0);
    assert!(!spin.rate_tween_active());
    spin.advance(2.0);
    assert!((spin.time_scale() - 0.0).abs() < 1e-12);
    assert!((spin.progress() - 0.0).abs() < 1e-12);
}
