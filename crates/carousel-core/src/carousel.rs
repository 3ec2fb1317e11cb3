use crate::blur::blur_px;
use crate::constants::{BLUR_INTERVAL_SEC, ENTRANCE_SPINUP_SEC, RESTING_RATE};
use crate::drag::{DragController, DragPhase};
use crate::ease::Ease;
use crate::entrance::{action_for, EntranceTimeline, WrapPose};
use crate::geometry::Geometry;
use crate::nudge;
use crate::spin::SpinTimeline;
use crate::trigger::ScrollGate;
use crate::tuning::Tuning;
use crate::velocity::VelocityTracker;

/// Everything a build measures before the engine can exist.
#[derive(Clone, Copy, Debug)]
pub struct CarouselParams {
    pub panel_count: usize,
    pub content_count: usize,
    pub viewport_width: f64,
    /// Scroll gate band in document space, px.
    pub gate_start: f64,
    pub gate_end: f64,
    /// Seed for the content stagger order.
    pub seed: u64,
    pub tuning: Tuning,
}

/// The whole carousel engine: spin, drag, nudge, entrance, and gate under
/// one owner. Callers feed it input events and a per-frame `tick`, then
/// read angles, blur, pose, and alphas back out for the DOM.
///
/// Dropping the engine is the teardown: no timer or tween outlives it.
#[derive(Clone, Debug)]
pub struct Carousel {
    tuning: Tuning,
    geometry: Geometry,
    panel_count: usize,
    spin: SpinTimeline,
    drag: DragController,
    entrance: EntranceTimeline,
    gate: ScrollGate,
    scroll_tracker: VelocityTracker,
    wheel_tracker: VelocityTracker,
    wheel_accum: f64,
    blur_elapsed: f64,
}

impl Carousel {
    pub fn new(params: CarouselParams) -> Self {
        let geometry = Geometry::from_viewport_width(params.viewport_width);
        Self {
            tuning: params.tuning,
            geometry,
            panel_count: params.panel_count,
            spin: SpinTimeline::new(),
            drag: DragController::new(geometry.drag_distance),
            entrance: EntranceTimeline::new(
                params.content_count,
                params.tuning.entrance_burst,
                params.seed,
            ),
            gate: ScrollGate::new(params.gate_start, params.gate_end),
            scroll_tracker: VelocityTracker::new(),
            wheel_tracker: VelocityTracker::new(),
            wheel_accum: 0.0,
            // First frame paints blur right away.
            blur_elapsed: BLUR_INTERVAL_SEC,
        }
    }

    /// Advance every live timeline by `dt` wall seconds.
    pub fn tick(&mut self, dt: f64) {
        self.spin.advance(dt);
        self.drag.tick(dt, &mut self.spin, &self.tuning);
        if self.entrance.advance(dt) {
            log::debug!("[entrance] sequence complete, tilt engaged");
        }
        self.blur_elapsed += dt;
    }

    /// True at most once per blur interval; the caller repaints filters
    /// on the frames this fires.
    pub fn take_blur_pass(&mut self) -> bool {
        if self.blur_elapsed >= BLUR_INTERVAL_SEC {
            self.blur_elapsed = 0.0;
            return true;
        }
        false
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn progress(&self) -> f64 {
        self.spin.progress()
    }

    pub fn time_scale(&self) -> f64 {
        self.spin.time_scale()
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn panel_angle(&self, index: usize) -> f32 {
        self.spin.panel_angle(index, self.panel_count)
    }

    pub fn panel_blur_px(&self, index: usize) -> f32 {
        blur_px(self.panel_angle(index), &self.tuning)
    }

    pub fn wrap_pose(&self) -> WrapPose {
        self.entrance.wrap_pose()
    }

    pub fn content_alpha(&self, index: usize) -> f32 {
        self.entrance.content_alpha(index)
    }

    pub fn entrance_playing(&self) -> bool {
        self.entrance.playing()
    }

    pub fn pointer_press(&mut self, x: f64, now: f64) {
        self.drag.press(x, now, &mut self.spin);
    }

    pub fn pointer_move(&mut self, x: f64, now: f64) {
        self.drag.drag_to(x, now, &mut self.spin);
    }

    pub fn pointer_release(&mut self, x: f64, now: f64) {
        self.drag.release(x, now, &mut self.spin);
    }

    /// Scroll-velocity nudge. Ignored while a drag owns the spin rate.
    pub fn scroll_impulse(&mut self, velocity_y: f64) {
        if self.drag.is_active() {
            return;
        }
        nudge::apply_impulse(&mut self.spin, velocity_y);
    }

    /// Wheel deltas feed their own velocity estimate; trackpads fire these
    /// without moving the page.
    pub fn wheel(&mut self, delta_y: f64, now: f64) {
        self.wheel_accum += delta_y;
        self.wheel_tracker.update(self.wheel_accum, now);
        let velocity = self.wheel_tracker.velocity();
        if velocity != 0.0 {
            self.scroll_impulse(velocity);
        }
    }

    /// Scroll position update: nudges the spin and runs the entrance gate.
    /// Also called once at build time against the current position, which
    /// is what plays the entrance for a page loaded mid-document.
    pub fn scroll_to(&mut self, scroll_y: f64, now: f64) {
        self.scroll_tracker.update(scroll_y, now);
        let velocity = self.scroll_tracker.velocity();
        if velocity != 0.0 {
            self.scroll_impulse(velocity);
        }
        for event in self.gate.update(scroll_y) {
            if self.entrance.apply(action_for(event)) {
                log::debug!("[gate] {:?} starts entrance", event);
                self.spin.ease_time_scale(
                    self.entrance.burst(),
                    RESTING_RATE,
                    ENTRANCE_SPINUP_SEC,
                    Ease::ExpoInOut,
                );
            }
        }
    }
}
