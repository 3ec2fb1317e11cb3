use crate::constants::{
    GLIDE_FRICTION_TAU_SEC, GLIDE_STOP_SPEED_PX, RELEASE_RESUME_SEC, RESTING_RATE,
    THROW_MIN_VELOCITY_PX, THROW_RATE_MAX, THROW_RATE_MIN, THROW_RESUME_SEC, THROW_SPEED_SCALE,
};
use crate::ease::Ease;
use crate::geometry::wrap01;
use crate::spin::SpinTimeline;
use crate::tuning::{ThrowResume, Tuning};
use crate::velocity::VelocityTracker;

/// Where the pointer interaction currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer down, no movement yet. A press-release without movement is
    /// a tap and resumes the spin immediately.
    Pressed,
    Dragging,
    /// Released with speed; the virtual pointer is coasting.
    Thrown,
}

/// Exponential-friction coast after a throw. Velocity decays with time
/// constant [`GLIDE_FRICTION_TAU_SEC`], giving the position a closed form.
#[derive(Clone, Copy, Debug)]
struct Glide {
    start_x: f64,
    v0: f64,
    elapsed: f64,
}

impl Glide {
    fn new(start_x: f64, v0: f64) -> Self {
        Self {
            start_x,
            v0,
            elapsed: 0.0,
        }
    }

    fn step(&mut self, dt: f64) {
        self.elapsed += dt.max(0.0);
    }

    fn x(&self) -> f64 {
        let tau = GLIDE_FRICTION_TAU_SEC;
        self.start_x + self.v0 * tau * (1.0 - (-self.elapsed / tau).exp())
    }

    fn speed(&self) -> f64 {
        (self.v0 * (-self.elapsed / GLIDE_FRICTION_TAU_SEC).exp()).abs()
    }

    fn done(&self) -> bool {
        self.speed() < GLIDE_STOP_SPEED_PX
    }
}

/// Pointer-drag state machine. Maps horizontal pointer travel onto the
/// spin's progress and hands the spin back with the right resume ramp when
/// the interaction ends.
#[derive(Clone, Debug)]
pub struct DragController {
    phase: DragPhase,
    drag_distance: f64,
    start_x: f64,
    start_progress: f64,
    /// Latest offset recorded while the pointer was down. The throw burst
    /// reads this, not anything the coast adds afterwards.
    drag_offset: f64,
    tracker: VelocityTracker,
    glide: Option<Glide>,
}

impl DragController {
    pub fn new(drag_distance: f64) -> Self {
        Self {
            phase: DragPhase::Idle,
            drag_distance: drag_distance.max(1.0),
            start_x: 0.0,
            start_progress: 0.0,
            drag_offset: 0.0,
            tracker: VelocityTracker::new(),
            glide: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// True while a press, drag, or throw owns the spin rate.
    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// Pointer down. Freezes the spin and anchors the drag, interrupting
    /// any throw still coasting.
    pub fn press(&mut self, x: f64, now: f64, spin: &mut SpinTimeline) {
        spin.set_time_scale(0.0);
        self.phase = DragPhase::Pressed;
        self.start_x = x;
        self.start_progress = spin.progress();
        self.drag_offset = 0.0;
        self.glide = None;
        self.tracker.reset(x, now);
        log::debug!("[drag] press at x={:.1}", x);
    }

    /// Pointer move while pressed. Scrubs the spin's progress.
    pub fn drag_to(&mut self, x: f64, now: f64, spin: &mut SpinTimeline) {
        if !matches!(self.phase, DragPhase::Pressed | DragPhase::Dragging) {
            return;
        }
        self.phase = DragPhase::Dragging;
        let offset = (self.start_x - x) / self.drag_distance;
        spin.set_progress(wrap01(self.start_progress + offset));
        self.drag_offset = offset;
        self.tracker.update(x, now);
    }

    /// Pointer up. Either starts the coast or resumes the spin right away.
    pub fn release(&mut self, x: f64, now: f64, spin: &mut SpinTimeline) {
        if !matches!(self.phase, DragPhase::Pressed | DragPhase::Dragging) {
            return;
        }
        self.tracker.update(x, now);
        let velocity = self.tracker.velocity();
        if self.phase == DragPhase::Dragging && velocity.abs() >= THROW_MIN_VELOCITY_PX {
            self.phase = DragPhase::Thrown;
            self.glide = Some(Glide::new(x, velocity));
            log::debug!("[drag] thrown at {:.0} px/s", velocity);
        } else {
            self.phase = DragPhase::Idle;
            spin.ease_time_scale_to(RESTING_RATE, RELEASE_RESUME_SEC, Ease::Power1Out);
        }
    }

    /// Per-frame step. Only does work while thrown: moves the virtual
    /// pointer along the glide and, once it stops, hands the spin its
    /// resume ramp per the tuning.
    pub fn tick(&mut self, dt: f64, spin: &mut SpinTimeline, tuning: &Tuning) {
        if self.phase != DragPhase::Thrown {
            return;
        }
        let Some(glide) = self.glide.as_mut() else {
            self.phase = DragPhase::Idle;
            return;
        };
        glide.step(dt);
        let offset = (self.start_x - glide.x()) / self.drag_distance;
        spin.set_progress(wrap01(self.start_progress + offset));
        if !glide.done() {
            return;
        }
        self.glide = None;
        self.phase = DragPhase::Idle;
        match tuning.throw_resume {
            ThrowResume::Plain => {
                spin.ease_time_scale_to(RESTING_RATE, THROW_RESUME_SEC, Ease::Power2Out);
            }
            ThrowResume::VelocityScaled => {
                // Spin onwards in the direction the panels were moving.
                let direction = if self.drag_offset < 0.0 { -1.0 } else { 1.0 };
                let speed = (self.drag_offset.abs() * THROW_SPEED_SCALE)
                    .clamp(THROW_RATE_MIN, THROW_RATE_MAX);
                spin.ease_time_scale(
                    direction * speed,
                    direction * RESTING_RATE,
                    THROW_RESUME_SEC,
                    Ease::Power2Out,
                );
            }
        }
    }
}
