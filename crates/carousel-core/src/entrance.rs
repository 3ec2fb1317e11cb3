use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::constants::{
    CONTENT_FADE_SEC, ENTRANCE_POSE_SEC, ENTRANCE_ROTATION_FROM_DEG, ENTRANCE_ROTATION_TO_DEG,
    ENTRANCE_SCALE_FROM, ENTRANCE_SPINUP_SEC, STAGGER_SPAN_SEC, TILT_AMPLITUDE_DEG,
    TILT_HALF_PERIOD_SEC,
};
use crate::ease::Ease;
use crate::trigger::GateEvent;

/// What a gate crossing asks of the entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Resume,
}

/// Downward exit resumes; every other crossing (re)plays.
pub fn action_for(event: GateEvent) -> ToggleAction {
    match event {
        GateEvent::Leave => ToggleAction::Resume,
        _ => ToggleAction::Play,
    }
}

/// Wrap transform the entrance wants this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapPose {
    pub scale: f32,
    pub rotation_deg: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Built but never entered the viewport; holds the reveal's start
    /// state so an off-screen wrap is already shrunk and hidden.
    Armed,
    Playing,
    Done,
}

/// The scroll-into-view reveal: wrap scales and counter-rotates in,
/// content fades up in a shuffled stagger, and once everything lands the
/// wrap settles into a slow perpetual tilt.
#[derive(Clone, Debug)]
pub struct EntranceTimeline {
    phase: Phase,
    elapsed: f64,
    burst: f64,
    delays: Vec<f64>,
    tilt: Option<TiltOscillator>,
}

impl EntranceTimeline {
    pub fn new(content_count: usize, burst: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            phase: Phase::Armed,
            elapsed: 0.0,
            burst,
            delays: stagger_delays(content_count, &mut rng),
            tilt: None,
        }
    }

    pub fn burst(&self) -> f64 {
        self.burst
    }

    /// Feed a gate action in. Returns true when a fresh play actually
    /// starts (the caller kicks the spin burst off the same crossing).
    pub fn apply(&mut self, action: ToggleAction) -> bool {
        match (action, self.phase) {
            (ToggleAction::Play, Phase::Playing) => false,
            (ToggleAction::Play, _) => {
                self.phase = Phase::Playing;
                self.elapsed = 0.0;
                self.tilt = None;
                true
            }
            (ToggleAction::Resume, _) => false,
        }
    }

    /// Advance by `dt` seconds. Returns true on the frame the play
    /// completes.
    pub fn advance(&mut self, dt: f64) -> bool {
        match self.phase {
            Phase::Armed => false,
            Phase::Playing => {
                self.elapsed += dt.max(0.0);
                if self.elapsed >= ENTRANCE_SPINUP_SEC {
                    self.phase = Phase::Done;
                    self.tilt = Some(TiltOscillator::new());
                    true
                } else {
                    false
                }
            }
            Phase::Done => {
                if let Some(tilt) = self.tilt.as_mut() {
                    tilt.advance(dt);
                }
                false
            }
        }
    }

    pub fn playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// While armed this is the reveal's starting pose, written from build
    /// on so the first play never snaps in from the stylesheet state.
    pub fn wrap_pose(&self) -> WrapPose {
        match self.phase {
            Phase::Armed => WrapPose {
                scale: ENTRANCE_SCALE_FROM,
                rotation_deg: ENTRANCE_ROTATION_FROM_DEG,
            },
            Phase::Playing => {
                let t = (self.elapsed / ENTRANCE_POSE_SEC).clamp(0.0, 1.0);
                let e = Ease::ExpoInOut.apply(t) as f32;
                WrapPose {
                    scale: ENTRANCE_SCALE_FROM + (1.0 - ENTRANCE_SCALE_FROM) * e,
                    rotation_deg: ENTRANCE_ROTATION_FROM_DEG
                        + (ENTRANCE_ROTATION_TO_DEG - ENTRANCE_ROTATION_FROM_DEG) * e,
                }
            }
            Phase::Done => WrapPose {
                scale: 1.0,
                rotation_deg: self
                    .tilt
                    .as_ref()
                    .map_or(ENTRANCE_ROTATION_TO_DEG, |t| t.rotation_deg()),
            },
        }
    }

    /// Opacity of content element `index`. Zero while armed: content stays
    /// hidden from build until the reveal first plays.
    pub fn content_alpha(&self, index: usize) -> f32 {
        match self.phase {
            Phase::Armed => 0.0,
            Phase::Done => 1.0,
            Phase::Playing => {
                let delay = self.delays.get(index).copied().unwrap_or(0.0);
                let t = ((self.elapsed - delay) / CONTENT_FADE_SEC).clamp(0.0, 1.0);
                Ease::ExpoInOut.apply(t) as f32
            }
        }
    }
}

/// Shuffled stagger: every element gets a slot, slots are `span/(n-1)`
/// apart, and the shuffle decides who gets which.
fn stagger_delays(count: usize, rng: &mut StdRng) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0.0];
    }
    let mut order: Vec<usize> = (0..count).collect();
    order.shuffle(rng);
    let step = STAGGER_SPAN_SEC / (count - 1) as f64;
    let mut delays = vec![0.0; count];
    for (slot, &element) in order.iter().enumerate() {
        delays[element] = slot as f64 * step;
    }
    delays
}

/// Endless wrap sway after the entrance lands: eased sweeps between
/// -amplitude and +amplitude, reversing each half period.
#[derive(Clone, Copy, Debug)]
pub struct TiltOscillator {
    elapsed: f64,
}

impl TiltOscillator {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt.max(0.0);
    }

    pub fn rotation_deg(&self) -> f32 {
        let amplitude = TILT_AMPLITUDE_DEG;
        let cycle = self.elapsed / TILT_HALF_PERIOD_SEC;
        let half = cycle as u64;
        let t = Ease::SineInOut.apply(cycle.fract()) as f32;
        if half % 2 == 0 {
            -amplitude + 2.0 * amplitude * t
        } else {
            amplitude - 2.0 * amplitude * t
        }
    }
}

impl Default for TiltOscillator {
    fn default() -> Self {
        Self::new()
    }
}
