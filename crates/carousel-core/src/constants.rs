// Carousel tuning constants shared by the web front-end and the host-side
// tests. Knobs that differ between the two shipped variants live in
// `tuning.rs` instead.

// Cylinder geometry
pub const RADIUS_VIEWPORT_FACTOR: f64 = 0.6; // radius = viewport width * this
pub const DRAG_DISTANCE_VIEWPORT_FACTOR: f64 = 3.0; // full-width drag = 1/3 revolution

// Autoplay spin
pub const SPIN_PERIOD_SEC: f64 = 120.0; // one full revolution
pub const RESTING_RATE: f64 = 1.0; // time-scale every override decays back to

// Panel blur
pub const BLUR_ARC_END_DEG: f64 = 315.0;
pub const BLUR_FALLOFF_SPAN_DEG: f64 = 135.0; // degrees from 180 to the zero crossing
pub const BLUR_MAX_PX: f64 = 30.0;
pub const BLUR_INTERVAL_SEC: f64 = 0.05; // filter writes throttled to this

// Drag and throw
pub const RELEASE_RESUME_SEC: f64 = 0.1; // plain release (tap / short drag)
pub const THROW_RESUME_SEC: f64 = 1.2;
pub const THROW_SPEED_SCALE: f64 = 20.0; // drag offset -> burst time-scale
pub const THROW_RATE_MIN: f64 = 1.0;
pub const THROW_RATE_MAX: f64 = 5.0;
pub const THROW_MIN_VELOCITY_PX: f64 = 20.0; // slower releases resume without a glide
pub const GLIDE_FRICTION_TAU_SEC: f64 = 0.45;
pub const GLIDE_STOP_SPEED_PX: f64 = 15.0;

// Scroll nudge
pub const SCROLL_VELOCITY_SCALE: f64 = 0.005; // px/s -> time-scale
pub const SCROLL_RATE_CLAMP: f64 = 60.0;
pub const NUDGE_DECAY_SEC: f64 = 1.2;

// Velocity estimation
pub const VELOCITY_SMOOTHING: f64 = 0.6; // EMA blend toward the newest sample
pub const VELOCITY_RESET_GAP_SEC: f64 = 0.25; // samples further apart start fresh

// Entrance sequence
pub const ENTRANCE_SPINUP_SEC: f64 = 2.0; // longest channel; completion point
pub const ENTRANCE_POSE_SEC: f64 = 1.2;
pub const ENTRANCE_SCALE_FROM: f32 = 0.5;
pub const ENTRANCE_ROTATION_FROM_DEG: f32 = 2.0;
pub const ENTRANCE_ROTATION_TO_DEG: f32 = -1.0;
pub const CONTENT_FADE_SEC: f64 = 0.5;
pub const STAGGER_SPAN_SEC: f64 = 0.8; // total spread of the randomized fade starts
pub const GATE_START_VIEWPORT_FRACTION: f64 = 0.8; // wrap top at 80% viewport height

// Tilt oscillation
pub const TILT_AMPLITUDE_DEG: f32 = 1.0;
pub const TILT_HALF_PERIOD_SEC: f64 = 8.0;

// Rebuild
pub const RESIZE_DEBOUNCE_MS: i32 = 200;

// Frame pacing. A frame gap past the threshold (background tab, long GC
// pause) advances one nominal frame instead of fast-forwarding.
pub const FRAME_LAG_THRESHOLD_SEC: f64 = 0.5;
pub const FRAME_LAG_FALLBACK_SEC: f64 = 0.033;
