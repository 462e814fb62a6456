use crate::easing::Ease;

// Tuning constants for the sparkle trail. `SparkleConfig::default()` is built
// from these; pages may override a subset through data attributes.

// Emission
pub const THROTTLE_MS: f64 = 30.0; // min gap between accepted pointer events (~33/s)

// Particle look
pub const SPARKLE_GLYPH: &str = "\u{2728}";
pub const SPARKLE_CLASS: &str = "sparkle";

// Initial state, applied without a transition
pub const START_SCALE: f32 = 0.8;
pub const START_OPACITY: f32 = 1.0;

// Target state
pub const END_SCALE: f32 = 0.2;
pub const END_OPACITY: f32 = 0.0;
pub const RISE_BASE_PX: f32 = 50.0; // always moves up at least this far
pub const RISE_JITTER_PX: f32 = 30.0; // plus up to this much extra
pub const DRIFT_MAX_PX: f32 = 30.0; // lateral drift in [-max, max]
pub const ROTATION_MAX_DEG: f32 = 90.0; // final rotation in [-max, max]

// Transition
pub const DURATION_SEC: f32 = 0.8;
pub const DEFAULT_EASE: Ease = Ease::Power2Out; // decelerating, "power2.out"

// Upper bound for a single frame step; keeps a backgrounded tab from
// producing one huge dt when it becomes visible again.
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
