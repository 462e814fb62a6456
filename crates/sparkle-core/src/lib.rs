pub mod config;
pub mod constants;
pub mod easing;
pub mod emitter;
pub mod particle;
pub mod surface;
pub mod throttle;
pub mod timeline;

pub use config::{ConfigError, SparkleConfig};
pub use easing::Ease;
pub use emitter::SparkleEmitter;
pub use particle::{ParticleProps, Phase, Sparkle, SparklePlan};
pub use surface::{Surface, SurfaceError};
pub use throttle::Throttle;
pub use timeline::{Completed, Timeline, TweenId};
