//! Easing curves used by the timeline.
//!
//! Names follow the GSAP convention (`power2.out` and friends) so pages can
//! pick a curve with the same string they would hand to a JS tween library.
//! In that naming `power1` is quadratic, `power2` cubic and `power3` quartic.

use crate::config::ConfigError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    Power3Out,
    Power2In,
    Power2InOut,
}

impl Ease {
    /// Map linear progress `t` to eased progress. `t` is clamped to \[0, 1\].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2In => t.powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power1Out => "power1.out",
            Ease::Power2Out => "power2.out",
            Ease::Power3Out => "power3.out",
            Ease::Power2In => "power2.in",
            Ease::Power2InOut => "power2.inOut",
        }
    }
}

impl FromStr for Ease {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" | "linear" => Ok(Ease::Linear),
            "power1.out" => Ok(Ease::Power1Out),
            // bare "power2" means ".out" in GSAP
            "power2" | "power2.out" => Ok(Ease::Power2Out),
            "power3.out" => Ok(Ease::Power3Out),
            "power2.in" => Ok(Ease::Power2In),
            "power2.inOut" => Ok(Ease::Power2InOut),
            other => Err(ConfigError::UnknownEase(other.to_string())),
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
