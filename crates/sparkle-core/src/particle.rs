//! Particle model: the animatable properties of one sparkle, how its start
//! and end states are rolled, and its lifecycle.

use crate::config::SparkleConfig;
use glam::Vec2;
use rand::Rng;

/// Visual state of a particle. `x`/`y` are viewport pixels, `rotation` is in
/// degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleProps {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub rotation: f32,
}

impl ParticleProps {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Per-field linear interpolation. `t` is not clamped.
    #[inline]
    pub fn lerp(&self, to: &ParticleProps, t: f32) -> ParticleProps {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        ParticleProps {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            opacity: mix(self.opacity, to.opacity),
            rotation: mix(self.rotation, to.rotation),
        }
    }
}

/// Start and end state for one sparkle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparklePlan {
    pub from: ParticleProps,
    pub to: ParticleProps,
}

impl SparklePlan {
    /// Roll a plan for a sparkle born at `origin`.
    ///
    /// The particle rises by `rise_base + [0, rise_jitter)`, drifts sideways
    /// by `[-drift_max, drift_max)` and ends at a rotation in
    /// `[-rotation_max_deg, rotation_max_deg)`.
    pub fn roll<R: Rng + ?Sized>(origin: Vec2, cfg: &SparkleConfig, rng: &mut R) -> Self {
        let from = ParticleProps {
            x: origin.x,
            y: origin.y,
            scale: cfg.start_scale,
            opacity: cfg.start_opacity,
            rotation: 0.0,
        };
        let to = ParticleProps {
            x: origin.x + symmetric(rng, cfg.drift_max),
            y: origin.y - cfg.rise_base - rng.gen::<f32>() * cfg.rise_jitter,
            scale: cfg.end_scale,
            opacity: cfg.end_opacity,
            rotation: symmetric(rng, cfg.rotation_max_deg),
        };
        Self { from, to }
    }
}

// Uniform in [-max, max); degenerate ranges collapse to 0.
#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    rng.gen::<f32>() * 2.0 * max - max
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Created,
    Animating,
    Removed,
}

/// One live sparkle: the surface node plus where it is in its lifecycle.
///
/// Transitions only go forward, `Created -> Animating -> Removed`; the
/// transition methods return `false` and leave the phase alone otherwise.
#[derive(Debug)]
pub struct Sparkle<N> {
    pub node: N,
    phase: Phase,
}

impl<N> Sparkle<N> {
    pub fn new(node: N) -> Self {
        Self {
            node,
            phase: Phase::Created,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Created {
            return false;
        }
        self.phase = Phase::Animating;
        true
    }

    pub fn finish(&mut self) -> bool {
        if self.phase != Phase::Animating {
            return false;
        }
        self.phase = Phase::Removed;
        true
    }
}
