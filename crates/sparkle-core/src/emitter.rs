//! The sparkle emitter: turns pointer movement into short-lived particles.
//!
//! One emitter owns its throttle, its timeline and the rendering surface.
//! Pointer events go through [`SparkleEmitter::on_pointer_move`]; a frame
//! loop drives [`SparkleEmitter::tick`], which is also where finished
//! particles are removed.

use crate::config::{ConfigError, SparkleConfig};
use crate::particle::{Phase, Sparkle, SparklePlan};
use crate::surface::Surface;
use crate::throttle::Throttle;
use crate::timeline::{Timeline, TweenId};
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

pub struct SparkleEmitter<S: Surface, R: Rng> {
    config: SparkleConfig,
    throttle: Throttle,
    surface: S,
    timeline: Timeline<S::Node>,
    live: FnvHashMap<TweenId, Sparkle<S::Node>>,
    rng: R,
    spawned: u64,
}

impl<S: Surface, R: Rng> SparkleEmitter<S, R> {
    pub fn new(config: SparkleConfig, surface: S, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            throttle: Throttle::new(config.throttle_ms),
            config,
            surface,
            timeline: Timeline::new(),
            live: FnvHashMap::default(),
            rng,
            spawned: 0,
        })
    }

    /// Handle one pointer-move at clock reading `now_ms` and viewport
    /// position `pos`.
    ///
    /// Returns the id of the new particle's transition, or `None` when the
    /// event was throttled away or the surface refused the node.
    pub fn on_pointer_move(&mut self, now_ms: f64, pos: Vec2) -> Option<TweenId> {
        if !self.throttle.try_acquire(now_ms) {
            return None;
        }

        let node = match self.surface.spawn(&self.config.class_name, &self.config.glyph) {
            Ok(n) => n,
            Err(e) => {
                log::warn!("[sparkle] {}", e);
                return None;
            }
        };
        let mut sparkle = Sparkle::new(node);

        let plan = SparklePlan::roll(pos, &self.config, &mut self.rng);
        self.surface.apply(&sparkle.node, &plan.from);
        let id = self.timeline.animate(
            sparkle.node.clone(),
            plan.from,
            plan.to,
            self.config.duration(),
            self.config.ease,
        );
        sparkle.begin();
        self.live.insert(id, sparkle);
        self.spawned += 1;
        let target = plan.to.position();
        log::trace!(
            "[sparkle] spawn #{} at ({:.1},{:.1}) -> ({:.1},{:.1})",
            self.spawned,
            pos.x,
            pos.y,
            target.x,
            target.y
        );
        Some(id)
    }

    /// Advance all in-flight particles by `dt` and remove the ones whose
    /// transition completed. Returns how many were removed.
    pub fn tick(&mut self, dt: Duration) -> usize {
        let surface = &mut self.surface;
        let completed = self
            .timeline
            .advance(dt, |node, props| surface.apply(node, props));

        let mut removed = 0;
        for done in completed {
            self.surface.remove(&done.node);
            if let Some(mut sparkle) = self.live.remove(&done.id) {
                let ok = sparkle.finish();
                debug_assert!(ok, "sparkle finished twice");
            }
            removed += 1;
        }
        removed
    }

    /// Lifecycle phase of the particle behind `id`. Ids that are no longer
    /// tracked belong to particles that were already removed.
    pub fn phase(&self, id: TweenId) -> Phase {
        self.live
            .get(&id)
            .map(|s| s.phase())
            .unwrap_or(Phase::Removed)
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.timeline.len()
    }

    #[inline]
    pub fn spawned_count(&self) -> u64 {
        self.spawned
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
