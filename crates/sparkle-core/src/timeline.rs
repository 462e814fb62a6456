//! Timer-driven animation driver.
//!
//! Each tween interpolates a node's [`ParticleProps`] from a start to a
//! target state over a fixed duration. Tweens advance independently; there
//! is no pause, seek or cancel. When a tween reaches its end the exact target
//! props are applied and a [`Completed`] message is returned, once.

use crate::easing::Ease;
use crate::particle::ParticleProps;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

#[derive(Debug)]
struct Tween<N> {
    id: TweenId,
    node: N,
    from: ParticleProps,
    to: ParticleProps,
    duration: Duration,
    elapsed: Duration,
    ease: Ease,
}

impl<N> Tween<N> {
    #[inline]
    fn done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn current(&self) -> ParticleProps {
        if self.done() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(&self.to, self.ease.apply(t))
    }
}

/// Message emitted when a tween has applied its final state.
#[derive(Debug)]
pub struct Completed<N> {
    pub id: TweenId,
    pub node: N,
    pub props: ParticleProps,
}

#[derive(Debug)]
pub struct Timeline<N> {
    tweens: Vec<Tween<N>>,
    next_id: u64,
}

impl<N> Default for Timeline<N> {
    fn default() -> Self {
        Self {
            tweens: Vec::new(),
            next_id: 0,
        }
    }
}

impl<N> Timeline<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition of `node` from `from` to `to`.
    ///
    /// The caller is expected to have applied `from` already; the first
    /// write this timeline makes happens on the next [`advance`](Self::advance).
    pub fn animate(
        &mut self,
        node: N,
        from: ParticleProps,
        to: ParticleProps,
        duration: Duration,
        ease: Ease,
    ) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.push(Tween {
            id,
            node,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            ease,
        });
        id
    }

    /// Move every tween forward by `dt`, calling `apply` with each node's new
    /// props. Finished tweens are dropped and returned, earliest end first.
    pub fn advance<F>(&mut self, dt: Duration, mut apply: F) -> Vec<Completed<N>>
    where
        F: FnMut(&N, &ParticleProps),
    {
        let mut finished: Vec<(Duration, Completed<N>)> = Vec::new();
        let mut i = 0;
        while i < self.tweens.len() {
            let tw = &mut self.tweens[i];
            tw.elapsed = tw.elapsed.saturating_add(dt);
            let props = tw.current();
            apply(&tw.node, &props);
            if tw.done() {
                let overshoot = tw.elapsed - tw.duration;
                let tw = self.tweens.swap_remove(i);
                finished.push((
                    overshoot,
                    Completed {
                        id: tw.id,
                        node: tw.node,
                        props,
                    },
                ));
            } else {
                i += 1;
            }
        }
        // larger overshoot ended earlier; ties keep creation order
        finished.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.id.cmp(&b.1.id)));
        finished.into_iter().map(|(_, c)| c).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|t| t.id == id)
    }
}
