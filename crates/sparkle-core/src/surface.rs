//! Rendering surface the emitter draws particles into.

use crate::particle::ParticleProps;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to create particle node: {0}")]
    Create(String),
    #[error("failed to attach particle node: {0}")]
    Attach(String),
}

/// A container that can host particle nodes.
///
/// `apply` and `remove` are fire-and-forget: a node that has already gone
/// away is not an error.
pub trait Surface {
    type Node: Clone;

    /// Create a node carrying `class` and `glyph` and attach it.
    fn spawn(&mut self, class: &str, glyph: &str) -> Result<Self::Node, SurfaceError>;

    /// Write `props` to `node` without any transition.
    fn apply(&mut self, node: &Self::Node, props: &ParticleProps);

    /// Detach `node` from the surface.
    fn remove(&mut self, node: &Self::Node);
}
