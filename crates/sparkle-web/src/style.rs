use sparkle_core::ParticleProps;

// CSS writers for particle props. Kept free of web-sys so they can be
// tested on the host.

#[inline]
pub fn transform_css(p: &ParticleProps) -> String {
    format!(
        "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.3})",
        p.x, p.y, p.rotation, p.scale
    )
}

#[inline]
pub fn opacity_css(p: &ParticleProps) -> String {
    format!("{:.3}", p.opacity.clamp(0.0, 1.0))
}
