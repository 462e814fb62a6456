// Host-side tests for the timer-driven timeline.

use sparkle_core::{Ease, ParticleProps, Timeline};
use std::time::Duration;

fn props(x: f32, y: f32, scale: f32, opacity: f32) -> ParticleProps {
    ParticleProps {
        x,
        y,
        scale,
        opacity,
        rotation: 0.0,
    }
}

#[test]
fn linear_tween_hits_midpoint() {
    let mut tl: Timeline<u32> = Timeline::new();
    tl.animate(
        7,
        props(0.0, 0.0, 1.0, 1.0),
        props(100.0, -50.0, 0.0, 0.0),
        Duration::from_millis(1000),
        Ease::Linear,
    );
    let mut seen = Vec::new();
    let done = tl.advance(Duration::from_millis(500), |n, p| seen.push((*n, *p)));
    assert!(done.is_empty());
    assert_eq!(seen.len(), 1);
    let (node, p) = seen[0];
    assert_eq!(node, 7);
    assert!((p.x - 50.0).abs() < 1e-4);
    assert!((p.y + 25.0).abs() < 1e-4);
    assert!((p.opacity - 0.5).abs() < 1e-4);
}

#[test]
fn completion_applies_exact_target_once() {
    let mut tl: Timeline<u32> = Timeline::new();
    let to = props(3.0, 4.0, 0.2, 0.0);
    let id = tl.animate(
        1,
        props(0.0, 0.0, 0.8, 1.0),
        to,
        Duration::from_millis(800),
        Ease::Power2Out,
    );
    assert!(tl.contains(id));

    let mut last = None;
    for _ in 0..7 {
        assert!(tl
            .advance(Duration::from_millis(100), |_, p| last = Some(*p))
            .is_empty());
    }
    let done = tl.advance(Duration::from_millis(100), |_, p| last = Some(*p));
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, id);
    assert_eq!(done[0].node, 1);
    assert_eq!(done[0].props, to);
    assert_eq!(last, Some(to));
    assert!(tl.is_empty());
    assert!(!tl.contains(id));

    // nothing left to complete
    assert!(tl.advance(Duration::from_secs(5), |_, _| {}).is_empty());
}

#[test]
fn tweens_advance_independently() {
    let mut tl: Timeline<&'static str> = Timeline::new();
    let a = tl.animate(
        "a",
        props(0.0, 0.0, 1.0, 1.0),
        props(0.0, 0.0, 0.0, 0.0),
        Duration::from_millis(800),
        Ease::Linear,
    );
    assert!(tl.advance(Duration::from_millis(300), |_, _| {}).is_empty());
    let b = tl.animate(
        "b",
        props(0.0, 0.0, 1.0, 1.0),
        props(0.0, 0.0, 0.0, 0.0),
        Duration::from_millis(800),
        Ease::Linear,
    );
    assert_eq!(tl.len(), 2);

    let done = tl.advance(Duration::from_millis(500), |_, _| {});
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, a);
    assert!(tl.contains(b));

    let done = tl.advance(Duration::from_millis(300), |_, _| {});
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, b);
}

#[test]
fn completions_in_one_step_come_out_by_end_time() {
    let mut tl: Timeline<u32> = Timeline::new();
    let p0 = props(0.0, 0.0, 1.0, 1.0);
    let p1 = props(1.0, 1.0, 0.0, 0.0);
    // created first but lasts longer
    let slow = tl.animate(0, p0, p1, Duration::from_millis(900), Ease::Linear);
    let fast = tl.animate(1, p0, p1, Duration::from_millis(200), Ease::Linear);
    let done = tl.advance(Duration::from_secs(1), |_, _| {});
    let order: Vec<_> = done.iter().map(|c| c.id).collect();
    assert_eq!(order, vec![fast, slow]);
}

#[test]
fn zero_duration_completes_on_next_advance() {
    let mut tl: Timeline<u32> = Timeline::new();
    let to = props(9.0, 9.0, 0.2, 0.0);
    tl.animate(0, props(0.0, 0.0, 1.0, 1.0), to, Duration::ZERO, Ease::Power2Out);
    let done = tl.advance(Duration::ZERO, |_, _| {});
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].props, to);
}
