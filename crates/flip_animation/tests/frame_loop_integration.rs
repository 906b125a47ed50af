//! Integration tests for animations, timelines, and the scheduler driven
//! from a simulated frame loop
//!
//! These tests verify that:
//! - Timelines loaded from TOML behave like hand-built ones
//! - Independent instances can be ticked in any order within a frame
//! - Looping timelines re-anchor on the frame that crosses their end
//! - Card presets resolve fallbacks the way presentation code expects

use flip_animation::presets::CardFlip;
use flip_animation::{Animated, Animation, AnimationScheduler, Easing, Timeline, TimelineConfig};
use pretty_assertions::assert_eq;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn phased_svx() -> Timeline {
    Timeline::new()
        .with_animation(Animation::new(0.0, 150.0, 0.0, 0.0, Easing::Linear).with_id("svx"))
        .with_animation(Animation::new(150.0, 300.0, 0.0, 1.0, Easing::Linear).with_id("svx"))
}

/// Test that a TOML definition produces the same samples as the builder API
#[test]
fn test_config_matches_builder() {
    let config = TimelineConfig::from_toml_str(
        r#"
        [[animation]]
        id = "svx"
        start = 0
        end = 150
        from = 0
        to = 0

        [[animation]]
        id = "svx"
        start = 150
        end = 300
        from = 0
        to = 1
        "#,
    )
    .unwrap();

    let mut loaded = config.to_timeline().unwrap();
    let mut built = phased_svx();
    loaded.play_at(0.0);
    built.play_at(0.0);

    let mut clock = 0.0;
    while clock < 400.0 {
        loaded.evaluate(clock);
        built.evaluate(clock);
        assert_eq!(loaded.value_of("svx"), built.value_of("svx"), "at {clock}");
        clock += FRAME_MS;
    }
}

/// Test the phased lookup scenario against an absolute frame clock
#[test]
fn test_phased_lookup_from_arbitrary_start() {
    let t0 = 123_456.789;
    let mut timeline = phased_svx();
    timeline.evaluate(t0);
    timeline.play();

    timeline.evaluate(t0 + 75.0);
    assert_eq!(timeline.value_of("svx"), Some(0.0));

    timeline.evaluate(t0 + 225.0);
    let mid = timeline.value_of("svx").unwrap();
    assert!(approx(mid, 0.5), "got {mid}");

    timeline.evaluate(t0 + 400.0);
    assert_eq!(timeline.value_of("svx"), None);
}

/// Test that evaluation order across independent instances does not matter
#[test]
fn test_instances_are_independent() {
    let make = || {
        let mut timeline = phased_svx();
        timeline.play_at(0.0);
        let anim = Animation::new(0.0, 300.0, 10.0, 20.0, Easing::QuartOut);
        (timeline, anim)
    };
    let (mut tl_a, mut an_a) = make();
    let (mut tl_b, mut an_b) = make();

    for frame in 0..30 {
        let clock = frame as f64 * FRAME_MS;
        tl_a.evaluate(clock);
        an_a.evaluate(clock);
        an_b.evaluate(clock);
        tl_b.evaluate(clock);

        assert_eq!(tl_a.value_of("svx"), tl_b.value_of("svx"));
        assert_eq!(an_a.current_value(), an_b.current_value());
    }
}

/// Test that a looping timeline restarts on the frame that crosses its end
#[test]
fn test_looping_timeline_reanchors() {
    let mut timeline = Timeline::new()
        .with_loop(true)
        .with_animation(Animation::new(0.0, 500.0, 0.0, 1.0, Easing::Linear).with_id("pulse"));
    timeline.play_at(0.0);

    let mut clock = 0.0;
    let mut restarts = Vec::new();
    for _ in 0..100 {
        clock += FRAME_MS;
        timeline.evaluate(clock);
        if timeline.timeline_time() == 0.0 {
            restarts.push(timeline.started_at());
        }
        assert!(timeline.is_playing());
    }

    assert_eq!(restarts.len(), 3);
    for pair in restarts.windows(2) {
        assert!(pair[1] - pair[0] >= 500.0);
    }

    clock += FRAME_MS;
    timeline.evaluate(clock);
    assert!(approx(timeline.timeline_time(), clock - timeline.started_at()));
}

/// Test that the scheduler drives a despawn that replaces a card's scale
#[test]
fn test_scheduler_replace_on_despawn() {
    let mut scheduler = AnimationScheduler::new();
    let scale = scheduler.add_animation(Animation::new(0.0, 0.0, 0.5, 0.5, Easing::Linear));

    scheduler.tick(1000.0);
    assert_eq!(scheduler.value(scale), Some(0.5));

    scheduler.replace_animation(scale, Animation::new(1250.0, 1500.0, 0.5, 0.0, Easing::BackIn));
    scheduler.tick(1375.0);
    let shrinking = scheduler.value(scale).unwrap();
    // BackIn swells past the starting scale before shrinking
    assert!(shrinking > 0.5);

    scheduler.tick(1600.0);
    assert!(approx(scheduler.value(scale).unwrap(), 0.0));
    assert!(!scheduler.has_active_animations());
}

/// Test a pair of cards through select, mismatch, and despawn
#[test]
fn test_card_pair_round() {
    let mut first = CardFlip::default();
    let mut second = CardFlip::default();
    let mut clock = 0.0;

    fn frame(cards: &mut [&mut CardFlip], clock: f64) {
        for card in cards.iter_mut() {
            card.evaluate(clock);
        }
    }

    frame(&mut [&mut first, &mut second], clock);
    first.select();
    second.select();

    clock += 300.0;
    frame(&mut [&mut first, &mut second], clock);
    assert_eq!(first.symbol_scale_x(), 1.0);
    assert_eq!(second.symbol_scale_x(), 1.0);

    first.unselect(true);
    second.unselect(true);
    clock += 100.0;
    frame(&mut [&mut first, &mut second], clock);
    assert_eq!(first.symbol_scale_x(), 1.0);

    clock += 500.0;
    frame(&mut [&mut first, &mut second], clock);
    assert_eq!(first.symbol_scale_x(), 0.0);

    first.select();
    second.select();
    clock += 300.0;
    frame(&mut [&mut first, &mut second], clock);
    first.despawn();
    second.despawn();

    clock += 600.0;
    frame(&mut [&mut first, &mut second], clock);
    assert!(first.is_gone() && second.is_gone());
    assert!(!first.is_active());
    // Selected cards keep their symbol face up while despawning
    assert_eq!(
        [first.symbol_scale_x(), second.symbol_scale_x()],
        [1.0, 1.0]
    );
}
