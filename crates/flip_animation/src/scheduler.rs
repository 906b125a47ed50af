//! Animation scheduler
//!
//! Owns standalone animations and timelines and evaluates each of them
//! exactly once per frame against the caller's clock.

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

use crate::animated::Animated;
use crate::animation::Animation;
use crate::timeline::Timeline;

new_key_type! {
    pub struct AnimationId;
    pub struct TimelineId;
}

/// The animation scheduler that ticks all owned animations
#[derive(Default)]
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, Animation>,
    timelines: SlotMap<TimelineId, Timeline>,
    last_clock: Option<f64>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_animation(&mut self, animation: Animation) -> AnimationId {
        self.animations.insert(animation)
    }

    pub fn add_timeline(&mut self, timeline: Timeline) -> TimelineId {
        self.timelines.insert(timeline)
    }

    pub fn animation(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id)
    }

    pub fn animation_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.get_mut(id)
    }

    pub fn timeline(&self, id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(id)
    }

    pub fn timeline_mut(&mut self, id: TimelineId) -> Option<&mut Timeline> {
        self.timelines.get_mut(id)
    }

    /// Swap the animation stored under `id` for a fresh one.
    ///
    /// Returns the discarded animation, or `None` (leaving the scheduler
    /// unchanged) if `id` is stale.
    pub fn replace_animation(&mut self, id: AnimationId, animation: Animation) -> Option<Animation> {
        self.animations
            .get_mut(id)
            .map(|slot| std::mem::replace(slot, animation))
    }

    pub fn remove_animation(&mut self, id: AnimationId) -> Option<Animation> {
        self.animations.remove(id)
    }

    pub fn remove_timeline(&mut self, id: TimelineId) -> Option<Timeline> {
        self.timelines.remove(id)
    }

    /// Evaluate every animation and timeline at `clock`
    pub fn tick(&mut self, clock: f64) {
        if let Some(last) = self.last_clock {
            debug_assert!(clock >= last, "scheduler clock went backwards ({clock} < {last})");
        }
        self.last_clock = Some(clock);

        for (_, animation) in self.animations.iter_mut() {
            animation.evaluate(clock);
        }
        for (_, timeline) in self.timelines.iter_mut() {
            timeline.evaluate(clock);
        }

        trace!(
            clock,
            animations = self.animations.len(),
            timelines = self.timelines.len(),
            "scheduler tick"
        );
    }

    /// Current value of a standalone animation
    pub fn value(&self, id: AnimationId) -> Option<f64> {
        self.animations.get(id).map(Animation::current_value)
    }

    /// [`Timeline::value_of`] for the timeline stored under `id`
    pub fn timeline_value(&self, id: TimelineId, name: &str) -> Option<f64> {
        self.timelines.get(id)?.value_of(name)
    }

    /// Check if anything can still change on the next tick
    pub fn has_active_animations(&self) -> bool {
        self.animations.values().any(Animated::is_active)
            || self.timelines.values().any(Animated::is_active)
    }

    /// Clock passed to the most recent `tick`
    pub fn last_clock(&self) -> Option<f64> {
        self.last_clock
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }
}
