//! Timeline orchestration for multiple animations
//!
//! A [`Timeline`] groups animations under one play/stop lifecycle. Child
//! windows are offsets from the moment the timeline was played, and may
//! overlap freely. Several children can share an id with disjoint windows to
//! model one property moving through phases; [`Timeline::value_of`] then
//! returns whichever phase is active, or `None` in the gaps.

use smallvec::SmallVec;
use tracing::debug;

use crate::animation::Animation;

/// A timeline that orchestrates multiple animations
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    animations: SmallVec<[Animation; 4]>,
    /// Last absolute clock seen by `evaluate`
    current_time: f64,
    /// Clock relative to `started_at`
    timeline_time: f64,
    started_at: f64,
    latest_end_time: f64,
    looping: bool,
    playing: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: restart from the beginning every time the timeline completes
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Builder: append an animation
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.append(animation);
        self
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Add an animation to the timeline.
    ///
    /// The completion point is recomputed immediately, independent of the
    /// order in which windows are appended.
    pub fn append(&mut self, animation: Animation) {
        self.animations.push(animation);
        self.latest_end_time = self
            .animations
            .iter()
            .map(Animation::end_time)
            .fold(f64::NEG_INFINITY, f64::max);
    }

    /// Start playing from the beginning, anchored at the last evaluated clock.
    ///
    /// Always restarts; there is no resume.
    pub fn play(&mut self) {
        debug!(
            started_at = self.current_time,
            end = self.latest_end_time,
            "timeline play"
        );
        self.playing = true;
        self.started_at = self.current_time;
        self.timeline_time = 0.0;
    }

    /// Record `clock` as the current time, then [`play`](Self::play).
    pub fn play_at(&mut self, clock: f64) {
        self.current_time = clock;
        self.play();
    }

    /// Advance the timeline and every animation in it to `clock`
    pub fn evaluate(&mut self, clock: f64) {
        debug_assert!(
            clock >= self.current_time,
            "timeline clock went backwards ({clock} < {})",
            self.current_time
        );
        self.current_time = clock;
        if !self.playing {
            return;
        }

        self.timeline_time = self.current_time - self.started_at;
        for animation in &mut self.animations {
            animation.evaluate(self.timeline_time);
        }

        if self.timeline_time >= self.latest_end_time {
            if self.looping {
                self.play();
            } else {
                debug!(clock, "timeline complete");
                self.playing = false;
            }
        }
    }

    /// Current value of the first animation labelled `id` whose window
    /// contains the timeline's current time.
    ///
    /// Returns `None` while the timeline is stopped, and in gaps between
    /// windows sharing the id.
    pub fn value_of(&self, id: &str) -> Option<f64> {
        if !self.playing {
            return None;
        }
        self.animations
            .iter()
            .find(|animation| animation.id() == id && animation.contains(self.timeline_time))
            .map(Animation::current_value)
    }

    /// [`value_of`](Self::value_of), falling back to `default` when absent
    pub fn value_or(&self, id: &str, default: f64) -> f64 {
        self.value_of(id).unwrap_or(default)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Last absolute clock passed to `evaluate`
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Time elapsed since the timeline was last played
    pub fn timeline_time(&self) -> f64 {
        self.timeline_time
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    /// Latest `end_time` over all animations; 0 for an empty timeline
    pub fn latest_end_time(&self) -> f64 {
        self.latest_end_time
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
