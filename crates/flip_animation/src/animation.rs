//! Clock-driven scalar animations
//!
//! An [`Animation`] interpolates between two values over an absolute time
//! window. It is sampled, not ticked: every call to [`Animation::evaluate`]
//! recomputes progress from the supplied clock reading, so skipping frames
//! or evaluating long after the window closed is always well-defined.

use tracing::trace;

use crate::easing::Easing;

/// Id carried by animations that were never labelled
pub const DEFAULT_ANIMATION_ID: &str = "nah";

/// Where an animation sits within its window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Clock has not reached the start of the window
    Pending,
    Running,
    /// Progress reached 1
    Complete,
}

/// A single value interpolated over an absolute time window
#[derive(Clone, Debug)]
pub struct Animation {
    start_time: f64,
    end_time: f64,
    start_value: f64,
    end_value: f64,
    duration: f64,
    easing: Easing,
    looped: bool,
    id: String,
    amount: f64,
    current_value: f64,
}

impl Animation {
    /// Create an animation running from `start_value` at `start_time` to
    /// `end_value` at `end_time`.
    ///
    /// Times are absolute clock readings in milliseconds. When the animation
    /// lives inside a [`Timeline`](crate::Timeline) they are offsets from the
    /// moment the timeline was played.
    pub fn new(
        start_time: f64,
        end_time: f64,
        start_value: f64,
        end_value: f64,
        easing: Easing,
    ) -> Self {
        Self {
            start_time,
            end_time,
            start_value,
            end_value,
            duration: end_time - start_time,
            easing,
            looped: false,
            id: DEFAULT_ANIMATION_ID.to_string(),
            amount: 0.0,
            current_value: start_value,
        }
    }

    /// Builder: restart the window every time it completes
    pub fn looped(self) -> Self {
        self.with_looped(true)
    }

    /// Builder: set whether the animation loops
    pub fn with_looped(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    /// Builder: label the animation for timeline lookups
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sample the animation at `clock`.
    ///
    /// Progress is clamped to `[0, 1]`. A looped animation that reaches 1
    /// restarts its window at `clock` within the same call, so its value
    /// reads as `start_value` at the instant of the restart.
    pub fn evaluate(&mut self, clock: f64) {
        self.amount = self.progress_at(clock);
        self.current_value = self.value_at(self.amount);

        if self.looped && self.amount == 1.0 {
            trace!(id = %self.id, clock, "animation loop restart");
            self.start_time = clock;
            self.end_time = clock + self.duration;
            self.amount = 0.0;
            self.current_value = self.start_value;
        }
    }

    /// Clamped progress of the current window at `clock`
    fn progress_at(&self, clock: f64) -> f64 {
        // A zero-length window is complete the moment the clock reaches it
        if self.duration <= 0.0 {
            return if clock >= self.start_time { 1.0 } else { 0.0 };
        }
        ((clock - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value for a given progress, without touching state
    pub fn value_at(&self, progress: f64) -> f64 {
        self.start_value + (self.end_value - self.start_value) * self.easing.apply(progress)
    }

    /// Whether `time` falls inside the current window (inclusive)
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    pub fn phase(&self) -> AnimationPhase {
        if self.amount >= 1.0 {
            AnimationPhase::Complete
        } else if self.amount <= 0.0 {
            AnimationPhase::Pending
        } else {
            AnimationPhase::Running
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == AnimationPhase::Complete
    }

    /// Normalized progress in `[0, 1]` as of the last evaluation
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Interpolated value as of the last evaluation
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    /// Window length, fixed at construction
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_initial_state() {
        let anim = Animation::new(100.0, 200.0, 3.0, 7.0, Easing::SineOut);
        assert_eq!(anim.amount(), 0.0);
        assert_eq!(anim.current_value(), 3.0);
        assert_eq!(anim.duration(), 100.0);
        assert_eq!(anim.id(), DEFAULT_ANIMATION_ID);
        assert!(!anim.is_looped());
        assert_eq!(anim.phase(), AnimationPhase::Pending);
    }

    #[test]
    fn test_linear_scenario() {
        let mut anim = Animation::new(0.0, 1000.0, 0.0, 100.0, Easing::Linear);

        anim.evaluate(0.0);
        assert_eq!(anim.current_value(), 0.0);

        anim.evaluate(500.0);
        assert_eq!(anim.current_value(), 50.0);
        assert_eq!(anim.phase(), AnimationPhase::Running);

        anim.evaluate(1000.0);
        assert_eq!(anim.current_value(), 100.0);

        anim.evaluate(1500.0);
        assert_eq!(anim.current_value(), 100.0);
        assert_eq!(anim.amount(), 1.0);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_clamps_before_start() {
        let mut anim = Animation::new(500.0, 900.0, -2.0, 4.0, Easing::BackIn);
        for clock in [0.0, 250.0, 499.0, 500.0] {
            anim.evaluate(clock);
            assert_eq!(anim.amount(), 0.0);
            assert_eq!(anim.current_value(), -2.0);
        }
    }

    #[test]
    fn test_after_end_uses_eased_endpoint() {
        for easing in Easing::ALL {
            let mut anim = Animation::new(0.0, 10.0, 1.0, 5.0, easing);
            anim.evaluate(1.0e9);
            assert_eq!(anim.amount(), 1.0);
            assert_eq!(anim.current_value(), 1.0 + 4.0 * easing.apply(1.0));
        }
    }

    #[test]
    fn test_eased_midpoint() {
        let mut anim = Animation::new(0.0, 100.0, 10.0, 20.0, Easing::CubicIn);
        anim.evaluate(50.0);
        assert!((anim.current_value() - 11.25).abs() < EPS);
    }

    #[test]
    fn test_loop_restarts_synchronously() {
        let mut anim = Animation::new(0.0, 100.0, 0.0, 1.0, Easing::Linear).looped();

        anim.evaluate(100.0);
        assert_eq!(anim.start_time(), 100.0);
        assert_eq!(anim.end_time(), 200.0);
        assert_eq!(anim.amount(), 0.0);
        assert_eq!(anim.current_value(), 0.0);

        anim.evaluate(101.0);
        assert!((anim.amount() - 0.01).abs() < EPS);
        assert!((anim.current_value() - 0.01).abs() < EPS);
    }

    #[test]
    fn test_loop_restart_anchors_on_late_clock() {
        let mut anim = Animation::new(0.0, 100.0, 0.0, 1.0, Easing::Linear).looped();
        anim.evaluate(350.0);
        assert_eq!(anim.start_time(), 350.0);
        assert_eq!(anim.end_time(), 450.0);
        assert_eq!(anim.duration(), 100.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut anim = Animation::new(0.0, 0.0, 2.0, 2.0, Easing::Linear);
        anim.evaluate(0.0);
        assert_eq!(anim.amount(), 1.0);
        assert_eq!(anim.current_value(), 2.0);
        assert!(!anim.current_value().is_nan());

        let mut pending = Animation::new(50.0, 50.0, 0.0, 1.0, Easing::Linear);
        pending.evaluate(10.0);
        assert_eq!(pending.amount(), 0.0);
        pending.evaluate(50.0);
        assert_eq!(pending.current_value(), 1.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let anim = Animation::new(150.0, 300.0, 0.0, 1.0, Easing::Linear).with_id("svx");
        assert!(anim.contains(150.0));
        assert!(anim.contains(300.0));
        assert!(!anim.contains(149.9));
        assert!(!anim.contains(300.1));
        assert_eq!(anim.id(), "svx");
    }
}
