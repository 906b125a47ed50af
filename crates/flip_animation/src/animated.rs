//! Shared per-frame capability
//!
//! Anything sampled once per frame from the shared clock implements
//! [`Animated`], so heterogeneous collections can be driven uniformly.

use crate::animation::Animation;
use crate::timeline::Timeline;

/// Something sampled from an absolute, non-decreasing clock
pub trait Animated {
    /// Bring state up to date with `clock` (milliseconds)
    fn evaluate(&mut self, clock: f64);

    /// Whether further evaluations can still change the output
    fn is_active(&self) -> bool;
}

impl Animated for Animation {
    fn evaluate(&mut self, clock: f64) {
        Animation::evaluate(self, clock);
    }

    fn is_active(&self) -> bool {
        self.is_looped() || !self.is_complete()
    }
}

impl Animated for Timeline {
    fn evaluate(&mut self, clock: f64) {
        Timeline::evaluate(self, clock);
    }

    fn is_active(&self) -> bool {
        self.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    fn drive(items: &mut [&mut dyn Animated], clock: f64) {
        for item in items.iter_mut() {
            item.evaluate(clock);
        }
    }

    #[test]
    fn test_mixed_collection() {
        let mut fade = Animation::new(0.0, 100.0, 1.0, 0.0, Easing::Linear);
        let mut spin = Animation::new(0.0, 100.0, 0.0, 1.0, Easing::Linear).looped();
        let mut timeline = Timeline::new()
            .with_animation(Animation::new(0.0, 50.0, 0.0, 1.0, Easing::Linear).with_id("a"));
        timeline.play_at(0.0);

        let mut items: [&mut dyn Animated; 3] = [&mut fade, &mut spin, &mut timeline];
        drive(&mut items, 100.0);

        assert!(!fade.is_active());
        assert!(spin.is_active());
        assert!(!timeline.is_active());
    }
}
