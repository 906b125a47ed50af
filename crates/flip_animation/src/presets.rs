//! Animation presets for the card game's visuals
//!
//! Pre-built timelines and animations for card flips, the end-of-level
//! screen, and the confetti burst. Presentation code owns one of these per
//! entity, evaluates it every frame, and reads values back with fallbacks.

use std::f64::consts::PI;

use rand::Rng;

use crate::animated::Animated;
use crate::animation::Animation;
use crate::easing::Easing;
use crate::timeline::Timeline;

/// Default length of a single card flip phase
pub const CARD_EFFECT_DURATION_MS: f64 = 250.0;

/// Id of the card back's horizontal scale
pub const CARD_BACK_SCALE_X: &str = "cvx";
/// Id of the card symbol's horizontal scale
pub const SYMBOL_SCALE_X: &str = "svx";

pub const MAIN_FADING: &str = "main_fading";
pub const COMPLETED_TEXT_SCALING: &str = "completed_text_scaling";
pub const TIME_TEXT_FADING: &str = "time_text_fading";
pub const TIME_TEXT_MOVE_Y: &str = "time_text_moveY";

pub const CONFETTI_COUNT: usize = 100;
pub const CONFETTI_DURATION_MS: f64 = 1300.0;
/// How far a confetti piece falls over its lifetime
pub const CONFETTI_DROP_PX: f64 = 100.0;

// ============================================================================
// Card flips
// ============================================================================

/// Flip, unflip, and despawn animations for one card.
///
/// The card back and symbol are scaled horizontally through -1..1 to fake a
/// 3D flip. Phases of the same property share an id, so gaps between them
/// resolve to the resting values chosen in [`back_scale_x`](Self::back_scale_x)
/// and [`symbol_scale_x`](Self::symbol_scale_x).
#[derive(Clone, Debug)]
pub struct CardFlip {
    effect_duration_ms: f64,
    card_scale: f64,
    select: Timeline,
    unselect: Timeline,
    unselect_no_match: Timeline,
    despawn: Animation,
    selected: bool,
    despawned: bool,
    clock: f64,
}

impl CardFlip {
    pub fn new(effect_duration_ms: f64, card_scale: f64) -> Self {
        let d = effect_duration_ms;

        let select = Timeline::new()
            .with_animation(
                Animation::new(0.0, d, -1.0, 1.0, Easing::SineInOut).with_id(CARD_BACK_SCALE_X),
            )
            .with_animation(
                Animation::new(0.0, d * 0.5, 0.0, 0.0, Easing::Linear).with_id(SYMBOL_SCALE_X),
            )
            .with_animation(
                Animation::new(d * 0.5, d, 0.0, 1.0, Easing::SineOut).with_id(SYMBOL_SCALE_X),
            );

        let unselect = Timeline::new().with_animation(
            Animation::new(0.0, d * 0.5, 1.0, 0.0, Easing::SineIn).with_id(SYMBOL_SCALE_X),
        );

        // Hold the symbol for one phase so the player sees the mismatch
        let unselect_no_match = Timeline::new()
            .with_animation(
                Animation::new(d, d * 2.0, 1.0, -1.0, Easing::SineInOut)
                    .with_id(CARD_BACK_SCALE_X),
            )
            .with_animation(
                Animation::new(0.0, d, 1.0, 1.0, Easing::SineOut).with_id(SYMBOL_SCALE_X),
            )
            .with_animation(
                Animation::new(d, d * 1.5, 1.0, 0.0, Easing::SineOut).with_id(SYMBOL_SCALE_X),
            );

        Self {
            effect_duration_ms,
            card_scale,
            select,
            unselect,
            unselect_no_match,
            despawn: Animation::new(0.0, 0.0, card_scale, card_scale, Easing::Linear),
            selected: false,
            despawned: false,
            clock: 0.0,
        }
    }

    pub fn evaluate(&mut self, clock: f64) {
        if self.is_gone() {
            return;
        }
        self.clock = clock;
        self.select.evaluate(clock);
        self.unselect.evaluate(clock);
        self.unselect_no_match.evaluate(clock);
        self.despawn.evaluate(clock);
    }

    /// Turn the card face up
    pub fn select(&mut self) {
        self.selected = true;
        self.select.play();
    }

    /// Turn the card face down, lingering first when the pair did not match
    pub fn unselect(&mut self, no_match: bool) {
        self.selected = false;
        if no_match {
            self.unselect_no_match.play();
        } else {
            self.unselect.play();
        }
    }

    /// Shrink the card away after a one-phase delay.
    ///
    /// Replaces the despawn animation wholesale, anchored at the last
    /// evaluated clock. Call it after this frame's [`evaluate`](Self::evaluate);
    /// called before, the delay is measured from the previous frame.
    pub fn despawn(&mut self) {
        let d = self.effect_duration_ms;
        self.despawned = true;
        self.despawn = Animation::new(
            self.clock + d,
            self.clock + d * 2.0,
            self.card_scale,
            0.0,
            Easing::BackIn,
        );
    }

    /// Overall card scale
    pub fn scale(&self) -> f64 {
        self.despawn.current_value()
    }

    /// Horizontal scale of the card back; 1 at rest
    pub fn back_scale_x(&self) -> f64 {
        self.select
            .value_of(CARD_BACK_SCALE_X)
            .or_else(|| self.unselect_no_match.value_of(CARD_BACK_SCALE_X))
            .unwrap_or(1.0)
    }

    /// Horizontal scale of the symbol; 1 face up, 0 face down at rest
    pub fn symbol_scale_x(&self) -> f64 {
        if self.selected {
            self.select.value_or(SYMBOL_SCALE_X, 1.0)
        } else {
            self.unselect
                .value_of(SYMBOL_SCALE_X)
                .or_else(|| self.unselect_no_match.value_of(SYMBOL_SCALE_X))
                .unwrap_or(0.0)
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Despawned and fully shrunk; nothing left to draw
    pub fn is_gone(&self) -> bool {
        self.despawned && self.despawn.amount() == 1.0
    }
}

impl Default for CardFlip {
    fn default() -> Self {
        Self::new(CARD_EFFECT_DURATION_MS, 1.0)
    }
}

impl Animated for CardFlip {
    fn evaluate(&mut self, clock: f64) {
        CardFlip::evaluate(self, clock);
    }

    fn is_active(&self) -> bool {
        !self.is_gone()
    }
}

// ============================================================================
// End of level
// ============================================================================

/// Entrance of the level-complete screen.
///
/// The title pops in with an overshoot while everything fades in; the
/// elapsed-time text stays hidden for 500 ms, then fades in while sliding
/// from `center_y` to `bottom_y`.
pub fn end_screen_timeline(center_y: f64, bottom_y: f64) -> Timeline {
    Timeline::new()
        .with_animation(Animation::new(0.0, 500.0, 0.0, 1.0, Easing::Linear).with_id(MAIN_FADING))
        .with_animation(
            Animation::new(0.0, 500.0, 5.0, 1.0, Easing::BackOut).with_id(COMPLETED_TEXT_SCALING),
        )
        .with_animation(
            Animation::new(0.0, 500.0, 0.0, 0.0, Easing::Linear).with_id(TIME_TEXT_FADING),
        )
        .with_animation(
            Animation::new(500.0, 750.0, 0.0, 1.0, Easing::SineOut).with_id(TIME_TEXT_FADING),
        )
        .with_animation(
            Animation::new(500.0, 750.0, center_y, bottom_y, Easing::SineOut)
                .with_id(TIME_TEXT_MOVE_Y),
        )
}

/// Endless slow spin for the glow behind the end screen
pub fn light_rotator() -> Animation {
    Animation::new(0.0, 20_000.0, 0.0, PI * 2.0, Easing::Linear).looped()
}

// ============================================================================
// Confetti
// ============================================================================

/// One confetti piece: falls, fades out, and spins over its own lifetime
#[derive(Clone, Debug)]
pub struct ParticleTrack {
    x: f64,
    scale: f64,
    movement: Animation,
    fading: Animation,
    rotation: Animation,
}

impl ParticleTrack {
    pub fn new(x: f64, scale: f64, movement: Animation, fading: Animation, rotation: Animation) -> Self {
        Self {
            x,
            scale,
            movement,
            fading,
            rotation,
        }
    }

    /// A piece somewhere in the top half of a `width` x `height` area
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, duration_ms: f64) -> Self {
        let end_time = (rng.gen::<f64>() * duration_ms).floor();
        let start_y = (rng.gen::<f64>() * height * 0.5).floor();
        let end_rotation = rng.gen::<f64>() * PI * 2.0 - PI;
        let scale = 0.3 + rng.gen::<f64>() * 0.85;
        let x = rng.gen::<f64>() * width;

        Self::new(
            x,
            scale,
            Animation::new(0.0, end_time, start_y, start_y + CONFETTI_DROP_PX, Easing::SineIn),
            Animation::new(0.0, end_time, 1.0, 0.0, Easing::Linear),
            Animation::new(0.0, end_time, 0.0, end_rotation, Easing::Linear),
        )
    }

    pub fn evaluate(&mut self, time: f64) {
        self.movement.evaluate(time);
        self.fading.evaluate(time);
        self.rotation.evaluate(time);
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.movement.current_value()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn opacity(&self) -> f64 {
        self.fading.current_value()
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f64 {
        self.rotation.current_value()
    }
}

/// A group of particle tracks started together.
///
/// Tracks are sampled with the time since [`start`](Self::start); the burst
/// goes dormant once that exceeds its duration.
#[derive(Clone, Debug)]
pub struct ParticleBurst {
    tracks: Vec<ParticleTrack>,
    duration_ms: f64,
    started_at: f64,
    current_time: f64,
    playing: bool,
}

impl ParticleBurst {
    pub fn new(tracks: Vec<ParticleTrack>, duration_ms: f64) -> Self {
        Self {
            tracks,
            duration_ms,
            started_at: 0.0,
            current_time: 0.0,
            playing: false,
        }
    }

    /// `count` random pieces spread over a `width` x `height` area
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        width: f64,
        height: f64,
        duration_ms: f64,
    ) -> Self {
        let tracks = (0..count)
            .map(|_| ParticleTrack::random(rng, width, height, duration_ms))
            .collect();
        Self::new(tracks, duration_ms)
    }

    pub fn start(&mut self, clock: f64) {
        self.playing = true;
        self.started_at = clock;
        self.current_time = 0.0;
    }

    pub fn evaluate(&mut self, clock: f64) {
        self.current_time = clock - self.started_at;
        if !self.playing {
            return;
        }
        // The final frame still updates the tracks
        if self.current_time > self.duration_ms {
            self.playing = false;
        }
        for track in &mut self.tracks {
            track.evaluate(self.current_time);
        }
    }

    pub fn tracks(&self) -> &[ParticleTrack] {
        &self.tracks
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Time since the burst started
    pub fn current_time(&self) -> f64 {
        self.current_time
    }
}

impl Animated for ParticleBurst {
    fn evaluate(&mut self, clock: f64) {
        ParticleBurst::evaluate(self, clock);
    }

    fn is_active(&self) -> bool {
        self.playing
    }
}
