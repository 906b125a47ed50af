//! Flip Animation Engine
//!
//! Deterministic, clock-driven value interpolation for the card game's visuals.
//!
//! # Features
//!
//! - **Easing**: A fixed catalog of named curves
//! - **Animations**: Values sampled from an absolute clock, with optional looping
//! - **Timelines**: Named animations sharing a play/stop lifecycle, looked up by id
//! - **Scheduler**: Owns many animations and ticks them once per frame
//!
//! # Example
//!
//! ```rust
//! use flip_animation::{Animation, Easing, Timeline};
//!
//! let mut timeline = Timeline::new()
//!     .with_animation(Animation::new(0.0, 150.0, 0.0, 0.0, Easing::Linear).with_id("svx"))
//!     .with_animation(Animation::new(150.0, 300.0, 0.0, 1.0, Easing::Linear).with_id("svx"));
//!
//! timeline.play_at(1000.0);
//! timeline.evaluate(1225.0);
//! assert_eq!(timeline.value_of("svx"), Some(0.5));
//!
//! // Completed timelines have no value; callers fall back to a default
//! timeline.evaluate(1400.0);
//! assert_eq!(timeline.value_or("svx", 1.0), 1.0);
//! ```

pub mod animated;
pub mod animation;
pub mod config;
pub mod easing;
pub mod error;
pub mod presets;
pub mod scheduler;
pub mod timeline;

pub use animated::Animated;
pub use animation::{Animation, AnimationPhase, DEFAULT_ANIMATION_ID};
pub use config::{AnimationConfig, TimelineConfig, TimelineSet};
pub use easing::Easing;
pub use error::{FlipError, Result};
pub use presets::{CardFlip, ParticleBurst, ParticleTrack};
pub use scheduler::{AnimationId, AnimationScheduler, TimelineId};
pub use timeline::Timeline;
