//! Timeline definitions loaded from TOML
//!
//! ```toml
//! loop = false
//!
//! [[animation]]
//! id = "svx"
//! start = 0
//! end = 150
//! from = 0.0
//! to = 0.0
//!
//! [[animation]]
//! id = "svx"
//! start = 150
//! end = 300
//! from = 0.0
//! to = 1.0
//! easing = "SineOut"
//! ```
//!
//! Several named timelines can live in one file as `[timelines.<name>]`
//! tables, see [`TimelineSet`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{Animation, DEFAULT_ANIMATION_ID};
use crate::easing::Easing;
use crate::error::{FlipError, Result};
use crate::timeline::Timeline;

/// One animation window
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnimationConfig {
    #[serde(default = "default_id")]
    pub id: String,
    pub start: f64,
    pub end: f64,
    pub from: f64,
    pub to: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub looped: bool,
}

fn default_id() -> String {
    DEFAULT_ANIMATION_ID.to_string()
}

impl AnimationConfig {
    /// Build the animation, rejecting non-finite fields and windows that
    /// end before they start
    pub fn build(&self) -> Result<Animation> {
        let fields = [
            ("start", self.start),
            ("end", self.end),
            ("from", self.from),
            ("to", self.to),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FlipError::NonFinite {
                id: self.id.clone(),
                field,
                value,
            });
        }
        if self.end < self.start {
            return Err(FlipError::InvalidWindow {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(
            Animation::new(self.start, self.end, self.from, self.to, self.easing)
                .with_looped(self.looped)
                .with_id(self.id.clone()),
        )
    }
}

/// A timeline and its animations, in append order
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TimelineConfig {
    #[serde(default, rename = "loop")]
    pub looping: bool,
    #[serde(default, rename = "animation")]
    pub animations: Vec<AnimationConfig>,
}

impl TimelineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a single-timeline definition file
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml_str(&read(path)?)
    }

    /// Build a stopped timeline ready to [`play`](Timeline::play)
    pub fn to_timeline(&self) -> Result<Timeline> {
        let mut timeline = Timeline::new().with_loop(self.looping);
        for animation in &self.animations {
            timeline.append(animation.build()?);
        }
        debug!(
            animations = timeline.len(),
            end = timeline.latest_end_time(),
            "built timeline from config"
        );
        Ok(timeline)
    }
}

/// Named timelines sharing one file
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TimelineSet {
    #[serde(default)]
    pub timelines: BTreeMap<String, TimelineConfig>,
}

impl TimelineSet {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml_str(&read(path)?)
    }

    pub fn get(&self, name: &str) -> Option<&TimelineConfig> {
        self.timelines.get(name)
    }

    /// Build the timeline called `name`
    pub fn timeline(&self, name: &str) -> Result<Timeline> {
        self.get(name)
            .ok_or_else(|| FlipError::UnknownTimeline(name.to_string()))?
            .to_timeline()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.timelines.keys().map(String::as_str)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| FlipError::Io {
        path: path.to_path_buf(),
        source,
    })
}
