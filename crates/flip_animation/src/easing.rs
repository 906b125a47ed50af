//! Easing functions for animations
//!
//! Curves follow the reference shapes from <https://easings.net/>. Each one
//! maps normalized progress in `[0, 1]` to shaped progress; the back curves
//! overshoot that range in the interior.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::FlipError;

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    SineIn,
    SineOut,
    SineInOut,
    /// Dips below 0 before accelerating
    BackIn,
    /// Overshoots past 1 before settling
    BackOut,
    ExpoOut,
    QuartOut,
    CubicIn,
    BounceIn,
    BounceOut,
}

impl Easing {
    /// Every curve in the catalog, in declaration order
    pub const ALL: [Easing; 11] = [
        Easing::Linear,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::ExpoOut,
        Easing::QuartOut,
        Easing::CubicIn,
        Easing::BounceIn,
        Easing::BounceOut,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Easing::Linear => x,
            Easing::SineIn => 1.0 - (x * PI / 2.0).cos(),
            Easing::SineOut => (x * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * x).cos() - 1.0) / 2.0,
            Easing::BackIn => BACK_C3 * x * x * x - BACK_C1 * x * x,
            Easing::BackOut => 1.0 + BACK_C3 * (x - 1.0).powi(3) + BACK_C1 * (x - 1.0).powi(2),
            Easing::ExpoOut => {
                if x == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * x)
                }
            }
            Easing::QuartOut => 1.0 - (1.0 - x).powi(4),
            Easing::CubicIn => x * x * x,
            Easing::BounceIn => 1.0 - bounce_out(1.0 - x),
            Easing::BounceOut => bounce_out(x),
        }
    }

    /// Registry name of the curve, as used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::SineIn => "SineIn",
            Easing::SineOut => "SineOut",
            Easing::SineInOut => "SineInOut",
            Easing::BackIn => "BackIn",
            Easing::BackOut => "BackOut",
            Easing::ExpoOut => "ExpoOut",
            Easing::QuartOut => "QuartOut",
            Easing::CubicIn => "CubicIn",
            Easing::BounceIn => "BounceIn",
            Easing::BounceOut => "BounceOut",
        }
    }

    /// Snake-case alias accepted by [`FromStr`]
    fn snake_name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::SineIn => "sine_in",
            Easing::SineOut => "sine_out",
            Easing::SineInOut => "sine_in_out",
            Easing::BackIn => "back_in",
            Easing::BackOut => "back_out",
            Easing::ExpoOut => "expo_out",
            Easing::QuartOut => "quart_out",
            Easing::CubicIn => "cubic_in",
            Easing::BounceIn => "bounce_in",
            Easing::BounceOut => "bounce_out",
        }
    }
}

/// Four-segment piecewise bounce, settling at 1.
fn bounce_out(x: f64) -> f64 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let x = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let x = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.984375
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = FlipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|easing| easing.name() == s || easing.snake_name() == s)
            .ok_or_else(|| FlipError::UnknownEasing(s.to_string()))
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
