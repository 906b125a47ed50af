use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building animations from external input.
///
/// Per-frame evaluation never fails; these only surface at the
/// configuration boundary.
#[derive(Debug, Error)]
pub enum FlipError {
    #[error("unknown easing curve: {0:?}")]
    UnknownEasing(String),

    #[error("animation {id:?} ends before it starts ({start} > {end})")]
    InvalidWindow { id: String, start: f64, end: f64 },

    #[error("animation {id:?} has a non-finite {field}: {value}")]
    NonFinite {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("timeline {0:?} not found")]
    UnknownTimeline(String),

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FlipError>;
