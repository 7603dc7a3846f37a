//! Error types for palette loading, profile loading and custom colors.
//!
//! Color text itself never produces an error (see [`crate::codec`]); only
//! structural problems do.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a palette cannot be used for a full colorset.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Fewer than 8 non-blank lines.
    #[error("palette '{name}' has only {found} colors (need 8)")]
    TooFewColors { name: String, found: usize },

    /// The palette file could not be read.
    #[error("cannot read palette {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned when a derivation profile cannot be loaded.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to parse profile{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("invalid profile: {0}")]
    Invalid(String),

    #[error("cannot read profile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Error returned for a malformed `R,G,B` custom color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomColorError {
    #[error("expected 3 comma-separated values (R,G,B), got {found}")]
    Arity { found: usize },

    #[error("'{value}' is not an integer")]
    NotANumber { value: String },

    #[error("{value} is outside 0-255")]
    OutOfRange { value: i64 },
}
