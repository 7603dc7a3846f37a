//! Error types for rendering.
//!
//! Stylesheets are plain string assembly and cannot fail. Only the templated
//! manifest and the JSON preview go through fallible machinery, and their
//! errors are wrapped here so callers never see minijinja or serde types.

use std::fmt;

/// Error type for manifest and preview rendering.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error or evaluation failure.
    TemplateError(String),

    /// Colorset could not be serialized.
    SerializationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::TemplateError(err.to_string())
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}
