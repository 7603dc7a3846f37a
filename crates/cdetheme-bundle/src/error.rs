//! Error types for palette discovery, layout loading and bundle writing.

use std::path::PathBuf;

use cdetheme_color::PaletteError;
use cdetheme_render::RenderError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BundleError>;

/// Errors from finding and loading palettes.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("palettes directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("no palettes directory could be opened")]
    NoDirectories,

    #[error("cannot list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("palette '{name}' not found")]
    NotFound { name: String },

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Errors from loading a [`crate::ThemeLayout`].
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to parse layout{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("invalid layout: {0}")]
    Invalid(String),

    #[error("cannot read layout {}: {source}", .path.display())]
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

/// Errors from writing theme bundles.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("base theme not found at {}", .path.display())]
    MissingBase { path: PathBuf },

    #[error("theme directory not found: {}", .path.display())]
    MissingTarget { path: PathBuf },

    #[error("bundle '{name}' would replace the base theme")]
    WouldReplaceBase { name: String },

    #[error("bundle name '{name}' is not a single directory name")]
    InvalidBundleName { name: String },

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl BundleError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| BundleError::Io {
            action,
            path,
            source,
        }
    }
}
