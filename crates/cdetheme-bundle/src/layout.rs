//! Where themes live and which base-theme directories a bundle shares.
//!
//! Generated bundles are siblings of the base theme inside the themes
//! directory. Each directory of the base theme is either shared or owned:
//!
//! | Policy | In the bundle | Owner |
//! |--------|---------------|-------|
//! | [`AssetPolicy::Link`] | relative symlink `../<base>/<dir>` | base theme |
//! | [`AssetPolicy::Copy`] | recursive copy, color file replaced | the bundle |
//!
//! The default layout matches a stock install; a YAML file can override any
//! field:
//!
//! ```yaml
//! themes_dir: /home/me/.themes
//! base_theme: CDE-Theme
//! palette_dirs: [palettes, /usr/dt/palettes]
//! assets:
//!   - { name: xfwm4, policy: link }
//!   - { name: gtk-3.0, policy: copy }
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// How a base-theme directory appears in generated bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetPolicy {
    /// Shared and owned by the base theme; referenced through a symlink.
    Link,
    /// Copied into and owned by each bundle.
    Copy,
}

/// One directory of the base theme and its policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    pub name: String,
    pub policy: AssetPolicy,
}

impl AssetEntry {
    pub fn new(name: impl Into<String>, policy: AssetPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }
}

fn default_assets() -> Vec<AssetEntry> {
    vec![
        AssetEntry::new("xfwm4", AssetPolicy::Link),
        AssetEntry::new("img", AssetPolicy::Link),
        AssetEntry::new("img2", AssetPolicy::Link),
        AssetEntry::new("gtk-2.0", AssetPolicy::Copy),
        AssetEntry::new("gtk-3.0", AssetPolicy::Copy),
        AssetEntry::new("gtk-4.0", AssetPolicy::Copy),
    ]
}

/// Filesystem layout of the themes directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeLayout {
    /// Directory holding the base theme and every generated bundle.
    pub themes_dir: PathBuf,
    /// Name of the base theme directory.
    pub base_theme: String,
    /// Prepended to a palette name to form its bundle name.
    pub bundle_prefix: String,
    /// Palette directories, highest priority first.
    pub palette_dirs: Vec<PathBuf>,
    pub assets: Vec<AssetEntry>,
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from(".themes"),
            base_theme: "CDE-Theme".to_string(),
            bundle_prefix: "CDE-".to_string(),
            palette_dirs: vec![PathBuf::from("palettes")],
            assets: default_assets(),
        }
    }
}

impl ThemeLayout {
    /// Parses a layout from YAML and validates it.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_yaml::from_str(yaml).map_err(|e| LayoutError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reads and parses a YAML layout file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|err| match err {
            LayoutError::Parse { message, .. } => LayoutError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Checks that names are single path components and assets are unique.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !is_plain_name(&self.base_theme) {
            return Err(LayoutError::Invalid(format!(
                "base theme '{}' must be a single directory name",
                self.base_theme
            )));
        }
        if self.bundle_prefix.contains(&['/', '\\'][..]) {
            return Err(LayoutError::Invalid(format!(
                "bundle prefix '{}' must not contain path separators",
                self.bundle_prefix
            )));
        }
        for (i, asset) in self.assets.iter().enumerate() {
            if !is_plain_name(&asset.name) {
                return Err(LayoutError::Invalid(format!(
                    "asset '{}' must be a single directory name",
                    asset.name
                )));
            }
            if self.assets[..i].iter().any(|a| a.name == asset.name) {
                return Err(LayoutError::Invalid(format!(
                    "asset '{}' is listed twice",
                    asset.name
                )));
            }
        }
        Ok(())
    }

    /// Path of the base theme.
    pub fn base_dir(&self) -> PathBuf {
        self.themes_dir.join(&self.base_theme)
    }

    /// Bundle directory name for a palette.
    pub fn bundle_name(&self, palette: &str) -> String {
        format!("{}{}", self.bundle_prefix, palette)
    }

    /// Bundle directory path for a palette.
    pub fn bundle_dir(&self, palette: &str) -> PathBuf {
        self.themes_dir.join(self.bundle_name(palette))
    }

    /// Assets with the given policy, in table order.
    pub fn assets_with(&self, policy: AssetPolicy) -> impl Iterator<Item = &AssetEntry> {
        self.assets.iter().filter(move |a| a.policy == policy)
    }
}

/// True when `name` is exactly one normal path component.
pub(crate) fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
