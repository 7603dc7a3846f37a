//! Writing colorsets to disk, either as a fresh bundle or into a theme.
//!
//! A bundle is rebuilt from scratch on every write: the old directory is
//! removed, then the manifest, the asset links and the copied dialect
//! directories are recreated from the base theme. Only the color file inside
//! each copied dialect directory differs between bundles.
//!
//! The replace is not atomic. An interrupted write can leave a partial
//! bundle behind; the next write replaces it.

use std::fs;
use std::path::{Path, PathBuf};

use cdetheme_color::{Colorset, ColorsetBuilder, Palette};
use cdetheme_render::{manifest, Dialect, MANIFEST_FILE};

use crate::error::{BundleError, Result};
use crate::fsutil::{copy_dir_recursive, link_relative, remove_existing};
use crate::layout::{is_plain_name, AssetPolicy, ThemeLayout};

/// What a bundle write produced.
#[derive(Debug, Clone)]
pub struct ThemeBundle {
    pub name: String,
    pub dir: PathBuf,
    pub colorset: Colorset,
    /// Color files written, one per dialect present in the base theme.
    pub color_files: Vec<PathBuf>,
    /// Symlinks created for shared assets.
    pub links: Vec<PathBuf>,
}

/// Writes colorsets according to a [`ThemeLayout`].
#[derive(Debug, Clone, Default)]
pub struct BundleWriter {
    layout: ThemeLayout,
    builder: ColorsetBuilder,
}

impl BundleWriter {
    pub fn new(layout: ThemeLayout, builder: ColorsetBuilder) -> Self {
        Self { layout, builder }
    }

    pub fn layout(&self) -> &ThemeLayout {
        &self.layout
    }

    pub fn builder(&self) -> &ColorsetBuilder {
        &self.builder
    }

    /// Fails unless the base theme directory exists.
    pub fn check_base(&self) -> Result<PathBuf> {
        let base = self.layout.base_dir();
        if base.is_dir() {
            Ok(base)
        } else {
            Err(BundleError::MissingBase { path: base })
        }
    }

    /// Replaces the bundle for `palette` with a freshly generated one.
    pub fn write_bundle(&self, palette: &Palette) -> Result<ThemeBundle> {
        let base = self.check_base()?;
        let name = self.layout.bundle_name(palette.name());
        if !is_plain_name(&name) {
            return Err(BundleError::InvalidBundleName { name });
        }
        if name == self.layout.base_theme {
            return Err(BundleError::WouldReplaceBase { name });
        }

        let colorset = self.builder.build(palette);
        let dir = self.layout.bundle_dir(palette.name());

        if remove_existing(&dir).map_err(BundleError::io("remove", &dir))? {
            tracing::debug!(bundle = %dir.display(), "removed previous bundle");
        }
        fs::create_dir_all(&dir).map_err(BundleError::io("create", &dir))?;

        let manifest_path = dir.join(MANIFEST_FILE);
        fs::write(&manifest_path, manifest::render(palette.name())?)
            .map_err(BundleError::io("write", &manifest_path))?;

        let mut links = Vec::new();
        for asset in self.layout.assets_with(AssetPolicy::Link) {
            let source = base.join(&asset.name);
            if !source.exists() {
                continue;
            }
            let link = dir.join(&asset.name);
            link_relative(&source, &link).map_err(BundleError::io("link", &link))?;
            links.push(link);
        }

        let mut color_files = Vec::new();
        for asset in self.layout.assets_with(AssetPolicy::Copy) {
            let source = base.join(&asset.name);
            if !source.is_dir() {
                continue;
            }
            let target = dir.join(&asset.name);
            copy_dir_recursive(&source, &target).map_err(BundleError::io("copy", &target))?;
            if let Some(dialect) = Dialect::from_dir_name(&asset.name) {
                color_files.push(write_color_file(&target, dialect, &colorset)?);
            }
        }

        tracing::info!(
            bundle = %name,
            links = links.len(),
            color_files = color_files.len(),
            "wrote theme bundle"
        );

        Ok(ThemeBundle {
            name,
            dir,
            colorset,
            color_files,
            links,
        })
    }

    /// Renders every dialect into an existing theme directory.
    ///
    /// Only dialects whose directory exists under `target` are written.
    /// Returns the files written.
    pub fn apply_in_place(&self, target: &Path, colorset: &Colorset) -> Result<Vec<PathBuf>> {
        if !target.is_dir() {
            return Err(BundleError::MissingTarget {
                path: target.to_path_buf(),
            });
        }

        let mut written = Vec::new();
        for dialect in Dialect::ALL {
            let dir = target.join(dialect.dir_name());
            if dir.is_dir() {
                written.push(write_color_file(&dir, dialect, colorset)?);
            } else {
                tracing::debug!(dialect = %dialect, "no {} directory, skipping", dir.display());
            }
        }
        Ok(written)
    }
}

fn write_color_file(dir: &Path, dialect: Dialect, colorset: &Colorset) -> Result<PathBuf> {
    let path = dir.join(dialect.file_name());
    fs::write(&path, dialect.render(colorset)).map_err(BundleError::io("write", &path))?;
    Ok(path)
}
