//! Palette discovery across one or more directories.
//!
//! A palette is any `*.dp` file in a registered directory, named after its
//! file stem. Directories are searched in registration order:
//!
//! 1. Within a directory, files are taken in sorted order.
//! 2. When two directories provide the same name, the first registered
//!    directory wins and the later file is ignored.
//! 3. Lookup by name is exact first, then case-insensitive.
//!
//! ```rust,ignore
//! let registry = PaletteRegistry::from_dirs(["palettes", "/usr/share/cde/palettes"])?;
//! let palette = registry.load("Alpine")?;
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use cdetheme_color::{palette_name, Palette, PALETTE_EXTENSION};

use crate::error::RegistryError;

/// Index of palette names to their files.
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    dirs: Vec<PathBuf>,
    entries: BTreeMap<String, PathBuf>,
}

impl PaletteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from several directories, skipping missing ones.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NoDirectories`] if none of the directories exists,
    /// or any I/O error while listing one that does.
    pub fn from_dirs<I, P>(dirs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut registry = Self::new();
        for dir in dirs {
            match registry.add_dir(dir) {
                Ok(()) => {}
                Err(RegistryError::DirectoryNotFound { path }) => {
                    tracing::warn!(path = %path.display(), "palettes directory not found, skipping");
                }
                Err(err) => return Err(err),
            }
        }
        if registry.dirs.is_empty() {
            return Err(RegistryError::NoDirectories);
        }
        Ok(registry)
    }

    /// Registers a directory and indexes its palette files.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> Result<(), RegistryError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(RegistryError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }

        let io_err = |source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(path).map_err(io_err)? {
            let file = entry.map_err(io_err)?.path();
            let is_palette = file
                .extension()
                .is_some_and(|ext| ext == PALETTE_EXTENSION);
            if is_palette && file.is_file() {
                files.push(file);
            }
        }
        files.sort();

        let mut added = 0;
        for file in files {
            let name = palette_name(&file);
            if let Some(existing) = self.entries.get(&name) {
                tracing::debug!(
                    palette = %name,
                    kept = %existing.display(),
                    ignored = %file.display(),
                    "palette name already registered"
                );
                continue;
            }
            self.entries.insert(name, file);
            added += 1;
        }

        tracing::debug!(dir = %path.display(), added, "indexed palettes directory");
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    /// Registered directories, in order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Palette names in byte order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Palette names sorted case-insensitively, for listings.
    pub fn names_for_display(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }

    /// Names and files in byte order of the name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// Finds a palette by exact name, falling back to a case-insensitive match.
    pub fn resolve(&self, name: &str) -> Result<(&str, &Path), RegistryError> {
        if let Some((key, path)) = self.entries.get_key_value(name) {
            return Ok((key.as_str(), path.as_path()));
        }
        let lower = name.to_lowercase();
        self.iter()
            .find(|(candidate, _)| candidate.to_lowercase() == lower)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Resolves and reads a palette.
    pub fn load(&self, name: &str) -> Result<Palette, RegistryError> {
        let (_, path) = self.resolve(name)?;
        Ok(Palette::from_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EIGHT: &str = "#000080\n#c0c0c0\n#404040\n#ffffff\n#808080\n#c0c0c0\n#202020\n#606060\n";

    fn dir_with(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn indexes_only_palette_files() {
        let dir = dir_with(&[
            ("Alpine.dp", EIGHT),
            ("Beach.dp", EIGHT),
            ("README.txt", "x"),
            ("notes.dp.bak", "x"),
        ]);
        let registry = PaletteRegistry::from_dirs([dir.path()]).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Alpine", "Beach"]);
    }

    #[test]
    fn first_directory_wins() {
        let first = dir_with(&[("Alpine.dp", EIGHT)]);
        let second = dir_with(&[("Alpine.dp", EIGHT), ("Crimson.dp", EIGHT)]);
        let registry = PaletteRegistry::from_dirs([first.path(), second.path()]).unwrap();
        assert_eq!(registry.len(), 2);
        let (_, path) = registry.resolve("Alpine").unwrap();
        assert!(path.starts_with(first.path()));
    }

    #[test]
    fn missing_directories_are_skipped() {
        let dir = dir_with(&[("Alpine.dp", EIGHT)]);
        let registry =
            PaletteRegistry::from_dirs([Path::new("/nonexistent/palettes"), dir.path()]).unwrap();
        assert_eq!(registry.dirs().len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn all_directories_missing_is_an_error() {
        let err = PaletteRegistry::from_dirs(["/nonexistent/a", "/nonexistent/b"]).unwrap_err();
        assert!(matches!(err, RegistryError::NoDirectories));
    }

    #[test]
    fn resolve_falls_back_to_case_insensitive() {
        let dir = dir_with(&[("SouthWest.dp", EIGHT)]);
        let registry = PaletteRegistry::from_dirs([dir.path()]).unwrap();
        assert_eq!(registry.resolve("southwest").unwrap().0, "SouthWest");
        assert!(matches!(
            registry.resolve("Nowhere"),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn display_order_ignores_case() {
        let dir = dir_with(&[("beach.dp", EIGHT), ("Alpine.dp", EIGHT), ("Crimson.dp", EIGHT)]);
        let registry = PaletteRegistry::from_dirs([dir.path()]).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Alpine", "Crimson", "beach"]);
        assert_eq!(registry.names_for_display(), ["Alpine", "beach", "Crimson"]);
    }

    #[test]
    fn load_reports_short_palettes() {
        let dir = dir_with(&[("Short.dp", "#000000\n#ffffff\n")]);
        let registry = PaletteRegistry::from_dirs([dir.path()]).unwrap();
        let err = registry.load("Short").unwrap_err();
        assert!(matches!(err, RegistryError::Palette(_)));
    }
}
