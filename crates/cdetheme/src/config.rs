//! Layout and derivation profile from files and flags.
//!
//! The layout starts from `--config` (or the defaults) and the
//! `--themes-dir`, `--palettes-dir` and `--base` flags override its fields.

use anyhow::Result;
use cdetheme_bundle::ThemeLayout;
use cdetheme_color::DerivationProfile;

use crate::cli::GlobalArgs;

pub fn resolve_layout(args: &GlobalArgs) -> Result<ThemeLayout> {
    let mut layout = match &args.config {
        Some(path) => ThemeLayout::from_file(path)?,
        None => ThemeLayout::default(),
    };

    if let Some(dir) = &args.themes_dir {
        layout.themes_dir = dir.clone();
    }
    if !args.palettes_dirs.is_empty() {
        layout.palette_dirs = args.palettes_dirs.clone();
    }
    if let Some(base) = &args.base {
        layout.base_theme = base.clone();
    }

    layout.validate()?;
    tracing::debug!(
        themes_dir = %layout.themes_dir.display(),
        base = %layout.base_theme,
        "resolved layout"
    );
    Ok(layout)
}

pub fn resolve_profile(args: &GlobalArgs) -> Result<DerivationProfile> {
    match &args.profile {
        Some(path) => Ok(DerivationProfile::from_file(path)?),
        None => Ok(DerivationProfile::motif()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_config() {
        let layout = resolve_layout(&GlobalArgs::default()).unwrap();
        assert_eq!(layout, ThemeLayout::default());
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("layout.yaml");
        fs::write(
            &config,
            "themes_dir: /srv/themes\nbase_theme: Motif\npalette_dirs: [one, two]\n",
        )
        .unwrap();

        let args = GlobalArgs {
            config: Some(config),
            base: Some("CDE-Base".to_string()),
            ..GlobalArgs::default()
        };
        let layout = resolve_layout(&args).unwrap();
        assert_eq!(layout.themes_dir, PathBuf::from("/srv/themes"));
        assert_eq!(layout.base_theme, "CDE-Base");
        assert_eq!(
            layout.palette_dirs,
            [PathBuf::from("one"), PathBuf::from("two")]
        );

        let args = GlobalArgs {
            palettes_dirs: vec![PathBuf::from("three")],
            ..args
        };
        assert_eq!(
            resolve_layout(&args).unwrap().palette_dirs,
            [PathBuf::from("three")]
        );
    }

    #[test]
    fn invalid_base_flag_is_rejected() {
        let args = GlobalArgs {
            base: Some("../elsewhere".to_string()),
            ..GlobalArgs::default()
        };
        assert!(resolve_layout(&args).is_err());
    }

    #[test]
    fn profile_file_is_validated() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile.yaml");
        fs::write(&path, "thresholds: { dark: 80, light: 20 }\n").unwrap();
        let args = GlobalArgs {
            profile: Some(path),
            ..GlobalArgs::default()
        };
        assert!(resolve_profile(&args).is_err());
        assert_eq!(
            resolve_profile(&GlobalArgs::default()).unwrap(),
            DerivationProfile::motif()
        );
    }
}
