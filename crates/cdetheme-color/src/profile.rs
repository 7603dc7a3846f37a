//! Numeric constants that drive brightness classification and derivation.
//!
//! Every weight, factor and threshold used by the classifier and the
//! derivation engine lives in one immutable [`DerivationProfile`]. The
//! default, [`DerivationProfile::motif`], carries the values of the Motif
//! toolkit's color calculation; alternate profiles can be loaded from YAML.
//! Keys missing from a YAML profile keep their Motif value; a set of shade
//! factors is replaced as a whole:
//!
//! ```yaml
//! thresholds:
//!   dark: 25
//! medium_high: { select: 15, bottom_shadow: 40, top_shadow: 70 }
//! ```
//!
//! Factors are percentages (`15` means 15%). Thresholds are percentages of
//! the full 16-bit scale.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::MAX_CHANNEL;
use crate::error::ProfileError;

/// Per-channel weights of the luminosity term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LuminosityWeights {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Default for LuminosityWeights {
    fn default() -> Self {
        Self {
            red: 0.30,
            green: 0.59,
            blue: 0.11,
        }
    }
}

/// Weights (summing to 100) that blend the three brightness terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlendWeights {
    pub intensity: f64,
    /// Weight of the min/max midpoint term. Motif ships it at zero.
    pub light: f64,
    pub luminosity: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            intensity: 75.0,
            light: 0.0,
            luminosity: 25.0,
        }
    }
}

/// Bracket and foreground cut-offs, in percent of the 16-bit scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub dark: f64,
    pub light: f64,
    pub foreground: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            dark: 20.0,
            light: 93.0,
            foreground: 70.0,
        }
    }
}

/// Percent factors for the three derived shades of one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadeFactors {
    pub select: f64,
    pub bottom_shadow: f64,
    pub top_shadow: f64,
}

impl ShadeFactors {
    pub const fn new(select: f64, bottom_shadow: f64, top_shadow: f64) -> Self {
        Self {
            select,
            bottom_shadow,
            top_shadow,
        }
    }
}

/// The full set of derivation constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DerivationProfile {
    pub luminosity: LuminosityWeights,
    pub blend: BlendWeights,
    pub thresholds: Thresholds,
    pub dark: ShadeFactors,
    pub light: ShadeFactors,
    /// Medium-bracket factors at brightness 0.
    pub medium_low: ShadeFactors,
    /// Medium-bracket factors at full brightness.
    pub medium_high: ShadeFactors,
}

impl Default for DerivationProfile {
    fn default() -> Self {
        Self::motif()
    }
}

impl DerivationProfile {
    /// The constants of the Motif color calculation.
    pub fn motif() -> Self {
        Self {
            luminosity: LuminosityWeights::default(),
            blend: BlendWeights::default(),
            thresholds: Thresholds::default(),
            dark: ShadeFactors::new(15.0, 30.0, 50.0),
            light: ShadeFactors::new(15.0, 40.0, 20.0),
            medium_low: ShadeFactors::new(15.0, 60.0, 50.0),
            medium_high: ShadeFactors::new(15.0, 40.0, 60.0),
        }
    }

    /// Parses a profile from YAML and validates it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_yaml::from_str(yaml).map_err(|e| ProfileError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reads and parses a YAML profile file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|err| match err {
            ProfileError::Parse { message, .. } => ProfileError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Checks that thresholds are ordered percentages and blend weights sum to 100.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let t = &self.thresholds;
        for (name, value) in [
            ("dark", t.dark),
            ("light", t.light),
            ("foreground", t.foreground),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ProfileError::Invalid(format!(
                    "{name} threshold {value} is outside 0-100"
                )));
            }
        }
        if t.dark > t.light {
            return Err(ProfileError::Invalid(format!(
                "dark threshold {} is above light threshold {}",
                t.dark, t.light
            )));
        }

        let b = &self.blend;
        let total = b.intensity + b.light + b.luminosity;
        if (total - 100.0).abs() > 1e-9 {
            return Err(ProfileError::Invalid(format!(
                "blend weights must sum to 100, got {total}"
            )));
        }
        Ok(())
    }

    /// One percent of the 16-bit scale.
    fn percentile() -> f64 {
        f64::from(MAX_CHANNEL) / 100.0
    }

    /// Brightness below which a color is dark.
    pub fn dark_level(&self) -> f64 {
        self.thresholds.dark * Self::percentile()
    }

    /// Brightness above which a color is light.
    pub fn light_level(&self) -> f64 {
        self.thresholds.light * Self::percentile()
    }

    /// Brightness above which the foreground turns black.
    pub fn foreground_level(&self) -> f64 {
        self.thresholds.foreground * Self::percentile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motif_levels() {
        let profile = DerivationProfile::motif();
        assert_eq!(profile.dark_level(), 13107.0);
        assert_eq!(profile.light_level(), 60947.55);
        assert_eq!(profile.foreground_level(), 45874.5);
    }

    #[test]
    fn motif_profile_is_valid() {
        assert!(DerivationProfile::motif().validate().is_ok());
    }

    #[test]
    fn yaml_overrides_keep_other_defaults() {
        let profile = DerivationProfile::from_yaml(
            r#"
thresholds:
  dark: 25
medium_high:
  select: 15
  bottom_shadow: 40
  top_shadow: 70
"#,
        )
        .unwrap();
        assert_eq!(profile.thresholds.dark, 25.0);
        assert_eq!(profile.thresholds.light, 93.0);
        assert_eq!(profile.medium_high.top_shadow, 70.0);
        assert_eq!(profile.dark, DerivationProfile::motif().dark);
    }

    #[test]
    fn empty_yaml_is_motif() {
        let profile = DerivationProfile::from_yaml("{}").unwrap();
        assert_eq!(profile, DerivationProfile::motif());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = DerivationProfile::from_yaml("shininess: 3").unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let err = DerivationProfile::from_yaml("thresholds: { dark: 95, light: 90 }").unwrap_err();
        assert!(err.to_string().contains("above light threshold"));
    }

    #[test]
    fn blend_weights_must_sum_to_100() {
        let err = DerivationProfile::from_yaml("blend: { intensity: 80 }").unwrap_err();
        assert!(err.to_string().contains("sum to 100"));
    }

    #[test]
    fn from_file_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "thresholds: [").unwrap();
        let err = DerivationProfile::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }
}
