//! Brightness scoring and bracket classification.
//!
//! Motif scores a color with a blend of three terms computed from the 16-bit
//! channels:
//!
//! ```text
//! intensity  = (r + g + b) / 3
//! luminosity = trunc(0.30 r + 0.59 g + 0.11 b)
//! light      = (min + max) / 2
//! brightness = (75 intensity + 0 light + 25 luminosity) / 100
//! ```
//!
//! The truncation of `luminosity` moves colors across bracket boundaries, so
//! it is reproduced exactly. The `light` term carries zero weight in the Motif
//! profile but is still computed; a profile may give it weight.
//!
//! The score then selects a [`Bracket`] and, independently, the foreground:
//!
//! | Score | Result |
//! |-------|--------|
//! | `< 20%` | [`Bracket::Dark`] |
//! | `> 93%` | [`Bracket::Light`] |
//! | otherwise | [`Bracket::Medium`] |
//! | `> 70%` | black foreground, else white |

use std::fmt;

use serde::Serialize;

use crate::codec::{Rgb16, MAX_CHANNEL};
use crate::profile::DerivationProfile;

/// Brightness bracket; selects which derivation branch applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bracket {
    Dark,
    Medium,
    Light,
}

impl Bracket {
    pub fn as_str(self) -> &'static str {
        match self {
            Bracket::Dark => "dark",
            Bracket::Medium => "medium",
            Bracket::Light => "light",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and bracket of one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub brightness: f64,
    pub bracket: Bracket,
}

/// Scores and classifies colors according to a [`DerivationProfile`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrightnessClassifier {
    profile: DerivationProfile,
}

impl BrightnessClassifier {
    pub fn new(profile: DerivationProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &DerivationProfile {
        &self.profile
    }

    /// Computes the brightness score of a color, on the 0–65535 scale.
    pub fn brightness(&self, rgb: Rgb16) -> f64 {
        let [red, green, blue] = rgb.to_f64();
        let weights = &self.profile.luminosity;
        let blend = &self.profile.blend;

        let intensity = (red + green + blue) / 3.0;
        let luminosity = (weights.red * red + weights.green * green + weights.blue * blue).trunc();
        let light = (f64::from(rgb.min_channel()) + f64::from(rgb.max_channel())) / 2.0;

        ((intensity * blend.intensity) + (light * blend.light) + (luminosity * blend.luminosity))
            / 100.0
    }

    /// Maps a brightness score to its bracket.
    pub fn bracket(&self, brightness: f64) -> Bracket {
        if brightness < self.profile.dark_level() {
            Bracket::Dark
        } else if brightness > self.profile.light_level() {
            Bracket::Light
        } else {
            Bracket::Medium
        }
    }

    pub fn classify(&self, rgb: Rgb16) -> Classification {
        let brightness = self.brightness(rgb);
        Classification {
            brightness,
            bracket: self.bracket(brightness),
        }
    }

    /// Foreground for a background of the given brightness: black on bright
    /// backgrounds, white otherwise.
    pub fn foreground(&self, brightness: f64) -> [f64; 3] {
        if brightness > self.profile.foreground_level() {
            [0.0; 3]
        } else {
            [f64::from(MAX_CHANNEL); 3]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classifier() -> BrightnessClassifier {
        BrightnessClassifier::default()
    }

    fn gray(level: u16) -> Rgb16 {
        Rgb16(level, level, level)
    }

    #[test]
    fn gray_brightness_is_its_level() {
        assert_eq!(classifier().brightness(gray(0x8080)), 32896.0);
        assert_eq!(classifier().brightness(gray(0)), 0.0);
    }

    #[test]
    fn luminosity_is_truncated() {
        // 0.30 * 0 + 0.59 * 0 + 0.11 * 32896 = 3618.56 -> 3618
        // intensity = 10965.333..., score = (822400 + 90450) / 100
        let score = classifier().brightness(Rgb16(0, 0, 0x8080));
        assert_eq!(score, 9128.5);
    }

    #[test]
    fn light_term_counts_when_weighted() {
        let mut profile = DerivationProfile::motif();
        profile.blend.intensity = 50.0;
        profile.blend.light = 25.0;
        let weighted = BrightnessClassifier::new(profile);
        let rgb = Rgb16(0, 0, 40000);
        assert_ne!(weighted.brightness(rgb), classifier().brightness(rgb));
    }

    #[test]
    fn brackets_at_reference_grays() {
        assert_eq!(classifier().classify(gray(0x2020)).bracket, Bracket::Dark);
        assert_eq!(classifier().classify(gray(0x8080)).bracket, Bracket::Medium);
        assert_eq!(classifier().classify(gray(0xffff)).bracket, Bracket::Light);
    }

    // =====================================================================
    // Exact threshold boundaries
    // =====================================================================

    #[test]
    fn dark_boundary_is_medium() {
        let c = classifier();
        let level = c.profile().dark_level();
        assert_eq!(c.bracket(level), Bracket::Medium);
        assert_eq!(c.bracket(level - 0.001), Bracket::Dark);
    }

    #[test]
    fn light_boundary_is_medium() {
        let c = classifier();
        let level = c.profile().light_level();
        assert_eq!(c.bracket(level), Bracket::Medium);
        assert_eq!(c.bracket(level + 0.001), Bracket::Light);
    }

    #[test]
    fn foreground_boundary_is_white() {
        let c = classifier();
        let level = c.profile().foreground_level();
        assert_eq!(c.foreground(level), [65535.0; 3]);
        assert_eq!(c.foreground(level + 0.001), [0.0; 3]);
    }

    #[test]
    fn gray_at_exact_dark_level_is_medium() {
        // 13107 = 20% of 65535 exactly
        let rgb = gray(13107);
        assert_eq!(classifier().brightness(rgb), 13107.0);
        assert_eq!(classifier().classify(rgb).bracket, Bracket::Medium);
        assert_eq!(classifier().classify(gray(13106)).bracket, Bracket::Dark);
    }

    #[test]
    fn grays_around_foreground_level() {
        // 70% of 65535 is 45874.5
        let c = classifier();
        assert_eq!(c.foreground(c.brightness(gray(45874))), [65535.0; 3]);
        assert_eq!(c.foreground(c.brightness(gray(45875))), [0.0; 3]);
    }

    #[test]
    fn grays_around_light_level() {
        // 93% of 65535 is 60947.55; gray 60947 scores 60946.75 after truncation
        let c = classifier();
        assert_eq!(c.brightness(gray(60947)), 60946.75);
        assert_eq!(c.classify(gray(60947)).bracket, Bracket::Medium);
        assert_eq!(c.classify(gray(60948)).bracket, Bracket::Light);
    }

    #[test]
    fn mid_gray_foreground_is_white() {
        let c = classifier();
        let score = c.brightness(gray(0x8080));
        assert_eq!(c.foreground(score), [65535.0; 3]);
    }

    proptest! {
        #[test]
        fn brightness_stays_on_scale(r: u16, g: u16, b: u16) {
            let score = classifier().brightness(Rgb16(r, g, b));
            prop_assert!((0.0..=65535.0).contains(&score));
        }

        #[test]
        fn brackets_partition_scores(r: u16, g: u16, b: u16) {
            let c = classifier();
            let score = c.brightness(Rgb16(r, g, b));
            let matches = [
                score < c.profile().dark_level(),
                score > c.profile().light_level(),
                score >= c.profile().dark_level() && score <= c.profile().light_level(),
            ];
            prop_assert_eq!(matches.iter().filter(|m| **m).count(), 1);
            let expected = if matches[0] {
                Bracket::Dark
            } else if matches[1] {
                Bracket::Light
            } else {
                Bracket::Medium
            };
            prop_assert_eq!(c.bracket(score), expected);
        }

        #[test]
        fn brightness_is_deterministic(r: u16, g: u16, b: u16) {
            let rgb = Rgb16(r, g, b);
            prop_assert_eq!(classifier().brightness(rgb), classifier().brightness(rgb));
        }
    }
}
