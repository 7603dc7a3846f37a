//! Derivation of foreground, select and shadow colors from a background.
//!
//! Each bracket has its own rule for moving a channel toward white (`+`) or
//! toward black (`-`):
//!
//! | Bracket | select | bottom shadow | top shadow |
//! |---------|--------|---------------|------------|
//! | Dark    | `+15%` | `+30%` | `+50%` |
//! | Light   | `-15%` | `-40%` | `-20%` |
//! | Medium  | `-fSel%` | `-fBS%` | `+fTS%` |
//!
//! "Toward white by p%" is `bg + p·(65535 − bg)/100`; "toward black by p%" is
//! `bg − bg·p/100`. Medium factors are interpolated between the profile's
//! low and high factors by brightness. The select interpolation runs even
//! though Motif's low and high select factors are equal.
//!
//! Results are left unclamped; [`crate::codec::channels_to_hex`] clamps.

use crate::brightness::{Bracket, BrightnessClassifier, Classification};
use crate::codec::{Rgb16, MAX_CHANNEL};
use crate::profile::{DerivationProfile, ShadeFactors};

/// The four colors derived from one background, as raw 16-bit channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedColors {
    pub foreground: [f64; 3],
    pub select: [f64; 3],
    pub bottom_shadow: [f64; 3],
    pub top_shadow: [f64; 3],
}

/// Result of deriving from a background: its classification plus the colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivation {
    pub classification: Classification,
    pub colors: DerivedColors,
}

/// Applies the bracket rules of a [`DerivationProfile`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorDerivationEngine {
    classifier: BrightnessClassifier,
}

impl ColorDerivationEngine {
    pub fn new(profile: DerivationProfile) -> Self {
        Self {
            classifier: BrightnessClassifier::new(profile),
        }
    }

    pub fn classifier(&self) -> &BrightnessClassifier {
        &self.classifier
    }

    /// Classifies `bg` and derives its role colors.
    pub fn derive(&self, bg: Rgb16) -> Derivation {
        let classification = self.classifier.classify(bg);
        Derivation {
            classification,
            colors: self.derive_in(bg, classification.bracket),
        }
    }

    /// Derives role colors for `bg` using the rule of the given bracket.
    pub fn derive_in(&self, bg: Rgb16, bracket: Bracket) -> DerivedColors {
        let brightness = self.classifier.brightness(bg);
        let channels = bg.to_f64();
        let foreground = self.classifier.foreground(brightness);
        let profile = self.classifier.profile();

        let (select, bottom_shadow, top_shadow) = match bracket {
            Bracket::Dark => {
                let f = &profile.dark;
                (
                    channels.map(|c| lighten(c, f.select)),
                    channels.map(|c| lighten(c, f.bottom_shadow)),
                    channels.map(|c| lighten(c, f.top_shadow)),
                )
            }
            Bracket::Light => {
                let f = &profile.light;
                (
                    channels.map(|c| darken(c, f.select)),
                    channels.map(|c| darken(c, f.bottom_shadow)),
                    channels.map(|c| darken(c, f.top_shadow)),
                )
            }
            Bracket::Medium => {
                let f = medium_factors(profile, brightness);
                (
                    channels.map(|c| darken(c, f.select)),
                    channels.map(|c| darken(c, f.bottom_shadow)),
                    channels.map(|c| lighten(c, f.top_shadow)),
                )
            }
        };

        DerivedColors {
            foreground,
            select,
            bottom_shadow,
            top_shadow,
        }
    }
}

/// Moves a channel `percent`% of the way toward full scale.
fn lighten(channel: f64, percent: f64) -> f64 {
    channel + (percent * (f64::from(MAX_CHANNEL) - channel)) / 100.0
}

/// Moves a channel `percent`% of the way toward zero.
fn darken(channel: f64, percent: f64) -> f64 {
    channel - (channel * percent) / 100.0
}

/// Medium-bracket factors for a given brightness.
pub fn medium_factors(profile: &DerivationProfile, brightness: f64) -> ShadeFactors {
    let lo = &profile.medium_low;
    let hi = &profile.medium_high;
    let scale = f64::from(MAX_CHANNEL);
    let blend = |lo: f64, hi: f64| lo + (brightness * (hi - lo)) / scale;

    ShadeFactors {
        select: blend(lo.select, hi.select),
        bottom_shadow: blend(lo.bottom_shadow, hi.bottom_shadow),
        top_shadow: blend(lo.top_shadow, hi.top_shadow),
    }
}
