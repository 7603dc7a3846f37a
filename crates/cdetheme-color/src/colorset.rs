//! Building a full colorset from a palette.
//!
//! For every slot the builder widens the palette color to 16 bits, classifies
//! it, derives the four role colors and narrows all five back to `#rrggbb`.
//! The background keeps the palette's own text (and letter case); the derived
//! colors are always lower case.
//!
//! ```rust
//! use cdetheme_color::{ColorsetBuilder, Palette, Slot};
//!
//! let palette = Palette::parse(
//!     "Reference",
//!     "#000080\n#c0c0c0\n#404040\n#ffffff\n#808080\n#c0c0c0\n#202020\n#606060",
//! ).unwrap();
//!
//! let colorset = ColorsetBuilder::default().build(&palette);
//! let main = colorset.slot(Slot::MainBackground);
//! assert_eq!(main.background, "#808080");
//! assert_eq!(main.foreground, "#ffffff");
//! assert_eq!(main.select, "#6d6d6d");
//! ```

use serde::Serialize;

use crate::brightness::Bracket;
use crate::codec::{channels_to_hex, widen_to_16bit};
use crate::derive::ColorDerivationEngine;
use crate::error::PaletteError;
use crate::palette::{Palette, Slot, SLOT_COUNT};
use crate::profile::DerivationProfile;

/// The five colors of one slot, each as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleColors {
    pub background: String,
    pub foreground: String,
    pub top_shadow: String,
    pub bottom_shadow: String,
    pub select: String,
}

/// One slot of a colorset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotColors {
    pub slot: Slot,
    pub bracket: Bracket,
    #[serde(flatten)]
    pub colors: RoleColors,
}

/// The derived colors of all eight slots of a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colorset {
    name: String,
    slots: [SlotColors; SLOT_COUNT],
}

impl Colorset {
    /// Name of the palette this colorset was derived from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self, slot: Slot) -> &RoleColors {
        &self.entry(slot).colors
    }

    pub fn bracket(&self, slot: Slot) -> Bracket {
        self.entry(slot).bracket
    }

    fn entry(&self, slot: Slot) -> &SlotColors {
        &self.slots[slot.number() - 1]
    }

    /// Slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &SlotColors> {
        self.slots.iter()
    }
}

/// Derives [`Colorset`]s using one [`DerivationProfile`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorsetBuilder {
    engine: ColorDerivationEngine,
}

impl ColorsetBuilder {
    pub fn new(profile: DerivationProfile) -> Self {
        Self {
            engine: ColorDerivationEngine::new(profile),
        }
    }

    pub fn engine(&self) -> &ColorDerivationEngine {
        &self.engine
    }

    /// Derives the colorset of a palette.
    pub fn build(&self, palette: &Palette) -> Colorset {
        let slots = Slot::ALL.map(|slot| self.build_slot(slot, palette.color(slot)));
        Colorset {
            name: palette.name().to_string(),
            slots,
        }
    }

    /// Validates raw palette lines and derives their colorset.
    pub fn build_from_lines<I, S>(
        &self,
        name: impl Into<String>,
        lines: I,
    ) -> Result<Colorset, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let palette = Palette::from_lines(name, lines)?;
        Ok(self.build(&palette))
    }

    /// Derives the five colors of one slot from its palette text.
    pub fn build_slot(&self, slot: Slot, color: &str) -> SlotColors {
        let wide = widen_to_16bit(color);
        let derivation = self.engine.derive(wide.channels());
        let derived = derivation.colors;

        tracing::debug!(
            slot = slot.number(),
            color = wide.as_str(),
            brightness = derivation.classification.brightness,
            bracket = %derivation.classification.bracket,
            "derived slot colors"
        );

        SlotColors {
            slot,
            bracket: derivation.classification.bracket,
            colors: RoleColors {
                background: wide.narrow(),
                foreground: channels_to_hex(derived.foreground).narrow(),
                top_shadow: channels_to_hex(derived.top_shadow).narrow(),
                bottom_shadow: channels_to_hex(derived.bottom_shadow).narrow(),
                select: channels_to_hex(derived.select).narrow(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: [&str; 8]) -> Palette {
        Palette::from_lines("Test", colors).unwrap()
    }

    #[test]
    fn background_keeps_source_case() {
        let set = ColorsetBuilder::default().build(&palette([
            "#C0C0C0", "#c0c0c0", "#404040", "#ffffff", "#808080", "#c0c0c0", "#202020",
            "#606060",
        ]));
        assert_eq!(set.slot(Slot::ActiveTitlebar).background, "#C0C0C0");
        assert_eq!(set.slot(Slot::ActiveTitlebar).top_shadow, "#e5e5e5");
    }

    #[test]
    fn wide_palette_colors_are_narrowed() {
        let set = ColorsetBuilder::default().build(&palette([
            "#800080008000", "#c0c0c0", "#404040", "#ffffff", "#808080", "#c0c0c0", "#202020",
            "#606060",
        ]));
        assert_eq!(set.slot(Slot::ActiveTitlebar).background, "#808080");
    }

    #[test]
    fn malformed_color_becomes_mid_gray() {
        let set = ColorsetBuilder::default().build(&palette([
            "not a color", "#c0c0c0", "#404040", "#ffffff", "#808080", "#c0c0c0", "#202020",
            "#606060",
        ]));
        let slot = set.slot(Slot::ActiveTitlebar);
        assert_eq!(slot.background, "#888888");
        assert_eq!(set.bracket(Slot::ActiveTitlebar), Bracket::Medium);
    }

    #[test]
    fn build_from_lines_rejects_short_palettes() {
        let err = ColorsetBuilder::default()
            .build_from_lines("Short", ["#000000", "#ffffff"])
            .unwrap_err();
        assert!(matches!(err, PaletteError::TooFewColors { found: 2, .. }));
    }

    #[test]
    fn iter_yields_slots_in_order() {
        let set = ColorsetBuilder::default().build(&palette(["#000000"; 8]));
        let numbers: Vec<usize> = set.iter().map(|entry| entry.slot.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn serialized_slots_are_flat() {
        let set = ColorsetBuilder::default().build(&palette(["#000000"; 8]));
        let yaml = serde_yaml::to_string(&set).unwrap();
        assert!(yaml.contains("slot: 1"));
        assert!(yaml.contains("bracket: dark"));
        assert!(yaml.contains("background: '#000000'"));
    }
}
