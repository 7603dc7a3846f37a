//! Golden colorsets.
//!
//! The expected values were produced by the Motif color calculation and are
//! compared character for character.

use cdetheme_color::{Bracket, ColorsetBuilder, Palette, Slot};

const REFERENCE: &str = "#000080\n#c0c0c0\n#404040\n#ffffff\n#808080\n#c0c0c0\n#202020\n#606060\n";

/// (bg, fg, ts, bs, sel) per slot.
type Row = (&'static str, &'static str, &'static str, &'static str, &'static str);

fn assert_colorset(palette: &Palette, expected: [Row; 8]) {
    let colorset = ColorsetBuilder::default().build(palette);
    for (slot, (bg, fg, ts, bs, sel)) in Slot::ALL.into_iter().zip(expected) {
        let colors = colorset.slot(slot);
        assert_eq!(colors.background, bg, "slot {slot} background");
        assert_eq!(colors.foreground, fg, "slot {slot} foreground");
        assert_eq!(colors.top_shadow, ts, "slot {slot} top shadow");
        assert_eq!(colors.bottom_shadow, bs, "slot {slot} bottom shadow");
        assert_eq!(colors.select, sel, "slot {slot} select");
    }
}

// =============================================================================
// Reference palette
// =============================================================================

#[test]
fn reference_palette_matches_golden_table() {
    let palette = Palette::parse("Reference", REFERENCE).unwrap();
    assert_colorset(
        &palette,
        [
            ("#000080", "#ffffff", "#7f7fc0", "#4c4ca6", "#262693"),
            ("#c0c0c0", "#000000", "#e5e5e5", "#6a6a6a", "#a3a3a3"),
            ("#404040", "#ffffff", "#a4a4a4", "#1c1c1c", "#363636"),
            ("#ffffff", "#000000", "#cccccc", "#999999", "#d9d9d9"),
            ("#808080", "#ffffff", "#c6c6c6", "#404040", "#6d6d6d"),
            ("#c0c0c0", "#000000", "#e5e5e5", "#6a6a6a", "#a3a3a3"),
            ("#202020", "#ffffff", "#909090", "#636363", "#414141"),
            ("#606060", "#ffffff", "#b6b6b6", "#2d2d2d", "#515151"),
        ],
    );
}

#[test]
fn reference_palette_brackets() {
    let palette = Palette::parse("Reference", REFERENCE).unwrap();
    let colorset = ColorsetBuilder::default().build(&palette);
    let brackets: Vec<Bracket> = colorset.iter().map(|entry| entry.bracket).collect();
    assert_eq!(
        brackets,
        [
            Bracket::Dark,
            Bracket::Medium,
            Bracket::Medium,
            Bracket::Light,
            Bracket::Medium,
            Bracket::Medium,
            Bracket::Dark,
            Bracket::Medium,
        ]
    );
}

#[test]
fn main_background_wide_values() {
    use cdetheme_color::{channels_to_hex, widen_to_16bit, ColorDerivationEngine};

    let engine = ColorDerivationEngine::default();
    let derivation = engine.derive(widen_to_16bit("#808080").channels());
    assert_eq!(derivation.classification.brightness, 32896.0);
    assert_eq!(channels_to_hex(derivation.colors.select).as_str(), "#6d396d396d39");
    assert_eq!(
        channels_to_hex(derivation.colors.bottom_shadow).as_str(),
        "#404c404c404c"
    );
    assert_eq!(
        channels_to_hex(derivation.colors.top_shadow).as_str(),
        "#c6a5c6a5c6a5"
    );
}

// =============================================================================
// Mixed-format palette
// =============================================================================

#[test]
fn mixed_format_palette_matches_golden_table() {
    let palette = Palette::parse(
        "Mixed",
        "#AE2E2E\n#5A7DAF\n#8FBC8F\n#F5DEB3\n#B0C4DE\n#2F4F4F\n#ffff00000000\njunk\n",
    )
    .unwrap();
    assert_colorset(
        &palette,
        [
            ("#AE2E2E", "#ffffff", "#da9e9e", "#511515", "#942727"),
            ("#5A7DAF", "#ffffff", "#b5c5db", "#2d3e57", "#4c6a95"),
            ("#8FBC8F", "#ffffff", "#cee2ce", "#4b634b", "#7aa07a"),
            ("#F5DEB3", "#000000", "#fbf2e0", "#8c7f66", "#d1bd98"),
            ("#B0C4DE", "#000000", "#dee6f1", "#616d7b", "#96a7bd"),
            ("#2F4F4F", "#ffffff", "#9dacac", "#152323", "#284343"),
            ("#ff0000", "#ffffff", "#ff8888", "#770000", "#d90000"),
            ("#888888", "#ffffff", "#cacaca", "#454545", "#747474"),
        ],
    );
}

#[test]
fn builds_are_deterministic() {
    let palette = Palette::parse("Reference", REFERENCE).unwrap();
    let builder = ColorsetBuilder::default();
    let first = builder.build(&palette);
    for _ in 0..10 {
        assert_eq!(builder.build(&palette), first);
    }
}
