//! Human-readable and JSON previews of a colorset.
//!
//! The text preview is a fixed-width table of the five colors per slot,
//! followed by a legend of what each slot colors on a CDE desktop. With
//! swatches enabled every row ends in a block painted in the slot background
//! (256-color approximation).

use cdetheme_color::{Colorset, Slot};
use console::Style;

use crate::error::RenderError;

const RULE_WIDTH: usize = 60;
const COLUMN_WIDTH: usize = 14;

/// Options for [`render_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewOptions {
    /// Append a colored swatch to every row.
    pub swatches: bool,
}

/// Renders the text preview of a colorset.
pub fn render_text(colorset: &Colorset, options: PreviewOptions) -> String {
    let rule = format!("  {}", "─".repeat(RULE_WIDTH));
    let mut lines = vec![
        String::new(),
        format!("  Palette: {}", colorset.name()),
        rule.clone(),
        row(
            "Slot",
            ["Background", "Foreground", "TopShadow", "BotShadow", "Select"],
        ),
        rule,
    ];

    for entry in colorset.iter() {
        let c = &entry.colors;
        let mut line = row(
            &entry.slot.number().to_string(),
            [
                &c.background,
                &c.foreground,
                &c.top_shadow,
                &c.bottom_shadow,
                &c.select,
            ],
        );
        if options.swatches {
            line.push_str("  ");
            line.push_str(&swatch(&c.background));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("  Color roles in CDE:".to_string());
    for slot in Slot::ALL {
        lines.push(format!("    Slot {}: {}", slot.number(), slot.role()));
    }
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn row<S: AsRef<str>>(slot: &str, cells: [S; 5]) -> String {
    let mut line = format!("  {slot:<6}");
    for cell in cells {
        line.push(' ');
        line.push_str(&format!("{:<width$}", cell.as_ref(), width = COLUMN_WIDTH));
    }
    line.trim_end().to_string()
}

fn swatch(color: &str) -> String {
    let Some(rgb) = hex_to_rgb(color) else {
        return String::new();
    };
    Style::new()
        .on_color256(rgb_to_ansi256(rgb))
        .force_styling(true)
        .apply_to("      ")
        .to_string()
}

fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    let byte = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    Some((byte(0..2)?, byte(2..4)?, byte(4..6)?))
}

/// Nearest xterm 256-color index for an RGB color.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let scale = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }
}

/// Renders the colorset as pretty-printed JSON.
pub fn render_json(colorset: &Colorset) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(colorset)?)
}
