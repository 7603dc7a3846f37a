//! The property-sheet stylesheet dialect.
//!
//! Each slot contributes five named color definitions, so a full colorset is
//! exactly 40 `@define-color` lines. Consumers reference them by name
//! (`@bg_color_5`, `@sel_color_1`, ...) from their own structural CSS.
//!
//! ```text
//! @define-color bg_color_1 #000080;
//! @define-color fg_color_1 #ffffff;
//! @define-color ts_color_1 #7f7fc0;
//! @define-color bs_color_1 #4c4ca6;
//! @define-color sel_color_1 #262693;
//! ```
//!
//! Every definition line ends with a trailing space, and the file closes
//! with a global font rule.

use cdetheme_color::Colorset;

use crate::GENERATOR;

/// Renders the property-sheet stylesheet for a colorset.
pub fn render(colorset: &Colorset) -> String {
    let mut lines: Vec<String> = vec![
        String::new(),
        "/*".to_string(),
        format!(" Generated by {} for palette {}", GENERATOR, colorset.name()),
        " Edits will be overwritten".to_string(),
        "*/".to_string(),
        String::new(),
    ];

    for entry in colorset.iter() {
        let n = entry.slot.number();
        let c = &entry.colors;
        for (key, value) in [
            ("bg", &c.background),
            ("fg", &c.foreground),
            ("ts", &c.top_shadow),
            ("bs", &c.bottom_shadow),
            ("sel", &c.select),
        ] {
            lines.push(format!("@define-color {key}_color_{n} {value}; "));
        }
        lines.push(String::new());
    }

    lines.extend(
        [
            "",
            "* {",
            "    font-family: \"DejaVu Serif\";",
            "    font-size: 12px;",
            "}",
            "    ",
        ]
        .map(String::from),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
