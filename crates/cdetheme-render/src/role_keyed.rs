//! The role-keyed (GTK2 rc) stylesheet dialect.
//!
//! Instead of named colors, this dialect assigns colors to widget states. The
//! file carries one aggregate `gtk-color-scheme` line and two style blocks per
//! slot: `cde_style_N` for widgets on the slot background and
//! `cde_style_sel_N` for widgets drawn in the slot's select color.
//!
//! State mapping, as `fg/bg/text/base`:
//!
//! | Block | NORMAL | ACTIVE | PRELIGHT | SELECTED | INSENSITIVE |
//! |-------|--------|--------|----------|----------|-------------|
//! | `cde_style_N` | fg/bg/fg/bg | fg/sel/fg/sel | fg/bg/fg/bg | bg/fg/bg/fg | bs/bg/bs/bg |
//! | `cde_style_sel_N` | fg/sel/fg/sel | fg/bg/fg/bg | fg/bs/fg/bs | fg/bs/fg/bs | fg/sel/fg/sel |
//!
//! The uneven key spacing (`fg[NORMAL]  =`, `base[PRELIGHT] =`) and the
//! comments in the insensitive section are reproduced exactly.

use cdetheme_color::{Colorset, RoleColors, Slot};

use crate::GENERATOR;

#[derive(Debug, Clone, Copy)]
enum Role {
    Bg,
    Fg,
    Bs,
    Sel,
}

impl Role {
    fn pick(self, colors: &RoleColors) -> &str {
        match self {
            Role::Bg => &colors.background,
            Role::Fg => &colors.foreground,
            Role::Bs => &colors.bottom_shadow,
            Role::Sel => &colors.select,
        }
    }
}

/// One widget state: the role used for each of `fg`, `bg`, `text`, `base`.
struct StateRow {
    state: &'static str,
    roles: [Role; 4],
    /// Comment lines placed before `fg`, `bg`, `text`, `base` respectively.
    comments: [Option<&'static str>; 4],
}

const ATTRIBUTES: [&str; 4] = ["fg", "bg", "text", "base"];

const fn row(state: &'static str, roles: [Role; 4]) -> StateRow {
    StateRow {
        state,
        roles,
        comments: [None; 4],
    }
}

const NORMAL_BLOCK: [StateRow; 5] = [
    row("NORMAL", [Role::Fg, Role::Bg, Role::Fg, Role::Bg]),
    row("ACTIVE", [Role::Fg, Role::Sel, Role::Fg, Role::Sel]),
    row("PRELIGHT", [Role::Fg, Role::Bg, Role::Fg, Role::Bg]),
    row("SELECTED", [Role::Bg, Role::Fg, Role::Bg, Role::Fg]),
    StateRow {
        state: "INSENSITIVE",
        roles: [Role::Bs, Role::Bg, Role::Bs, Role::Bg],
        comments: [
            Some("this is the dark color of the etched in insensitive text when on normal background of widget"),
            None,
            Some("insensitive text color in entry and also fg color of etched in text in combo box"),
            Some("in cde this is normal bg color"),
        ],
    },
];

const SELECT_BLOCK: [StateRow; 5] = [
    row("NORMAL", [Role::Fg, Role::Sel, Role::Fg, Role::Sel]),
    row("ACTIVE", [Role::Fg, Role::Bg, Role::Fg, Role::Bg]),
    row("PRELIGHT", [Role::Fg, Role::Bs, Role::Fg, Role::Bs]),
    row("SELECTED", [Role::Fg, Role::Bs, Role::Fg, Role::Bs]),
    row("INSENSITIVE", [Role::Fg, Role::Sel, Role::Fg, Role::Sel]),
];

/// Key text up to and including `=`.
fn key(attribute: &str, state: &str) -> String {
    let padding = match (attribute, state) {
        ("fg" | "bg", "NORMAL" | "ACTIVE") => "  ",
        ("base", "PRELIGHT") => " ",
        _ => "",
    };
    format!("{attribute}[{state}]{padding}=")
}

fn push_block(lines: &mut Vec<String>, name: String, rows: &[StateRow], colors: &RoleColors) {
    lines.push(format!("style \"{name}\""));
    lines.push("{".to_string());
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        for ((attribute, role), comment) in ATTRIBUTES.iter().zip(row.roles).zip(row.comments) {
            if let Some(comment) = comment {
                lines.push(format!("    #{comment}"));
            }
            lines.push(format!(
                "    {}\"{}\"",
                key(attribute, row.state),
                role.pick(colors)
            ));
        }
    }
    lines.push("}".to_string());
    lines.push(String::new());
}

/// The aggregate `gtk-color-scheme` value, with literal `\n` separators.
fn color_scheme(colorset: &Colorset) -> String {
    let main = colorset.slot(Slot::MainBackground);
    let text = colorset.slot(Slot::TextField);
    [
        ("fg_color", &main.foreground),
        ("bg_color", &main.background),
        ("base_color", &text.background),
        ("text_color", &main.foreground),
        ("selected_bg_color", &main.select),
        ("selected_fg_color", &main.foreground),
        ("tooltip_bg_color", &main.select),
        ("tooltip_fg_color", &main.foreground),
    ]
    .iter()
    .map(|(name, color)| format!("{name}:{color}"))
    .collect::<Vec<_>>()
    .join("\\n")
}

/// Renders the role-keyed stylesheet for a colorset.
pub fn render(colorset: &Colorset) -> String {
    let mut lines: Vec<String> = vec![
        "#".to_string(),
        format!("# Generated by {} for palette {}", GENERATOR, colorset.name()),
        "# Edits will be overwritten".to_string(),
        "#".to_string(),
        "    ".to_string(),
        format!("gtk-color-scheme = \"{}\"", color_scheme(colorset)),
        "    ".to_string(),
    ];

    for entry in colorset.iter() {
        let name = format!("cde_style_{}", entry.slot.number());
        push_block(&mut lines, name, &NORMAL_BLOCK, &entry.colors);
    }
    for entry in colorset.iter() {
        let name = format!("cde_style_sel_{}", entry.slot.number());
        push_block(&mut lines, name, &SELECT_BLOCK, &entry.colors);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdetheme_color::{ColorsetBuilder, Palette};

    fn sample() -> Colorset {
        let palette = Palette::parse(
            "Sample",
            "#000080\n#c0c0c0\n#404040\n#ffffff\n#808080\n#c0c0c0\n#202020\n#606060",
        )
        .unwrap();
        ColorsetBuilder::default().build(&palette)
    }

    fn block<'a>(rc: &'a str, name: &str) -> &'a str {
        let start = rc.find(&format!("style \"{name}\"\n")).unwrap();
        let end = start + rc[start..].find("\n}\n").unwrap();
        &rc[start..end]
    }

    #[test]
    fn key_spacing() {
        assert_eq!(key("fg", "NORMAL"), "fg[NORMAL]  =");
        assert_eq!(key("bg", "ACTIVE"), "bg[ACTIVE]  =");
        assert_eq!(key("text", "NORMAL"), "text[NORMAL]=");
        assert_eq!(key("base", "PRELIGHT"), "base[PRELIGHT] =");
        assert_eq!(key("fg", "PRELIGHT"), "fg[PRELIGHT]=");
    }

    #[test]
    fn color_scheme_uses_main_and_text_slots() {
        let rc = render(&sample());
        assert!(rc.contains(
            "gtk-color-scheme = \"fg_color:#ffffff\\nbg_color:#808080\\nbase_color:#ffffff\\n"
        ));
        assert!(rc.contains("tooltip_bg_color:#6d6d6d\\ntooltip_fg_color:#ffffff\"\n"));
    }

    #[test]
    fn selected_state_swaps_fg_and_bg() {
        let rc = render(&sample());
        let style = block(&rc, "cde_style_1");
        assert!(style.contains("    fg[SELECTED]=\"#000080\"\n    bg[SELECTED]=\"#ffffff\""));
        assert!(style.contains("    text[SELECTED]=\"#000080\"\n    base[SELECTED]=\"#ffffff\""));
    }

    #[test]
    fn insensitive_uses_bottom_shadow_with_comments() {
        let rc = render(&sample());
        let style = block(&rc, "cde_style_1");
        assert!(style.contains("    #this is the dark color"));
        assert!(style.contains("    fg[INSENSITIVE]=\"#4c4ca6\"\n    bg[INSENSITIVE]=\"#000080\""));
        assert!(style.contains("    #in cde this is normal bg color\n    base[INSENSITIVE]=\"#000080\""));
    }

    #[test]
    fn select_block_mapping() {
        let rc = render(&sample());
        let style = block(&rc, "cde_style_sel_5");
        assert!(style.contains("    bg[NORMAL]  =\"#6d6d6d\""));
        assert!(style.contains("    bg[ACTIVE]  =\"#808080\""));
        assert!(style.contains("    base[PRELIGHT] =\"#404040\""));
        assert!(style.contains("    bg[SELECTED]=\"#404040\""));
        assert!(style.contains("    base[INSENSITIVE]=\"#6d6d6d\""));
        assert!(!style.contains("    #"));
    }

    #[test]
    fn sixteen_blocks_in_order() {
        let rc = render(&sample());
        let names: Vec<&str> = rc
            .lines()
            .filter_map(|l| l.strip_prefix("style \""))
            .collect();
        assert_eq!(names.len(), 16);
        assert_eq!(names[0], "cde_style_1\"");
        assert_eq!(names[8], "cde_style_sel_1\"");
    }
}
