//! The stylesheet consumers a theme bundle serves.
//!
//! | Dialect | Directory | Color file | Format |
//! |---------|-----------|------------|--------|
//! | [`Dialect::Gtk2`] | `gtk-2.0` | `cdecolors.rc` | [`SheetFormat::RoleKeyed`] |
//! | [`Dialect::Gtk3`] | `gtk-3.0` | `cdecolors.css` | [`SheetFormat::PropertySheet`] |
//! | [`Dialect::Gtk4`] | `gtk-4.0` | `cdecolors.css` | [`SheetFormat::PropertySheet`] |

use std::fmt;

use cdetheme_color::Colorset;

use crate::{property_sheet, role_keyed};

/// How a stylesheet expresses colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Named color definitions (`@define-color`).
    PropertySheet,
    /// Colors assigned to widget states (`fg[NORMAL]`).
    RoleKeyed,
}

impl SheetFormat {
    pub fn render(self, colorset: &Colorset) -> String {
        match self {
            SheetFormat::PropertySheet => property_sheet::render(colorset),
            SheetFormat::RoleKeyed => role_keyed::render(colorset),
        }
    }
}

/// A toolkit generation whose directory in a theme bundle holds a color file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Gtk2,
    Gtk3,
    Gtk4,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Gtk2, Dialect::Gtk3, Dialect::Gtk4];

    /// Directory name inside a theme bundle.
    pub fn dir_name(self) -> &'static str {
        match self {
            Dialect::Gtk2 => "gtk-2.0",
            Dialect::Gtk3 => "gtk-3.0",
            Dialect::Gtk4 => "gtk-4.0",
        }
    }

    /// Name of the generated color file inside [`Self::dir_name`].
    pub fn file_name(self) -> &'static str {
        match self {
            Dialect::Gtk2 => "cdecolors.rc",
            Dialect::Gtk3 | Dialect::Gtk4 => "cdecolors.css",
        }
    }

    pub fn format(self) -> SheetFormat {
        match self {
            Dialect::Gtk2 => SheetFormat::RoleKeyed,
            Dialect::Gtk3 | Dialect::Gtk4 => SheetFormat::PropertySheet,
        }
    }

    /// Renders this dialect's color file.
    pub fn render(self, colorset: &Colorset) -> String {
        self.format().render(colorset)
    }

    /// Looks a dialect up by its directory name.
    pub fn from_dir_name(name: &str) -> Option<Dialect> {
        Dialect::ALL.into_iter().find(|d| d.dir_name() == name)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
