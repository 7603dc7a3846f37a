//! Palettes: eight base colors bound to fixed UI slots.
//!
//! A palette file holds one color per line. Blank lines are ignored, the
//! first eight remaining lines fill slots 1–8 in order, and anything after
//! the eighth is ignored. A file with fewer than eight colors is rejected
//! rather than padded.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::PaletteError;

/// Number of slots in a palette.
pub const SLOT_COUNT: usize = 8;

/// File extension of palette files (without the dot).
pub const PALETTE_EXTENSION: &str = "dp";

/// The UI role a palette color is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "usize")]
pub enum Slot {
    ActiveTitlebar,
    InactiveTitlebar,
    WorkspaceTintA,
    TextField,
    MainBackground,
    MenuDialog,
    WorkspaceTintB,
    Icon,
}

impl Slot {
    /// All slots in palette order.
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::ActiveTitlebar,
        Slot::InactiveTitlebar,
        Slot::WorkspaceTintA,
        Slot::TextField,
        Slot::MainBackground,
        Slot::MenuDialog,
        Slot::WorkspaceTintB,
        Slot::Icon,
    ];

    /// 1-based slot number, as used in stylesheet property names.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// Slot for a 1-based number.
    pub fn from_number(number: usize) -> Option<Slot> {
        number
            .checked_sub(1)
            .and_then(|i| Slot::ALL.get(i))
            .copied()
    }

    /// Where the slot's color shows up on a CDE desktop.
    pub fn role(self) -> &'static str {
        match self {
            Slot::ActiveTitlebar => "Active titlebar / highlight",
            Slot::InactiveTitlebar => "Inactive titlebar",
            Slot::WorkspaceTintA => "Workspace 3 backdrop tint",
            Slot::TextField => "Text fields / lists",
            Slot::MainBackground => "Main widget background (buttons, panels)",
            Slot::MenuDialog => "Menu bar / dialogs",
            Slot::WorkspaceTintB => "Workspace 1 backdrop tint",
            Slot::Icon => "Icon area / secondary",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> usize {
        slot.number()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A named set of eight base colors, as written in the palette source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: [String; SLOT_COUNT],
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: [String; SLOT_COUNT]) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Builds a palette from raw lines, trimming them and skipping blanks.
    ///
    /// # Errors
    ///
    /// [`PaletteError::TooFewColors`] when fewer than 8 lines remain.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let colors: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .take(SLOT_COUNT)
            .collect();

        let found = colors.len();
        let colors: [String; SLOT_COUNT] = colors
            .try_into()
            .map_err(|_| PaletteError::TooFewColors {
                name: name.clone(),
                found,
            })?;

        Ok(Self { name, colors })
    }

    /// Parses palette file content.
    pub fn parse(name: impl Into<String>, content: &str) -> Result<Self, PaletteError> {
        Self::from_lines(name, content.lines())
    }

    /// Reads a palette file; the palette is named after the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(palette_name(path), &content)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source text of a slot's color.
    pub fn color(&self, slot: Slot) -> &str {
        &self.colors[slot.index()]
    }

    pub fn colors(&self) -> &[String; SLOT_COUNT] {
        &self.colors
    }

    /// Slots with their source color text, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        Slot::ALL
            .iter()
            .zip(self.colors.iter())
            .map(|(slot, color)| (*slot, color.as_str()))
    }
}

/// Palette name for a file: its name without extension.
pub fn palette_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
