//! # cdetheme-render - Stylesheets for Derived Colorsets
//!
//! Turns a [`cdetheme_color::Colorset`] into the files a theme bundle ships:
//!
//! - [`property_sheet`]: 40 `@define-color` definitions (GTK3 and GTK4)
//! - [`role_keyed`]: per-state style blocks (GTK2 rc)
//! - [`manifest`]: the `index.theme` desktop entry
//! - [`preview`]: a terminal table or JSON dump, for inspection only
//!
//! [`Dialect`] ties the stylesheet formats to the directories and file names
//! they are written to. Every renderer is a pure function of its input; the
//! output for a given colorset never changes.
//!
//! ```rust
//! use cdetheme_color::{ColorsetBuilder, Palette};
//! use cdetheme_render::Dialect;
//!
//! let palette = Palette::from_lines("Slate", ["#708090"; 8]).unwrap();
//! let colorset = ColorsetBuilder::default().build(&palette);
//!
//! let css = Dialect::Gtk3.render(&colorset);
//! assert!(css.contains("@define-color bg_color_1 #708090; "));
//! ```

pub mod dialect;
pub mod error;
pub mod manifest;
pub mod preview;
pub mod property_sheet;
pub mod role_keyed;

pub use dialect::{Dialect, SheetFormat};
pub use error::RenderError;
pub use manifest::MANIFEST_FILE;
pub use preview::PreviewOptions;

/// Tool name written into generated file headers.
pub const GENERATOR: &str = "cdetheme";
