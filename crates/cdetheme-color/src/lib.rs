//! # cdetheme-color - Motif Color Derivation
//!
//! `cdetheme-color` turns a palette of eight base colors into a full widget
//! colorset: for every slot a background, a foreground, a select color and
//! the two bevel shadows. The math is the brightness-adaptive calculation of
//! the Motif toolkit, reproduced to the bit so that generated themes match
//! what a CDE desktop would draw.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: eight color lines bound to fixed [`Slot`]s
//! - [`BrightnessClassifier`]: scores a color and puts it in a [`Bracket`]
//! - [`ColorDerivationEngine`]: applies the bracket's rule to derive role colors
//! - [`ColorsetBuilder`]: runs the engine over every slot, producing a [`Colorset`]
//! - [`DerivationProfile`]: every constant the math uses, Motif values by default
//! - [`CustomColor`]: synthesizes a palette from a single base color
//!
//! ## Quick Start
//!
//! ```rust
//! use cdetheme_color::{Bracket, ColorsetBuilder, Palette, Slot};
//!
//! let palette = Palette::parse(
//!     "Reference",
//!     "#000080\n#c0c0c0\n#404040\n#ffffff\n#808080\n#c0c0c0\n#202020\n#606060\n",
//! ).unwrap();
//!
//! let colorset = ColorsetBuilder::default().build(&palette);
//!
//! assert_eq!(colorset.bracket(Slot::ActiveTitlebar), Bracket::Dark);
//! assert_eq!(colorset.slot(Slot::ActiveTitlebar).top_shadow, "#7f7fc0");
//! assert_eq!(colorset.slot(Slot::TextField).foreground, "#000000");
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! palette text ─▶ codec::widen_to_16bit ─▶ BrightnessClassifier
//!              ─▶ ColorDerivationEngine ─▶ codec::channels_to_hex ─▶ #rrggbb
//! ```
//!
//! Nothing in the pipeline fails on bad color text: unrecognized colors
//! become mid-gray. The only error is a palette with fewer than eight colors,
//! which is rejected when the [`Palette`] is built.

pub mod brightness;
pub mod codec;
pub mod colorset;
pub mod custom;
pub mod derive;
pub mod error;
pub mod palette;
pub mod profile;

pub use brightness::{Bracket, BrightnessClassifier, Classification};
pub use codec::{channels_to_hex, narrow_to_8bit, parse_channels, widen_to_16bit, Rgb16, WideHex};
pub use colorset::{Colorset, ColorsetBuilder, RoleColors, SlotColors};
pub use custom::CustomColor;
pub use derive::{ColorDerivationEngine, Derivation, DerivedColors};
pub use error::{CustomColorError, PaletteError, ProfileError};
pub use palette::{palette_name, Palette, Slot, PALETTE_EXTENSION, SLOT_COUNT};
pub use profile::DerivationProfile;
