//! # cdetheme-bundle - Theme Bundles on Disk
//!
//! Finds palettes and writes the theme bundles derived from them.
//!
//! ## Core Concepts
//!
//! - [`PaletteRegistry`]: palette files across one or more directories
//! - [`ThemeLayout`]: where themes live and which base-theme directories are
//!   shared ([`AssetPolicy::Link`]) or copied ([`AssetPolicy::Copy`])
//! - [`BundleWriter`]: rebuilds one bundle, or renders into an existing theme
//! - [`ThemeBatchGenerator`]: one bundle per palette, with a [`BatchReport`]
//!
//! ## Layout
//!
//! ```text
//! themes/
//! ├── CDE-Theme/            base theme, never written
//! │   ├── gtk-2.0/ gtk-3.0/ gtk-4.0/
//! │   └── xfwm4/ img/ img2/
//! └── CDE-Alpine/           generated
//!     ├── index.theme
//!     ├── gtk-3.0/          copy, cdecolors.css replaced
//!     └── xfwm4 -> ../CDE-Theme/xfwm4
//! ```

pub mod batch;
pub mod bundle;
pub mod error;
pub mod fsutil;
pub mod layout;
pub mod registry;

pub use batch::{BatchReport, ThemeBatchGenerator, ThemeOutcome};
pub use bundle::{BundleWriter, ThemeBundle};
pub use error::{BundleError, LayoutError, RegistryError, Result};
pub use layout::{AssetEntry, AssetPolicy, ThemeLayout};
pub use registry::PaletteRegistry;
