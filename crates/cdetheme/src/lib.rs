//! # cdetheme - CDE Palettes for GTK Themes
//!
//! Command-line front end over [`cdetheme_color`], [`cdetheme_render`] and
//! [`cdetheme_bundle`]. Two binaries are built from this crate:
//!
//! - `cdetheme`: list, preview and apply single palettes, derive custom
//!   palettes and run the batch (`generate-all`)
//! - `cdetheme-all`: the batch with the default layout and no options
//!
//! ```text
//! $ cdetheme list
//! $ cdetheme preview Alpine --json
//! $ cdetheme apply Alpine --target ~/.themes/CDE-Theme
//! $ cdetheme custom 180,140,100 --dry-run
//! $ cdetheme --themes-dir ~/.themes generate-all
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command, GlobalArgs};
pub use commands::Context;
