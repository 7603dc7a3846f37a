//! Command-line definition.
//!
//! | Command | Writes |
//! |---------|--------|
//! | `list` | nothing |
//! | `preview NAME [--json]` | nothing |
//! | `apply NAME [--target DIR]` | color files of one theme |
//! | `custom R,G,B [--target DIR] [--dry-run]` | color files of one theme |
//! | `generate-all` | one bundle per palette |
//!
//! Global options select the themes directory, the palette directories, the
//! base theme and the optional layout and derivation profile files.

use std::path::PathBuf;

use cdetheme_color::CustomColor;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "cdetheme",
    version,
    about = "Apply CDE color palettes to GTK themes"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Directory holding the base theme and generated bundles
    #[arg(long, global = true, value_name = "DIR")]
    pub themes_dir: Option<PathBuf>,

    /// Palette directory; repeat to search several, first wins
    #[arg(long = "palettes-dir", global = true, value_name = "DIR")]
    pub palettes_dirs: Vec<PathBuf>,

    /// Name of the base theme directory
    #[arg(long, global = true, value_name = "NAME")]
    pub base: Option<String>,

    /// YAML layout file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// YAML derivation profile
    #[arg(long, global = true, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available palettes
    List,

    /// Show the computed colors of a palette without writing anything
    Preview {
        /// Palette name, matched case-insensitively if no exact match
        name: String,

        /// Print the colorset as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a palette's colors into a theme
    Apply {
        /// Palette name, matched case-insensitively if no exact match
        name: String,

        /// Theme directory to write into (default: the base theme)
        #[arg(long, value_name = "DIR")]
        target: Option<PathBuf>,
    },

    /// Derive a palette from one base color and write it into a theme
    Custom {
        /// Base color as three 0-255 values
        #[arg(value_name = "R,G,B", allow_hyphen_values = true)]
        color: CustomColor,

        /// Theme directory to write into (default: the base theme)
        #[arg(long, value_name = "DIR")]
        target: Option<PathBuf>,

        /// Show the derived colors without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a theme bundle for every palette
    GenerateAll,
}
