//! Command implementations.
//!
//! Every command writes its user-facing output to the given writer;
//! diagnostics go through `tracing` to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use cdetheme_bundle::{
    AssetPolicy, BundleWriter, PaletteRegistry, RegistryError, ThemeBatchGenerator, ThemeLayout,
    ThemeOutcome,
};
use cdetheme_color::{Colorset, ColorsetBuilder, CustomColor, Palette};
use cdetheme_render::preview::{self, PreviewOptions};
use console::style;

use crate::cli::{Cli, Command};
use crate::config::{resolve_layout, resolve_profile};

const LIST_COLUMNS: usize = 4;
const LIST_WIDTH: usize = 18;

/// Resolved settings shared by all commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub layout: ThemeLayout,
    pub builder: ColorsetBuilder,
}

impl Context {
    pub fn new(layout: ThemeLayout, builder: ColorsetBuilder) -> Self {
        Self { layout, builder }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let layout = resolve_layout(&cli.global)?;
        let profile = resolve_profile(&cli.global)?;
        Ok(Self::new(layout, ColorsetBuilder::new(profile)))
    }

    fn registry(&self) -> Result<PaletteRegistry> {
        Ok(PaletteRegistry::from_dirs(&self.layout.palette_dirs)?)
    }

    fn writer(&self) -> BundleWriter {
        BundleWriter::new(self.layout.clone(), self.builder)
    }
}

/// Runs the parsed command line.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let ctx = Context::from_cli(cli)?;
    match &cli.command {
        Command::List => list(&ctx, out),
        Command::Preview { name, json } => preview(&ctx, name, *json, out),
        Command::Apply { name, target } => apply(&ctx, name, target.as_deref(), out),
        Command::Custom {
            color,
            target,
            dry_run,
        } => custom(&ctx, *color, target.as_deref(), *dry_run, out),
        Command::GenerateAll => generate_all(&ctx, out),
    }
}

pub fn list(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let registry = ctx.registry()?;
    let names = registry.names_for_display();

    writeln!(out)?;
    writeln!(out, "{}", style("Available CDE Palettes:").bold())?;
    writeln!(out, "{}", "=".repeat(50))?;
    for row in names.chunks(LIST_COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|name| format!("{name:<width$}", width = LIST_WIDTH))
            .collect();
        writeln!(out, "  {}", cells.join("  "))?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {} palettes", names.len())?;
    Ok(())
}

pub fn preview(ctx: &Context, name: &str, json: bool, out: &mut dyn Write) -> Result<()> {
    let palette = load_palette(&ctx.registry()?, name)?;
    let colorset = ctx.builder.build(&palette);
    if json {
        writeln!(out, "{}", preview::render_json(&colorset)?)?;
    } else {
        write!(out, "{}", preview::render_text(&colorset, preview_options()))?;
    }
    Ok(())
}

pub fn apply(ctx: &Context, name: &str, target: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let palette = load_palette(&ctx.registry()?, name)?;
    write_palette(ctx, &palette, target, out)
}

pub fn custom(
    ctx: &Context,
    color: CustomColor,
    target: Option<&Path>,
    dry_run: bool,
    out: &mut dyn Write,
) -> Result<()> {
    tracing::info!(base = %color.hex(), "deriving custom palette");
    let palette = color.palette();
    if dry_run {
        let colorset = ctx.builder.build(&palette);
        write!(out, "{}", preview::render_text(&colorset, preview_options()))?;
        return Ok(());
    }
    write_palette(ctx, &palette, target, out)
}

pub fn generate_all(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let registry = ctx.registry()?;
    let generator = ThemeBatchGenerator::new(ctx.writer());
    let prefix = &ctx.layout.bundle_prefix;

    // Nothing is printed for a batch without a base theme.
    generator.writer().check_base()?;
    writeln!(out, "Generating {} CDE themes...", registry.len())?;
    writeln!(out)?;

    let mut write_error = None;
    let report = generator.run_with(&registry, |outcome| {
        if write_error.is_none() {
            if let Err(err) = print_outcome(out, prefix, outcome) {
                write_error = Some(err);
            }
        }
    })?;
    if let Some(err) = write_error {
        return Err(err.into());
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} Generated {} themes in {}/",
        style("Done!").green().bold(),
        report.generated(),
        ctx.layout.themes_dir.display()
    )?;
    writeln!(
        out,
        "Each theme is named '{prefix}<Palette>' and will appear in XFCE Appearance settings."
    )?;
    let linked: Vec<&str> = ctx
        .layout
        .assets_with(AssetPolicy::Link)
        .map(|asset| asset.name.as_str())
        .collect();
    if !linked.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "Shared assets ({}) are symlinked to {}.",
            linked.join(", "),
            ctx.layout.base_theme
        )?;
    }
    writeln!(
        out,
        "Total disk usage (excluding symlinks): {:.1} MB",
        report.disk_usage_mb()
    )?;

    let failed = report.failed().count();
    if failed > 0 {
        bail!("{failed} of {} palettes failed", report.outcomes.len());
    }
    Ok(())
}

fn print_outcome(out: &mut dyn Write, prefix: &str, outcome: &ThemeOutcome) -> std::io::Result<()> {
    match outcome {
        ThemeOutcome::Generated {
            ordinal,
            palette,
            main,
            title,
            menu,
            ..
        } => writeln!(
            out,
            "  [{ordinal:3}] {prefix}{palette:<24}  main={main}  title={title}  menu={menu}"
        ),
        ThemeOutcome::Skipped { palette, reason } => {
            writeln!(out, "  {} {palette}: {reason}", style("SKIP").yellow())
        }
        ThemeOutcome::Failed { palette, error } => {
            writeln!(out, "  {} {palette}: {error}", style("FAIL").red().bold())
        }
    }
}

fn load_palette(registry: &PaletteRegistry, name: &str) -> Result<Palette> {
    registry.load(name).map_err(|err| match err {
        RegistryError::NotFound { .. } => {
            anyhow!("{err}. Run `cdetheme list` to see available palettes.")
        }
        other => other.into(),
    })
}

/// Writes `palette` into `target`, or into the base theme.
fn write_palette(
    ctx: &Context,
    palette: &Palette,
    target: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let colorset = ctx.builder.build(palette);
    let target: PathBuf = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.layout.base_dir());

    write!(out, "{}", preview::render_text(&colorset, preview_options()))?;
    let written = ctx.writer().apply_in_place(&target, &colorset)?;
    report_written(out, &colorset, &target, &written)
}

fn report_written(
    out: &mut dyn Write,
    colorset: &Colorset,
    target: &Path,
    written: &[PathBuf],
) -> Result<()> {
    for path in written {
        writeln!(out, "  {} Written: {}", style("[OK]").green(), path.display())?;
    }
    writeln!(out)?;
    if written.is_empty() {
        tracing::warn!(theme = %target.display(), "no GTK directories in theme");
        writeln!(
            out,
            "  No GTK directories found in {}, nothing written.",
            target.display()
        )?;
        return Ok(());
    }
    writeln!(
        out,
        "  {} CDE theme colors changed to '{}'.",
        style("Done!").green().bold(),
        colorset.name()
    )?;
    writeln!(
        out,
        "  Restart your XFCE session or switch away and back to the CDE theme to apply."
    )?;
    writeln!(out)?;
    Ok(())
}

fn preview_options() -> PreviewOptions {
    PreviewOptions {
        swatches: console::colors_enabled(),
    }
}
