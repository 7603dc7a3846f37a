//! One theme bundle per palette.
//!
//! The batch walks every palette in the registry in name order and writes its
//! bundle with a [`BundleWriter`]. Palettes are independent: a palette that
//! cannot be used is recorded in the report and the batch moves on. A palette
//! with too few colors is rejected before anything on disk changes, so an
//! older bundle of the same name survives.
//!
//! Only a missing base theme stops the batch, and it does so before the
//! first palette.

use std::path::{Path, PathBuf};

use cdetheme_color::{Palette, PaletteError, Slot};

use crate::bundle::BundleWriter;
use crate::error::Result;
use crate::fsutil::disk_usage;
use crate::registry::PaletteRegistry;

/// Result of processing one palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeOutcome {
    Generated {
        /// 1-based count of bundles generated so far.
        ordinal: usize,
        palette: String,
        bundle: String,
        dir: PathBuf,
        /// Backgrounds of the main, active titlebar and menu slots.
        main: String,
        title: String,
        menu: String,
    },
    /// The palette is structurally unusable.
    Skipped { palette: String, reason: String },
    /// Reading the palette or writing its bundle failed.
    Failed { palette: String, error: String },
}

impl ThemeOutcome {
    pub fn palette(&self) -> &str {
        match self {
            ThemeOutcome::Generated { palette, .. }
            | ThemeOutcome::Skipped { palette, .. }
            | ThemeOutcome::Failed { palette, .. } => palette,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ThemeOutcome::Generated { .. })
    }
}

/// Summary of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ThemeOutcome>,
    /// Bytes in regular files under the themes directory, symlinks excluded.
    pub disk_usage: u64,
}

impl BatchReport {
    pub fn generated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_generated()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ThemeOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ThemeOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> impl Iterator<Item = &ThemeOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ThemeOutcome::Failed { .. }))
    }

    /// Disk usage in mebibytes.
    pub fn disk_usage_mb(&self) -> f64 {
        self.disk_usage as f64 / 1024.0 / 1024.0
    }
}

/// Generates a bundle for every palette of a registry.
#[derive(Debug, Clone, Default)]
pub struct ThemeBatchGenerator {
    writer: BundleWriter,
}

impl ThemeBatchGenerator {
    pub fn new(writer: BundleWriter) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &BundleWriter {
        &self.writer
    }

    /// Runs the batch.
    pub fn run(&self, registry: &PaletteRegistry) -> Result<BatchReport> {
        self.run_with(registry, |_| {})
    }

    /// Runs the batch, calling `on_outcome` as each palette finishes.
    pub fn run_with<F>(
        &self,
        registry: &PaletteRegistry,
        mut on_outcome: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(&ThemeOutcome),
    {
        self.writer.check_base()?;
        tracing::info!(palettes = registry.len(), "generating theme bundles");

        let mut report = BatchReport::default();
        let mut generated = 0;
        for (name, path) in registry.iter() {
            let outcome = self.process(name, path, generated + 1);
            if outcome.is_generated() {
                generated += 1;
            }
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        let themes_dir = &self.writer.layout().themes_dir;
        report.disk_usage = disk_usage(themes_dir).unwrap_or_else(|err| {
            tracing::warn!(dir = %themes_dir.display(), error = %err, "cannot measure disk usage");
            0
        });

        tracing::info!(
            generated,
            skipped = report.skipped().count(),
            failed = report.failed().count(),
            "batch finished"
        );
        Ok(report)
    }

    fn process(&self, name: &str, path: &Path, ordinal: usize) -> ThemeOutcome {
        let palette = match Palette::from_file(path) {
            Ok(palette) => palette,
            Err(err @ PaletteError::TooFewColors { .. }) => {
                tracing::warn!(palette = name, "{err}");
                return ThemeOutcome::Skipped {
                    palette: name.to_string(),
                    reason: err.to_string(),
                };
            }
            Err(err) => return failed(name, err),
        };

        match self.writer.write_bundle(&palette) {
            Ok(bundle) => {
                let background = |slot: Slot| bundle.colorset.slot(slot).background.clone();
                ThemeOutcome::Generated {
                    ordinal,
                    palette: name.to_string(),
                    main: background(Slot::MainBackground),
                    title: background(Slot::ActiveTitlebar),
                    menu: background(Slot::MenuDialog),
                    bundle: bundle.name,
                    dir: bundle.dir,
                }
            }
            Err(err) => failed(name, err),
        }
    }
}

fn failed(name: &str, err: impl std::fmt::Display) -> ThemeOutcome {
    tracing::warn!(palette = name, error = %err, "theme bundle failed");
    ThemeOutcome::Failed {
        palette: name.to_string(),
        error: err.to_string(),
    }
}
