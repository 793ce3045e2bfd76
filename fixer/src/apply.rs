//! Orchestration for `fixer apply`.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::core::corrector::{CorrectionSummary, correct_dataset};
use crate::core::types::entry_count;
use crate::io::config::FixerConfig;
use crate::io::corrections::{TableSource, load_corrections};
use crate::io::dataset::{load_document, write_document};

/// Options for [`apply`].
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    pub config: FixerConfig,
    /// Run every correction but skip writing the output document.
    pub dry_run: bool,
}

/// Structured apply outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Input document not found; nothing was read or written.
    MissingInput { input: PathBuf },
    /// Corrections ran to completion.
    Applied(ApplyReport),
}

/// Everything the console summary reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub summary: CorrectionSummary,
    pub entries: usize,
    pub output: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub corrections: TableSource,
}

/// Load, correct and write the vocabulary document.
pub fn apply(options: &ApplyOptions) -> Result<ApplyOutcome> {
    let config = &options.config;
    config.validate()?;
    if !config.input.exists() {
        return Ok(ApplyOutcome::MissingInput {
            input: config.input.clone(),
        });
    }

    let (tables, source) = load_corrections(config.corrections.as_deref())?;
    let mut document = load_document(&config.input)?;

    let dataset = document
        .take_dataset()
        .with_context(|| format!("decode data in {}", config.input.display()))?;
    let (summary, entries) = match dataset {
        Some(mut dataset) => {
            let entries = entry_count(&dataset);
            debug!(entries, levels = dataset.len(), "correcting dataset");
            let summary = correct_dataset(&mut dataset, &tables);
            document
                .restore_dataset(&dataset)
                .context("encode corrected data")?;
            (summary, entries)
        }
        None => {
            warn!(input = %config.input.display(), "document has no data key");
            (CorrectionSummary::default(), 0)
        }
    };

    for fallback in &summary.fallbacks {
        warn!(
            level = %fallback.level,
            chapter = %fallback.chapter,
            kanji = %fallback.kanji,
            before = %fallback.before,
            after = %fallback.after,
            "generic fallback rewrite"
        );
    }
    if config.strict_fallback && !summary.fallbacks.is_empty() {
        let lines = summary
            .fallbacks
            .iter()
            .map(|f| {
                format!(
                    "{}/{}/{}: {} -> {}",
                    f.level, f.chapter, f.kanji, f.before, f.after
                )
            })
            .collect::<Vec<_>>();
        bail!(
            "{} gloss segment(s) needed the generic fallback rule:\n- {}",
            lines.len(),
            lines.join("\n- ")
        );
    }

    if !options.dry_run {
        write_document(&config.output, &document)?;
    }
    info!(
        manual = summary.manual_corrections,
        adjectives = summary.adjective_rewrites,
        fallbacks = summary.fallbacks.len(),
        dry_run = options.dry_run,
        "corrections applied"
    );

    Ok(ApplyOutcome::Applied(ApplyReport {
        summary,
        entries,
        output: config.output.clone(),
        written: !options.dry_run,
        corrections: source,
    }))
}
