//! Correction table loading (TOML).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use crate::core::corrections::CorrectionTables;

/// Tables compiled into the binary, used when no file is given.
pub const DEFAULT_CORRECTIONS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/corrections.toml"
));

/// Where a set of correction tables came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Embedded,
    File(String),
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSource::Embedded => f.write_str("embedded"),
            TableSource::File(path) => f.write_str(path),
        }
    }
}

/// Load tables from `path`, or the embedded defaults when `path` is `None`.
pub fn load_corrections(path: Option<&Path>) -> Result<(CorrectionTables, TableSource)> {
    match path {
        Some(path) => {
            let contents =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            let tables = parse_corrections(&contents)
                .with_context(|| format!("load corrections {}", path.display()))?;
            Ok((tables, TableSource::File(path.display().to_string())))
        }
        None => {
            let tables = parse_corrections(DEFAULT_CORRECTIONS)
                .context("load embedded corrections")?;
            Ok((tables, TableSource::Embedded))
        }
    }
}

/// Parse and validate correction tables from TOML text.
pub fn parse_corrections(contents: &str) -> Result<CorrectionTables> {
    let tables: CorrectionTables = toml::from_str(contents).context("parse corrections toml")?;
    let errors = tables.validate();
    if !errors.is_empty() {
        return Err(anyhow!("invalid corrections: {}", errors.join("; ")));
    }
    for kanji in tables.empty_meaning_fixes() {
        warn!(kanji, "meaning override sets neither meaning nor meaningKo");
    }
    debug!(
        meaning = tables.meaning.len(),
        parts = tables.parts.len(),
        "correction tables loaded"
    );
    Ok(tables)
}
