//! Test-only helpers for building entries, datasets and scratch workspaces.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tempfile::TempDir;

use crate::core::corrections::{CorrectionTables, MeaningFix};
use crate::core::types::{Dataset, VocabEntry};

/// Create an entry with `kanji`, `meaning`, `meaningKo` and `parts`, in that order.
pub fn entry(kanji: &str, meaning: &str, meaning_ko: &str, parts: &str) -> VocabEntry {
    let mut fields = Map::new();
    for (key, value) in [
        ("kanji", kanji),
        ("meaning", meaning),
        ("meaningKo", meaning_ko),
        ("parts", parts),
    ] {
        fields.insert(key.to_string(), Value::String(value.to_string()));
    }
    VocabEntry::from(fields)
}

/// Build a dataset from `(level, chapter, entries)` triples, keeping order.
///
/// Repeated levels collect their chapters in first-seen order.
pub fn dataset(chapters: Vec<(&str, &str, Vec<VocabEntry>)>) -> Dataset {
    let mut data = Dataset::new();
    for (level, chapter, entries) in chapters {
        data.entry(level.to_string())
            .or_default()
            .insert(chapter.to_string(), entries);
    }
    data
}

/// Tables holding a single meaning override.
pub fn meaning_fix_tables(kanji: &str, fix: MeaningFix) -> CorrectionTables {
    let mut tables = CorrectionTables::default();
    tables.meaning.insert(kanji.to_string(), fix);
    tables
}

/// Scratch directory that is removed on drop.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `contents` to `name` inside the workspace and return its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
