//! Vocabulary document model.
//!
//! Entries and the top-level document stay ordered JSON objects so a
//! load/write cycle changes field values only, never key order. The four
//! attributes the fixer touches are read and written by key.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const KANJI: &str = "kanji";
const MEANING: &str = "meaning";
const MEANING_KO: &str = "meaningKo";
const PARTS: &str = "parts";
const DATA: &str = "data";

/// Chapter name -> ordered entries.
pub type Chapters = IndexMap<String, Vec<VocabEntry>>;

/// Level name -> chapters.
pub type Dataset = IndexMap<String, Chapters>;

/// Total number of entries across all levels and chapters.
pub fn entry_count(dataset: &Dataset) -> usize {
    dataset
        .values()
        .flat_map(|chapters| chapters.values())
        .map(Vec::len)
        .sum()
}

/// Top-level vocabulary document (`{"data": {...}, ...}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct VocabDocument {
    fields: Map<String, Value>,
}

impl VocabDocument {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn has_dataset(&self) -> bool {
        self.fields.contains_key(DATA)
    }

    /// Decode a copy of the `data` value.
    pub fn dataset(&self) -> serde_json::Result<Option<Dataset>> {
        self.fields
            .get(DATA)
            .map(Dataset::deserialize)
            .transpose()
    }

    /// Move the `data` value out for mutation, leaving its slot in place.
    pub fn take_dataset(&mut self) -> serde_json::Result<Option<Dataset>> {
        self.fields
            .get_mut(DATA)
            .map(|value| serde_json::from_value(value.take()))
            .transpose()
    }

    /// Put a dataset back under `data`, keeping the key's original position.
    pub fn restore_dataset(&mut self, dataset: &Dataset) -> serde_json::Result<()> {
        let value = serde_json::to_value(dataset)?;
        self.fields.insert(DATA.to_string(), value);
        Ok(())
    }
}

/// A single vocabulary entry.
///
/// Absent or non-string attributes read as `""` (or `None`) through the
/// accessors; setters replace a value where it sits or append the key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct VocabEntry {
    fields: Map<String, Value>,
}

impl From<Map<String, Value>> for VocabEntry {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl VocabEntry {
    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn set_text(&mut self, key: &str, value: &str) {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn kanji(&self) -> &str {
        self.text(KANJI).unwrap_or_default()
    }

    pub fn meaning(&self) -> Option<&str> {
        self.text(MEANING)
    }

    pub fn meaning_ko(&self) -> &str {
        self.text(MEANING_KO).unwrap_or_default()
    }

    pub fn parts(&self) -> &str {
        self.text(PARTS).unwrap_or_default()
    }

    pub fn set_meaning(&mut self, meaning: &str) {
        self.set_text(MEANING, meaning);
    }

    pub fn set_meaning_ko(&mut self, meaning_ko: &str) {
        self.set_text(MEANING_KO, meaning_ko);
    }

    pub fn set_parts(&mut self, parts: &str) {
        self.set_text(PARTS, parts);
    }

    /// True when the part-of-speech label mentions "adjective" in any case.
    pub fn is_adjective(&self) -> bool {
        self.parts().to_lowercase().contains("adjective")
    }
}
