//! Manual correction tables keyed by `kanji`.
//!
//! The tables are configuration data: a meaning-fix table overriding
//! `meaning`/`meaningKo` and a part-of-speech table overriding `parts`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Replacement glosses for one entry. Either field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MeaningFix {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(
        rename = "meaningKo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub meaning_ko: Option<String>,
}

impl MeaningFix {
    pub fn is_empty(&self) -> bool {
        self.meaning.is_none() && self.meaning_ko.is_none()
    }
}

/// Both correction tables, in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CorrectionTables {
    /// kanji -> meaning override.
    pub meaning: IndexMap<String, MeaningFix>,
    /// kanji -> replacement part-of-speech label.
    pub parts: IndexMap<String, String>,
}

impl CorrectionTables {
    pub fn meaning_fix(&self, kanji: &str) -> Option<&MeaningFix> {
        self.meaning.get(kanji)
    }

    pub fn parts_fix(&self, kanji: &str) -> Option<&str> {
        self.parts.get(kanji).map(String::as_str)
    }

    /// Structural problems that make the tables unusable.
    ///
    /// - No blank kanji keys in either table
    /// - No blank replacement part labels
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for kanji in self.meaning.keys() {
            if kanji.trim().is_empty() {
                errors.push("meaning: blank kanji key".to_string());
            }
        }
        for (kanji, label) in &self.parts {
            if kanji.trim().is_empty() {
                errors.push("parts: blank kanji key".to_string());
            }
            if label.trim().is_empty() {
                errors.push(format!("parts.{kanji}: blank part-of-speech label"));
            }
        }
        errors
    }

    /// Kanji whose meaning override sets neither field.
    pub fn empty_meaning_fixes(&self) -> Vec<&str> {
        self.meaning
            .iter()
            .filter(|(_, fix)| fix.is_empty())
            .map(|(kanji, _)| kanji.as_str())
            .collect()
    }
}
