//! Dataset traversal applying manual corrections and adjective rewrites.

use crate::core::adjective::{self, Rewrite};
use crate::core::corrections::CorrectionTables;
use crate::core::types::{Dataset, VocabEntry};

/// A segment only the generic `다` -> `은` fallback could rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackUse {
    pub level: String,
    pub chapter: String,
    pub kanji: String,
    pub before: String,
    pub after: String,
}

/// Counters accumulated over one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionSummary {
    /// Meaning and part-of-speech overrides applied (each counts once).
    pub manual_corrections: usize,
    /// Entries whose `meaningKo` changed under the adjective rewriter.
    pub adjective_rewrites: usize,
    /// Fallback rewrites, in traversal order.
    pub fallbacks: Vec<FallbackUse>,
}

/// What happened to a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCorrection {
    pub meaning_fixed: bool,
    pub parts_fixed: bool,
    /// Present when the entry is an adjective and its gloss changed.
    pub rewrite: Option<Rewrite>,
}

impl EntryCorrection {
    fn manual_count(&self) -> usize {
        usize::from(self.meaning_fixed) + usize::from(self.parts_fixed)
    }
}

/// Correct one entry in place.
///
/// Order: meaning override, then part-of-speech override, then the adjective
/// rewrite, which sees the values the overrides left behind.
pub fn correct_entry(entry: &mut VocabEntry, tables: &CorrectionTables) -> EntryCorrection {
    let mut outcome = EntryCorrection::default();

    if let Some(fix) = tables.meaning_fix(entry.kanji()) {
        if let Some(meaning) = &fix.meaning {
            entry.set_meaning(meaning);
        }
        if let Some(meaning_ko) = &fix.meaning_ko {
            entry.set_meaning_ko(meaning_ko);
        }
        outcome.meaning_fixed = true;
    }

    if let Some(parts) = tables.parts_fix(entry.kanji()) {
        entry.set_parts(parts);
        outcome.parts_fixed = true;
    }

    if entry.is_adjective() {
        let rewrite = adjective::rewrite(entry.meaning_ko());
        let fixed = rewrite.text();
        if fixed != entry.meaning_ko() {
            entry.set_meaning_ko(&fixed);
            outcome.rewrite = Some(rewrite);
        }
    }

    outcome
}

/// Walk level -> chapter -> entries, correcting every entry in place.
///
/// Never adds, removes or reorders entries.
pub fn correct_dataset(dataset: &mut Dataset, tables: &CorrectionTables) -> CorrectionSummary {
    let mut summary = CorrectionSummary::default();
    for (level, chapters) in dataset {
        for (chapter, entries) in chapters {
            for entry in entries {
                let outcome = correct_entry(entry, tables);
                summary.manual_corrections += outcome.manual_count();
                let Some(rewrite) = outcome.rewrite else {
                    continue;
                };
                summary.adjective_rewrites += 1;
                for segment in rewrite.fallbacks() {
                    summary.fallbacks.push(FallbackUse {
                        level: level.clone(),
                        chapter: chapter.clone(),
                        kanji: entry.kanji().to_string(),
                        before: segment.before.clone(),
                        after: segment.after.clone(),
                    });
                }
            }
        }
    }
    summary
}
