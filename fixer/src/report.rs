//! Console summaries printed by the CLI.

use std::path::Path;

use crate::apply::ApplyReport;
use crate::core::adjective::Rewrite;
use crate::core::corrections::CorrectionTables;
use crate::io::corrections::TableSource;

const RULE: &str = "==================================================";

/// Summary printed after `fixer apply` succeeds.
pub fn render_apply(report: &ApplyReport) -> String {
    let output = report
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.output.display().to_string());
    let mut lines = vec![
        RULE.to_string(),
        "Vocabulary corrections complete".to_string(),
        format!(
            "- manual meaning/part-of-speech corrections: {}",
            report.summary.manual_corrections
        ),
        format!(
            "- adjective endings rewritten (~다 -> ~한/~은): {}",
            report.summary.adjective_rewrites
        ),
    ];
    if !report.summary.fallbacks.is_empty() {
        lines.push(format!(
            "- generic fallback rewrites to review: {}",
            report.summary.fallbacks.len()
        ));
    }
    if report.written {
        lines.push(format!("- output file: '{output}'"));
    } else {
        lines.push(format!("- dry run: '{output}' not written"));
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// Diagnostic printed when the input document does not exist.
pub fn render_missing_input(input: &Path) -> String {
    format!(
        "error: input file '{}' not found; place it in the working directory or pass --input",
        input.display()
    )
}

/// Output of `fixer inflect`.
pub fn render_rewrite(rewrite: &Rewrite, explain: bool) -> String {
    if !explain {
        return rewrite.text();
    }
    rewrite
        .segments
        .iter()
        .map(|segment| format!("{} -> {} ({})", segment.before, segment.after, segment.rule))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Output of `fixer check-corrections`.
pub fn render_tables(tables: &CorrectionTables, source: &TableSource) -> String {
    format!(
        "corrections: source={} meaning={} parts={}",
        source,
        tables.meaning.len(),
        tables.parts.len()
    )
}
