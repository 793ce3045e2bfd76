//! Vocabulary document load/save with schema validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use crate::core::types::VocabDocument;

const VOCAB_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/vocab_data/v1.schema.json"
));

/// Load and schema-check a vocabulary document.
pub fn load_document(path: &Path) -> Result<VocabDocument> {
    debug!(path = %path.display(), "loading vocabulary document");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    validate_schema(&value).with_context(|| format!("validate {}", path.display()))?;
    let document: VocabDocument = serde_json::from_value(value)
        .with_context(|| format!("deserialize {}", path.display()))?;
    debug!(has_data = document.has_dataset(), "vocabulary document loaded");
    Ok(document)
}

/// Write the document as two-space indented JSON with a trailing newline.
///
/// Non-ASCII text is written literally. The file is replaced atomically
/// (temp file + rename).
pub fn write_document(path: &Path, document: &VocabDocument) -> Result<()> {
    debug!(path = %path.display(), "writing vocabulary document");
    let mut buf = serde_json::to_string_pretty(document).context("serialize vocabulary json")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn validate_schema(document: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(VOCAB_SCHEMA).context("parse vocabulary schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(document) {
        let messages = compiled
            .iter_errors(document)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "vocabulary schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestWorkspace;

    const SAMPLE: &str = r#"{
  "version": "2024-05",
  "data": {
    "N5": {
      "第1課": [
        {"kanji": "静か", "reading": "しずか", "meaning": "quiet", "meaningKo": "조용하다", "parts": "na-adjective"}
      ]
    }
  }
}"#;

    #[test]
    fn load_then_write_keeps_hangul_literal() {
        let ws = TestWorkspace::new().expect("workspace");
        let input = ws.write("in.json", SAMPLE).expect("write input");
        let document = load_document(&input).expect("load");
        let data = document.dataset().expect("decode").expect("data");
        assert_eq!(data["N5"]["第1課"][0].meaning_ko(), "조용하다");

        let output = ws.path("out/fixed.json");
        write_document(&output, &document).expect("write");
        let written = ws.read("out/fixed.json").expect("read output");
        assert!(written.contains("\"meaningKo\": \"조용하다\""));
        assert!(written.contains("\"第1課\""));
        assert!(written.ends_with("}\n"));
        assert!(written.starts_with("{\n  \"version\": \"2024-05\",\n  \"data\": {\n    \"N5\""));
        assert!(written.contains(
            "\"kanji\": \"静か\",\n          \"reading\": \"しずか\",\n          \"meaning\": \"quiet\""
        ));
        assert!(!ws.path("out/fixed.json.tmp").exists());
    }

    #[test]
    fn load_rejects_non_string_gloss() {
        let ws = TestWorkspace::new().expect("workspace");
        let input = ws
            .write(
                "bad.json",
                r#"{"data":{"N5":{"ch1":[{"kanji":"本","meaningKo":3}]}}}"#,
            )
            .expect("write input");
        let err = load_document(&input).expect_err("schema violation");
        assert!(format!("{err:#}").contains("schema validation failed"));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let ws = TestWorkspace::new().expect("workspace");
        let input = ws.write("broken.json", "{\"data\":").expect("write input");
        let err = load_document(&input).expect_err("parse error");
        assert!(format!("{err:#}").contains("parse"));
    }

    #[test]
    fn document_without_data_round_trips() {
        let ws = TestWorkspace::new().expect("workspace");
        let input = ws.write("empty.json", r#"{"meta":{"a":1}}"#).expect("write");
        let document = load_document(&input).expect("load");
        assert!(!document.has_dataset());
        let output = ws.path("empty_fixed.json");
        write_document(&output, &document).expect("write");
        let value: Value =
            serde_json::from_str(&ws.read("empty_fixed.json").expect("read")).expect("json");
        assert_eq!(value, serde_json::json!({"meta": {"a": 1}}));
    }
}
