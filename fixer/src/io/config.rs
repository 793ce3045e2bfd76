//! Fixer configuration stored in `fixer.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "fixer.toml";

/// Fixer configuration (TOML).
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults below. Command-line flags override file values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FixerConfig {
    /// Vocabulary document to read.
    pub input: PathBuf,

    /// Where the corrected document is written.
    pub output: PathBuf,

    /// Correction table file. `None` uses the tables built into the binary.
    pub corrections: Option<PathBuf>,

    /// Fail before writing if any gloss needed the generic fallback rule.
    pub strict_fallback: bool,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("vocabData.json"),
            output: PathBuf::from("vocabData_fixed.json"),
            corrections: None,
            strict_fallback: false,
        }
    }
}

impl FixerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(anyhow!("input must be a non-empty path"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(anyhow!("output must be a non-empty path"));
        }
        if self.input == self.output {
            return Err(anyhow!(
                "output must differ from input ({})",
                self.input.display()
            ));
        }
        if let Some(corrections) = &self.corrections {
            if corrections.as_os_str().is_empty() {
                return Err(anyhow!("corrections must be a non-empty path when set"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FixerConfig::default()`.
pub fn load_config(path: &Path) -> Result<FixerConfig> {
    if !path.exists() {
        let cfg = FixerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FixerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
