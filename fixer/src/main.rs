//! Vocabulary dataset fixer.
//!
//! Applies manual meaning/part-of-speech corrections to `vocabData.json` and
//! rewrites Korean adjective glosses into modifier form, writing the result to
//! `vocabData_fixed.json`.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use fixer::apply::{ApplyOptions, ApplyOutcome, apply};
use fixer::core::adjective::rewrite;
use fixer::exit_codes;
use fixer::io::config::{DEFAULT_CONFIG_PATH, FixerConfig, load_config};
use fixer::io::corrections::load_corrections;
use fixer::{logging, report};

#[derive(Parser)]
#[command(
    name = "fixer",
    version,
    about = "Batch corrections for the vocabulary dataset"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply manual corrections and adjective rewrites, then write the output.
    Apply {
        /// Vocabulary document to read (default `vocabData.json`).
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Where to write the corrected document (default `vocabData_fixed.json`).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Correction table file (TOML). Defaults to the built-in tables.
        #[arg(short, long)]
        corrections: Option<PathBuf>,
        /// Config file. `fixer.toml` is used when present.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Run every correction but do not write the output.
        #[arg(long)]
        dry_run: bool,
        /// Fail if any gloss needed the generic `다 -> 은` fallback.
        #[arg(long)]
        strict_fallback: bool,
    },
    /// Print the modifier form of a comma-separated gloss list.
    Inflect {
        text: String,
        /// Show the rule used for each segment.
        #[arg(long)]
        explain: bool,
    },
    /// Load and validate a correction table file.
    CheckCorrections {
        /// Table file to check. Defaults to the built-in tables.
        #[arg(short, long)]
        corrections: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Apply {
            input,
            output,
            corrections,
            config,
            dry_run,
            strict_fallback,
        } => {
            let mut cfg = resolve_config(config.as_deref())?;
            if let Some(input) = input {
                cfg.input = input;
            }
            if let Some(output) = output {
                cfg.output = output;
            }
            if corrections.is_some() {
                cfg.corrections = corrections;
            }
            cfg.strict_fallback |= strict_fallback;
            cmd_apply(cfg, dry_run)
        }
        Command::Inflect { text, explain } => {
            println!("{}", report::render_rewrite(&rewrite(&text), explain));
            Ok(exit_codes::OK)
        }
        Command::CheckCorrections { corrections } => {
            let (tables, source) = load_corrections(corrections.as_deref())?;
            println!("{}", report::render_tables(&tables, &source));
            Ok(exit_codes::OK)
        }
    }
}

/// An explicit `--config` must exist; the default location is optional.
fn resolve_config(path: Option<&Path>) -> Result<FixerConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("config {} not found", path.display());
            }
            load_config(path)
        }
        None => load_config(Path::new(DEFAULT_CONFIG_PATH)),
    }
}

fn cmd_apply(config: FixerConfig, dry_run: bool) -> Result<i32> {
    match apply(&ApplyOptions { config, dry_run })? {
        ApplyOutcome::MissingInput { input } => {
            eprintln!("{}", report::render_missing_input(&input));
            Ok(exit_codes::MISSING_INPUT)
        }
        ApplyOutcome::Applied(summary) => {
            println!("{}", report::render_apply(&summary));
            Ok(exit_codes::OK)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_apply_defaults() {
        let cli = Cli::parse_from(["fixer", "apply"]);
        assert!(matches!(
            cli.command,
            Command::Apply {
                input: None,
                output: None,
                corrections: None,
                config: None,
                dry_run: false,
                strict_fallback: false,
            }
        ));
    }

    #[test]
    fn parse_apply_flags() {
        let cli = Cli::parse_from([
            "fixer",
            "apply",
            "-i",
            "in.json",
            "--output",
            "out.json",
            "--dry-run",
            "--strict-fallback",
        ]);
        let Command::Apply {
            input,
            output,
            dry_run,
            strict_fallback,
            ..
        } = cli.command
        else {
            panic!("expected apply");
        };
        assert_eq!(input, Some(PathBuf::from("in.json")));
        assert_eq!(output, Some(PathBuf::from("out.json")));
        assert!(dry_run);
        assert!(strict_fallback);
    }

    #[test]
    fn parse_inflect_explain() {
        let cli = Cli::parse_from(["fixer", "inflect", "좋다, 크다", "--explain"]);
        assert!(matches!(cli.command, Command::Inflect { explain: true, .. }));
    }

    #[test]
    fn parse_check_corrections() {
        let cli = Cli::parse_from(["fixer", "check-corrections"]);
        assert!(matches!(
            cli.command,
            Command::CheckCorrections { corrections: None }
        ));
    }
}
