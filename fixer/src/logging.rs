//! Development-time tracing for debugging the fixer.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to stderr.
//!
//! # Events
//!
//! - `warn` "generic fallback rewrite" (`apply`): one per gloss segment that
//!   only the `다` -> `은` rule could rewrite, with `level`, `chapter`, `kanji`,
//!   `before` and `after` fields.
//! - `warn` (`apply`): the input document has no `data` key.
//! - `warn` (`io::corrections`): a meaning override that sets neither field.
//! - `info` "corrections applied" (`apply`): `manual`, `adjectives`,
//!   `fallbacks` and `dry_run`.
//! - `debug` (`io::dataset`): document load and write with `path`, plus
//!   `has_data` once loaded; (`apply`) `entries` and `levels` before correcting.
//! - `debug` (`io::corrections`): tables loaded, with `meaning` and `parts` counts.
//!
//! - **Console summary (`report`)**: Product output on stdout. Always printed,
//!   unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=fixer=debug cargo run -- apply --dry-run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
