//! Stable exit codes for fixer CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: invalid config, corrections or input document, strict
/// fallback violations, or I/O errors.
pub const INVALID: i32 = 1;
/// `fixer apply` could not find the input document; nothing was written.
///
/// The run still ends early rather than failing, but with a status distinct
/// from [`OK`] so scripts can tell that no output was produced.
pub const MISSING_INPUT: i32 = 2;
