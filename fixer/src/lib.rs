//! Batch corrections for a Korean-glossed vocabulary dataset.
//!
//! The fixer loads a `level -> chapter -> entries` document, applies manually
//! curated meaning and part-of-speech overrides, and rewrites the Korean
//! glosses of adjectives from sentence-final form (`조용하다`) to modifier
//! form (`조용한`). The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (adjective rewriter, traversal,
//!   correction tables). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (document, table and config files).
//!
//! [`apply`] coordinates core logic with I/O for `fixer apply`; [`report`]
//! renders console output.

pub mod apply;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
