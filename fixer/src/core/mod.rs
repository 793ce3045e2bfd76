//! Deterministic, pure logic for the fixer.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod adjective;
pub mod corrections;
pub mod corrector;
pub mod types;
