//! I/O helpers: vocabulary documents, correction tables and config.

pub mod config;
pub mod corrections;
pub mod dataset;
