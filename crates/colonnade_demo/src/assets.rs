//! Embedded assets for `colonnade_demo`.
//!
//! Source files live in `crates/colonnade_demo/assets/` and are embedded
//! at compile time, so `--write-sample` works without any runtime lookup
//! and tests can rely on deterministic content.

/// Sample table document written by `--write-sample`.
pub const SAMPLE_DOCUMENT: &str = include_str!("../assets/sample_table.json");
