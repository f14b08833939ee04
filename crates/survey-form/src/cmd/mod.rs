pub mod questions;
pub mod render;
pub mod schema;
pub mod submit;

use std::path::Path;

use anyhow::{Context, Result};

use survey_core::FormSnapshot;

/// Loads an answers document; missing fields fall back to empty defaults.
pub(crate) fn load_snapshot(path: &Path) -> Result<FormSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse answers file {}", path.display()))
}
