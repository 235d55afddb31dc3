//! Loading `CheckerOptions` from JSON.
//!
//! ```json
//! { "joinBranches": true, "parallel": false, "maxExpressionDepth": 500 }
//! ```
//!
//! Every field is optional; unknown fields are rejected.

use anyhow::{Context, Result};
use coolc_checker::CheckerOptions;
use std::path::Path;

pub fn options_from_json(text: &str) -> Result<CheckerOptions> {
    serde_json::from_str(text).context("invalid checker options")
}

pub fn load_options(path: &Path) -> Result<CheckerOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let options = options_from_json(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?options, "loaded checker options");
    Ok(options)
}
