//! JSON dump of a generated alphabet

use crate::alphabet::Alphabet;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialize the alphabet (style, skeletons, outlines, diagnostics)
pub fn alphabet_to_json(alphabet: &Alphabet) -> Result<String> {
    serde_json::to_string_pretty(alphabet).context("Failed to serialize alphabet")
}

/// Write the serialized alphabet to `path`, creating parent directories
pub fn export_json(alphabet: &Alphabet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = alphabet_to_json(alphabet)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
