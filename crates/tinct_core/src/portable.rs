//! Theme files: export to and import from JSON on disk.

use std::path::Path;

use crate::config::{ThemeConfig, theme_from_json};
use crate::error::{Result, ThemeError};

/// Default export file name.
pub const EXPORT_FILE: &str = "theme-config.json";

/// Write the theme as pretty-printed JSON (2-space indent).
pub fn export_theme(path: &Path, config: &ThemeConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a theme file: text, JSON parse, shared validation. Failure is a
/// typed error; nothing is mutated on failure.
pub fn import_theme(path: &Path) -> Result<ThemeConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ThemeError::Import(format!("cannot read {}: {}", path.display(), e)))?;
    theme_from_json(&text).map_err(|e| ThemeError::Import(e.to_string()))
}
