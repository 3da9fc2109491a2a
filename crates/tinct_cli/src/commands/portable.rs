//! `tinct export` / `import` / `share` / `open` — theme files and links.

use std::path::Path;

use anyhow::Result;
use tinct_core::{ThemeStore, export_theme, import_theme, parse_shared, share_url};

use crate::output;

pub fn export(path: &str) -> Result<()> {
    let config = ThemeStore::open_default().load();
    export_theme(Path::new(path), &config)?;
    output::success(&format!("Theme exported to {path}"));
    Ok(())
}

pub fn import(path: &str) -> Result<()> {
    let config = import_theme(Path::new(path))?;
    ThemeStore::open_default().save(&config)?;
    output::success(&format!("Theme imported from {path}"));
    Ok(())
}

pub fn share(name: &str, base_url: &str, copy: bool) -> Result<()> {
    let config = ThemeStore::open_default().load();
    let link = share_url(&config, name, base_url)?;
    if copy {
        // Best effort; the link is still printed either way
        if cli_clipboard::set_contents(link.clone()).is_ok() {
            output::success("Share link copied to clipboard");
        } else {
            output::warning("Clipboard unavailable");
        }
    }
    output::kv("link", &link);
    Ok(())
}

/// Apply a theme from a shareable link. An unreadable link is an absent
/// result, not a failure.
pub fn open(link: &str) -> Result<()> {
    match parse_shared(link) {
        Some(shared) => {
            ThemeStore::open_default().save(&shared.config)?;
            output::success(&format!("Applied \"{}\"", shared.name));
        }
        None => output::warning("No theme found in link"),
    }
    Ok(())
}
