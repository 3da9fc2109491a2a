//! `tinct fetch` — fetch a theme from a URL and apply it.

use anyhow::{Result, anyhow};
use tinct_core::{ThemeStore, fetch_theme};

use crate::output;

pub async fn handle(url: &str) -> Result<()> {
    let spinner = output::spinner(&format!("Fetching {url}..."));
    match fetch_theme(url).await {
        Ok(config) => {
            ThemeStore::open_default().save(&config)?;
            output::spinner_success(&spinner, "Theme fetched and applied");
            Ok(())
        }
        Err(e) => {
            output::spinner_error(&spinner, "Fetch failed");
            Err(anyhow!("{e}"))
        }
    }
}
