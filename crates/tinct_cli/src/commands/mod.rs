//! Command handlers, one module per command group.

mod community;
mod fetch;
mod portable;
mod presets;
mod theme;
mod tui;

use anyhow::Result;
use tinct_observability::ObservabilityConfig;

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    // The TUI installs its own subscriber (log sink → debug traces screen);
    // other commands log to the console only when asked.
    if !matches!(cli.command, Command::Tui { .. }) {
        let mut config = ObservabilityConfig::from_env().with_console(cli.verbose);
        if config.log_level.is_none() && cli.verbose {
            config = config.with_log_level("debug");
        }
        if let Err(e) = tinct_observability::init(config) {
            output::warning(&format!("Observability init failed (continuing): {}", e));
        }
    }

    match cli.command {
        Command::Tui { appearance } => tui::handle(appearance).await,
        Command::Show => theme::show(),
        Command::Set { field, value } => theme::set(&field, &value),
        Command::Reset => theme::reset(),
        Command::Presets { action } => presets::handle(action),
        Command::Community { action } => community::handle(action),
        Command::Export { path } => portable::export(&path),
        Command::Import { path } => portable::import(&path),
        Command::Share {
            name,
            base_url,
            copy,
        } => portable::share(&name, &base_url, copy),
        Command::Open { link } => portable::open(&link),
        Command::Fetch { url } => fetch::handle(&url).await,
        Command::Css => theme::css(),
    }
}
