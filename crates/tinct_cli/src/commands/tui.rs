//! `tinct tui` — run the interactive customizer with the fetch worker.

use std::sync::Arc;

use anyhow::Result;
use tinct_observability::{ObservabilityConfig, init};
use tokio::sync::mpsc;

use tinct_core::{ThemeStore, fetch_theme};
use tinct_tui::{Appearance, AppEvent, run_tui};

use crate::cli::AppearanceArg;
use crate::output;

/// Remote fetches run here so the key loop never blocks on the network;
/// results go back to the TUI as [AppEvent]s. Attempt-once, no retry.
async fn run_fetch_loop(
    mut fetch_rx: mpsc::Receiver<String>,
    event_tx: mpsc::Sender<AppEvent>,
) {
    while let Some(url) = fetch_rx.recv().await {
        let result = fetch_theme(&url).await.map_err(|e| e.to_string());
        let _ = event_tx
            .send(AppEvent::FetchFinished { url, result })
            .await;
    }
}

pub async fn handle(appearance: AppearanceArg) -> Result<()> {
    // Channel for tracing output → TUI debug traces screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: Arc<dyn Fn(String) + Send + Sync> = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });

    // No console output while the TUI owns the terminal; logs go to the sink.
    let mut obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level("info");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let (fetch_tx, fetch_rx) = mpsc::channel::<String>(8);
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(8);
    tokio::spawn(run_fetch_loop(fetch_rx, event_tx));

    let store = ThemeStore::open_default();
    let appearance = match appearance {
        AppearanceArg::Dark => Appearance::Dark,
        AppearanceArg::Light => Appearance::Light,
    };
    run_tui(store, appearance, fetch_tx, event_rx, Some(log_rx))?;
    Ok(())
}
