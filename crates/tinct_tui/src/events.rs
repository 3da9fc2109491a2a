//! App events from background work, applied to [TuiState].
//!
//! The only background work is the remote fetch; its result comes back over
//! a channel and lands here. Failures leave the in-memory theme untouched.

use tinct_core::ThemeConfig;

use crate::state::TuiState;

/// Event delivered to the TUI from outside the key loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A remote fetch finished, one way or the other.
    FetchFinished {
        url: String,
        result: Result<ThemeConfig, String>,
    },
}

/// Apply an [AppEvent] to the state.
pub fn apply_app_event(state: &mut TuiState, event: AppEvent) {
    match event {
        AppEvent::FetchFinished { url, result } => {
            state.is_fetching = false;
            match result {
                Ok(config) => {
                    tracing::info!(url = %url, "fetched theme");
                    state.preset_ix = None;
                    state.apply_config(config, "custom");
                    state.set_status("Theme imported from URL");
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "fetch failed");
                    state.set_status(format!("Fetch failed: {}", e));
                }
            }
            state.needs_redraw = true;
        }
    }
}
