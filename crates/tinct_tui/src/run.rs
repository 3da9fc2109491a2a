//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on
//! terminal input. Remote fetches go out over `fetch_tx` and come back as
//! [AppEvent]s on `event_rx`; attempt-once, no cancellation.

use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc as tokio_mpsc;

use tinct_core::{ThemeStore, portable, share};

use crate::events::{AppEvent, apply_app_event};
use crate::state::{InputCommit, InputMode, Screen, TuiState};
use crate::theme::Appearance;
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Run the TUI: alternate screen, raw mode, event loop.
///
/// `fetch_tx`/`event_rx` connect to the fetch worker; `log_rx`, when given,
/// feeds tracing output into the debug traces screen (Ctrl+D).
pub fn run_tui(
    store: ThemeStore,
    appearance: Appearance,
    fetch_tx: tokio_mpsc::Sender<String>,
    event_rx: tokio_mpsc::Receiver<AppEvent>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::new(store, appearance);
    state.push_trace_line("[log] tinct TUI started. Ctrl+D toggles runtime logs.".to_string());
    let result = run_loop(&mut terminal, &mut state, &fetch_tx, event_rx, log_rx);

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    fetch_tx: &tokio_mpsc::Sender<String>,
    mut event_rx: tokio_mpsc::Receiver<AppEvent>,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
            {
                let _ = key_tx.send(ev);
            }
        }
    });

    loop {
        // Drain tracing lines into debug traces (multi-line logs split up)
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        // Drain fetch results
        while let Ok(ev) = event_rx.try_recv() {
            apply_app_event(state, ev);
        }

        // Clear transient status after the timeout
        if let Some(set_at) = state.status_set_at
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.status.clear();
            state.status_set_at = None;
            state.needs_redraw = true;
        }

        if state.needs_redraw {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if let Ok(ev) = key_rx.try_recv() {
            match ev {
                Event::Key(e) => {
                    if e.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(state, e, fetch_tx) {
                        break;
                    }
                }
                Event::Resize(_, _) => state.needs_redraw = true,
                _ => {}
            }
        } else {
            std::thread::sleep(Duration::from_millis(50));
        }
    }
    Ok(())
}

/// Dispatch one key press. Returns true when the TUI should exit.
fn handle_key(state: &mut TuiState, e: KeyEvent, fetch_tx: &tokio_mpsc::Sender<String>) -> bool {
    if e.code == KeyCode::Char('c') && e.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if e.code == KeyCode::Char('d') && e.modifiers.contains(KeyModifiers::CONTROL) {
        state.screen = match state.screen {
            Screen::DebugTraces => Screen::Customizer,
            _ => Screen::DebugTraces,
        };
        state.needs_redraw = true;
        return false;
    }

    if state.input_mode.is_editing() {
        handle_input_key(state, e, fetch_tx);
        return false;
    }

    match state.screen {
        Screen::Customizer => handle_customizer_key(state, e),
        Screen::Community => {
            handle_community_key(state, e);
            false
        }
        Screen::DebugTraces => {
            handle_traces_key(state, e);
            false
        }
    }
}

fn handle_input_key(state: &mut TuiState, e: KeyEvent, fetch_tx: &tokio_mpsc::Sender<String>) {
    match e.code {
        KeyCode::Esc => state.cancel_input(),
        KeyCode::Enter => {
            let commit = state.commit_input();
            perform_commit(state, commit, fetch_tx);
        }
        KeyCode::Backspace => state.input_backspace(),
        KeyCode::Delete => state.input_delete(),
        KeyCode::Left => state.input_cursor_left(),
        KeyCode::Right => state.input_cursor_right(),
        KeyCode::Home => state.input_cursor_home(),
        KeyCode::End => state.input_cursor_end(),
        KeyCode::Char('u') if e.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input_clear_line()
        }
        KeyCode::Char(c) => state.input_insert(c),
        _ => {}
    }
}

/// Run the side effect of a committed prompt: file IO, clipboard, or the
/// fetch channel. Failures become status-line notifications; the in-memory
/// theme is only replaced on success.
fn perform_commit(state: &mut TuiState, commit: InputCommit, fetch_tx: &tokio_mpsc::Sender<String>) {
    match commit {
        InputCommit::None => {}
        InputCommit::Export(path) => match portable::export_theme(Path::new(&path), &state.config)
        {
            Ok(()) => state.set_status(format!("Exported to {}", path)),
            Err(e) => state.set_status(format!("Export failed: {}", e)),
        },
        InputCommit::Import(path) => match portable::import_theme(Path::new(&path)) {
            Ok(config) => {
                state.preset_ix = None;
                state.apply_config(config, "custom");
                state.set_status(format!("Imported {}", path));
            }
            Err(e) => state.set_status(format!("Import failed: {}", e)),
        },
        InputCommit::Share(name) => share_and_copy(state, &name),
        InputCommit::Fetch(url) => {
            if fetch_tx.try_send(url).is_ok() {
                state.is_fetching = true;
                state.set_status("Fetching…");
            } else {
                state.set_status("Fetch failed: worker unavailable");
            }
        }
    }
}

/// Build the share link and copy it to the clipboard; when the clipboard is
/// unavailable, fall back to logging the link so it is still reachable.
fn share_and_copy(state: &mut TuiState, name: &str) {
    match share::share_url(&state.config, name, share::DEFAULT_BASE_URL) {
        Ok(url) => {
            if cli_clipboard::set_contents(url.clone()).is_ok() {
                state.set_status("Share link copied to clipboard");
            } else {
                state.set_status("Clipboard unavailable — link in runtime logs (Ctrl+D)");
            }
            tracing::info!(link = %url, "share link generated");
            state.push_trace_line(format!("[share] {}", url));
        }
        Err(e) => state.set_status(format!("Share failed: {}", e)),
    }
}

fn handle_customizer_key(state: &mut TuiState, e: KeyEvent) -> bool {
    match e.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::BackTab => state.select_prev(),
        KeyCode::Down | KeyCode::Tab => state.select_next(),
        KeyCode::Enter => state.begin_edit(),
        KeyCode::Char('+') | KeyCode::Char('=') => state.nudge_radius(0.1),
        KeyCode::Char('-') => state.nudge_radius(-0.1),
        KeyCode::Char('p') => state.cycle_preset(),
        KeyCode::Char('r') => state.reset(),
        KeyCode::Char('e') => state.begin_prompt(InputMode::ExportPath),
        KeyCode::Char('i') => state.begin_prompt(InputMode::ImportPath),
        KeyCode::Char('s') => state.begin_prompt(InputMode::ShareName),
        KeyCode::Char('f') => state.begin_prompt(InputMode::FetchUrl),
        KeyCode::Char('c') => {
            state.screen = Screen::Community;
            state.needs_redraw = true;
        }
        KeyCode::Char('a') => state.toggle_appearance(),
        _ => {}
    }
    false
}

fn handle_community_key(state: &mut TuiState, e: KeyEvent) {
    match e.code {
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
            state.screen = Screen::Customizer;
            state.needs_redraw = true;
        }
        KeyCode::Up => state.community_prev(),
        KeyCode::Down => state.community_next(),
        KeyCode::Enter => {
            state.apply_selected_community();
            state.screen = Screen::Customizer;
        }
        _ => {}
    }
}

fn handle_traces_key(state: &mut TuiState, e: KeyEvent) {
    match e.code {
        KeyCode::Esc => {
            state.screen = Screen::Customizer;
            state.needs_redraw = true;
        }
        KeyCode::Up => state.trace_scroll_up(1),
        KeyCode::Down => state.trace_scroll_down(1),
        KeyCode::PageUp => state.trace_scroll_up(10),
        KeyCode::PageDown => state.trace_scroll_down(10),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (tempfile::TempDir, TuiState) {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path());
        (dir, TuiState::new(store, Appearance::Dark))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn channel() -> (
        tokio_mpsc::Sender<String>,
        tokio_mpsc::Receiver<String>,
    ) {
        tokio_mpsc::channel(4)
    }

    #[test]
    fn q_quits_from_customizer() {
        let (_dir, mut state) = state();
        let (tx, _rx) = channel();
        assert!(handle_key(&mut state, key(KeyCode::Char('q')), &tx));
    }

    #[test]
    fn ctrl_d_toggles_traces() {
        let (_dir, mut state) = state();
        let (tx, _rx) = channel();
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        handle_key(&mut state, ctrl_d, &tx);
        assert_eq!(state.screen, Screen::DebugTraces);
        handle_key(&mut state, ctrl_d, &tx);
        assert_eq!(state.screen, Screen::Customizer);
    }

    #[test]
    fn typed_hex_flows_into_config() {
        let (_dir, mut state) = state();
        let (tx, _rx) = channel();
        handle_key(&mut state, key(KeyCode::Enter), &tx);
        assert_eq!(state.input_mode, InputMode::EditHex);
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &tx,
        );
        for c in "#ff0000".chars() {
            handle_key(&mut state, key(KeyCode::Char(c)), &tx);
        }
        handle_key(&mut state, key(KeyCode::Enter), &tx);
        assert_eq!(state.config.primary, "0 100% 50%");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn fetch_prompt_sends_url_to_worker() {
        let (_dir, mut state) = state();
        let (tx, mut rx) = channel();
        handle_key(&mut state, key(KeyCode::Char('f')), &tx);
        for c in "https://example.com/t.json".chars() {
            handle_key(&mut state, key(KeyCode::Char(c)), &tx);
        }
        handle_key(&mut state, key(KeyCode::Enter), &tx);
        assert!(state.is_fetching);
        assert_eq!(rx.try_recv().unwrap(), "https://example.com/t.json");
    }

    #[test]
    fn community_enter_applies_and_returns() {
        let (_dir, mut state) = state();
        let (tx, _rx) = channel();
        handle_key(&mut state, key(KeyCode::Char('c')), &tx);
        assert_eq!(state.screen, Screen::Community);
        handle_key(&mut state, key(KeyCode::Down), &tx);
        handle_key(&mut state, key(KeyCode::Enter), &tx);
        assert_eq!(state.screen, Screen::Customizer);
        assert_eq!(state.preset_label, state.community[1].id);
    }

    #[test]
    fn esc_cancels_edit_without_mutation() {
        let (_dir, mut state) = state();
        let (tx, _rx) = channel();
        let before = state.config.clone();
        handle_key(&mut state, key(KeyCode::Enter), &tx);
        for c in "#123456".chars() {
            handle_key(&mut state, key(KeyCode::Char(c)), &tx);
        }
        handle_key(&mut state, key(KeyCode::Esc), &tx);
        assert_eq!(state.config, before);
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
