//! TUI state: the theme being edited, selection, input modes, screens.
//!
//! [TuiState] holds everything the view needs to render plus the store
//! handle, so every accepted mutation is applied to the preview and
//! persisted in one place ([TuiState::apply_change]).

use std::time::Instant;

use tinct_core::{
    ColorField, CommunityTheme, ThemeConfig, ThemeStore, community, hex_to_hsl, hsl_to_hex,
    is_hex_color, portable, presets,
};

use crate::theme::{Appearance, ChromePalette, PreviewPalette};
use crate::utils::MAX_TRACE_LINES;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Customizer,
    Community,
    DebugTraces,
}

/// One selectable row in the customizer: a color slot or the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Color(ColorField),
    Radius,
}

impl Field {
    /// Color slots first, radius last.
    pub const COUNT: usize = ColorField::ALL.len() + 1;

    pub fn at(index: usize) -> Field {
        ColorField::ALL
            .get(index)
            .copied()
            .map(Field::Color)
            .unwrap_or(Field::Radius)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Color(c) => c.label(),
            Field::Radius => "Radius",
        }
    }
}

/// What the input bar is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Hex value for the selected color slot.
    EditHex,
    /// Numeric radius.
    EditRadius,
    ExportPath,
    ImportPath,
    ShareName,
    FetchUrl,
}

impl InputMode {
    pub fn is_editing(self) -> bool {
        self != InputMode::Normal
    }

    /// Title shown on the input block while this mode is active.
    pub fn prompt(self) -> &'static str {
        match self {
            InputMode::Normal => "",
            InputMode::EditHex => "Hex color",
            InputMode::EditRadius => "Radius",
            InputMode::ExportPath => "Export to",
            InputMode::ImportPath => "Import from",
            InputMode::ShareName => "Share as",
            InputMode::FetchUrl => "Fetch URL",
        }
    }
}

/// Action the run loop must perform after an input commit (file and network
/// side effects stay out of the state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommit {
    None,
    Export(String),
    Import(String),
    Share(String),
    Fetch(String),
}

/// TUI application state.
#[derive(Debug)]
pub struct TuiState {
    /// The theme being edited.
    pub config: ThemeConfig,
    /// Persistence handle; written on every accepted mutation.
    pub store: ThemeStore,
    /// App chrome colors.
    pub palette: ChromePalette,
    pub appearance: Appearance,
    /// Live preview colors, rebuilt from `config` on every change.
    pub preview: PreviewPalette,
    /// Selected row index (see [Field::at]).
    pub selected: usize,
    /// Preset label shown in the fields panel ("slate", "custom", …).
    pub preset_label: String,
    /// Index into the preset catalog while cycling with `p`.
    pub preset_ix: Option<usize>,
    /// Community catalog (static) and list selection.
    pub community: Vec<CommunityTheme>,
    pub community_selected: usize,
    pub input_mode: InputMode,
    /// Current input line (footer).
    pub input_buffer: String,
    /// Byte cursor position within input_buffer (0..=len, on char boundary).
    pub input_cursor: usize,
    /// Status text for the header right side.
    pub status: String,
    /// When set, status is transient and auto-clears after a timeout.
    pub status_set_at: Option<Instant>,
    /// True while a remote fetch is in flight.
    pub is_fetching: bool,
    pub screen: Screen,
    /// Debug trace lines (tracing output). Newest at end.
    pub trace_lines: Vec<String>,
    /// Scroll offset for the trace view (lines scrolled up).
    pub trace_scroll: usize,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Incremented each run_loop iteration for cursor blink.
    pub frame_count: u64,
}

impl TuiState {
    /// Load the persisted theme (or default) and build the initial state.
    pub fn new(store: ThemeStore, appearance: Appearance) -> Self {
        let config = store.load();
        let preview = PreviewPalette::from_config(&config);
        let preset_label = preset_label_for(&config);
        Self {
            config,
            store,
            palette: ChromePalette::for_appearance(appearance),
            appearance,
            preview,
            selected: 0,
            preset_label,
            preset_ix: None,
            community: community::all(),
            community_selected: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_cursor: 0,
            status: String::new(),
            status_set_at: None,
            is_fetching: false,
            screen: Screen::Customizer,
            trace_lines: Vec::new(),
            trace_scroll: 0,
            needs_redraw: true,
            frame_count: 0,
        }
    }

    pub fn current_field(&self) -> Field {
        Field::at(self.selected)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Field::COUNT;
        self.needs_redraw = true;
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Field::COUNT - 1) % Field::COUNT;
        self.needs_redraw = true;
    }

    /// Rebuild the preview and persist. Called after every accepted mutation.
    pub fn apply_change(&mut self) {
        self.preview = PreviewPalette::from_config(&self.config);
        if let Err(e) = self.store.save(&self.config) {
            tracing::warn!(error = %e, "failed to persist theme");
            self.set_status(format!("Save failed: {}", e));
        }
        self.needs_redraw = true;
    }

    /// Replace the whole config (preset, community, import, fetch, share).
    pub fn apply_config(&mut self, config: ThemeConfig, label: impl Into<String>) {
        self.config = config;
        self.preset_label = label.into();
        self.apply_change();
    }

    /// Cycle to the next preset.
    pub fn cycle_preset(&mut self) {
        let catalog = presets::all();
        let ix = match self.preset_ix {
            Some(i) => (i + 1) % catalog.len(),
            None => 0,
        };
        let preset = &catalog[ix];
        self.preset_ix = Some(ix);
        self.apply_config(preset.config.clone(), preset.id);
        self.set_status(format!("Preset: {}", preset.name));
    }

    /// Restore the built-in default.
    pub fn reset(&mut self) {
        self.preset_ix = None;
        self.apply_config(ThemeConfig::default(), "default");
        self.set_status("Theme reset to default");
    }

    // ── Input modes ────────────────────────────────────────────────────

    /// Start editing the selected field: hex for colors, number for radius.
    pub fn begin_edit(&mut self) {
        let (mode, prefill) = match self.current_field() {
            Field::Color(field) => (InputMode::EditHex, hsl_to_hex(self.config.color(field))),
            Field::Radius => (InputMode::EditRadius, format!("{}", self.config.radius)),
        };
        self.enter_mode(mode, prefill);
    }

    /// Start a prompt (export path, import path, share name, fetch url).
    pub fn begin_prompt(&mut self, mode: InputMode) {
        let prefill = match mode {
            InputMode::ExportPath => portable::EXPORT_FILE.to_string(),
            InputMode::ShareName => "My theme".to_string(),
            _ => String::new(),
        };
        self.enter_mode(mode, prefill);
    }

    fn enter_mode(&mut self, mode: InputMode, prefill: String) {
        self.input_mode = mode;
        self.input_cursor = prefill.len();
        self.input_buffer = prefill;
        self.needs_redraw = true;
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Commit the input line. Field edits mutate the config here; prompts
    /// hand the value back to the run loop as an [InputCommit].
    pub fn commit_input(&mut self) -> InputCommit {
        let value = self.input_buffer.trim().to_string();
        match self.input_mode {
            InputMode::Normal => InputCommit::None,
            InputMode::EditHex => {
                if !is_hex_color(&value) {
                    self.set_status("Not a hex color (expected #RRGGBB)");
                    return InputCommit::None;
                }
                if let Field::Color(field) = self.current_field() {
                    self.config.set_color(field, hex_to_hsl(&value));
                    self.mark_custom();
                    self.apply_change();
                    self.set_status(format!("{} updated", field.label()));
                }
                self.cancel_input();
                InputCommit::None
            }
            InputMode::EditRadius => {
                match value.parse::<f64>() {
                    Ok(radius) if radius.is_finite() && radius >= 0.0 => {
                        self.config.radius = radius;
                        self.mark_custom();
                        self.apply_change();
                        self.set_status("Radius updated");
                        self.cancel_input();
                    }
                    _ => self.set_status("Radius must be a non-negative number"),
                }
                InputCommit::None
            }
            InputMode::ExportPath => self.take_prompt(value, InputCommit::Export),
            InputMode::ImportPath => self.take_prompt(value, InputCommit::Import),
            InputMode::ShareName => self.take_prompt(value, InputCommit::Share),
            InputMode::FetchUrl => self.take_prompt(value, InputCommit::Fetch),
        }
    }

    fn take_prompt(&mut self, value: String, commit: fn(String) -> InputCommit) -> InputCommit {
        if value.is_empty() {
            self.set_status("Nothing entered");
            return InputCommit::None;
        }
        self.cancel_input();
        commit(value)
    }

    /// Nudge the radius by `delta`, clamped to [0, 1].
    pub fn nudge_radius(&mut self, delta: f64) {
        let radius = (self.config.radius + delta).clamp(0.0, 1.0);
        // Step in tenths, so repeated nudges land on round values
        self.config.radius = (radius * 10.0).round() / 10.0;
        self.mark_custom();
        self.apply_change();
    }

    fn mark_custom(&mut self) {
        self.preset_label = "custom".to_string();
        self.preset_ix = None;
    }

    // ── Community ──────────────────────────────────────────────────────

    pub fn community_next(&mut self) {
        if !self.community.is_empty() {
            self.community_selected = (self.community_selected + 1) % self.community.len();
            self.needs_redraw = true;
        }
    }

    pub fn community_prev(&mut self) {
        if !self.community.is_empty() {
            self.community_selected =
                (self.community_selected + self.community.len() - 1) % self.community.len();
            self.needs_redraw = true;
        }
    }

    pub fn apply_selected_community(&mut self) {
        if let Some(theme) = self.community.get(self.community_selected) {
            let (id, name, config) = (theme.id, theme.name, theme.config.clone());
            self.preset_ix = None;
            self.apply_config(config, id);
            self.set_status(format!("Applied {}", name));
        }
    }

    // ── Status and traces ──────────────────────────────────────────────

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_set_at = Some(Instant::now());
        self.needs_redraw = true;
    }

    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            let drop = self.trace_lines.len() - MAX_TRACE_LINES;
            self.trace_lines.drain(..drop);
        }
        if self.screen == Screen::DebugTraces {
            self.needs_redraw = true;
        }
    }

    pub fn trace_scroll_up(&mut self, lines: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(lines);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, lines: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(lines);
        self.needs_redraw = true;
    }

    // ── Input line editing ─────────────────────────────────────────────

    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    pub fn input_backspace(&mut self) {
        if let Some(c) = self.input_buffer[..self.input_cursor].chars().next_back() {
            self.input_cursor -= c.len_utf8();
            self.input_buffer.remove(self.input_cursor);
            self.needs_redraw = true;
        }
    }

    pub fn input_delete(&mut self) {
        if self.input_cursor < self.input_buffer.len() {
            self.input_buffer.remove(self.input_cursor);
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_left(&mut self) {
        if let Some(c) = self.input_buffer[..self.input_cursor].chars().next_back() {
            self.input_cursor -= c.len_utf8();
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_right(&mut self) {
        if let Some(c) = self.input_buffer[self.input_cursor..].chars().next() {
            self.input_cursor += c.len_utf8();
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        self.needs_redraw = true;
    }

    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Toggle chrome appearance (does not touch the theme being edited).
    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggled();
        self.palette = ChromePalette::for_appearance(self.appearance);
        self.needs_redraw = true;
    }
}

/// Label for a config: the id of the matching preset, else "custom".
fn preset_label_for(config: &ThemeConfig) -> String {
    if *config == ThemeConfig::default() {
        return "default".to_string();
    }
    presets::all()
        .into_iter()
        .find(|p| p.config == *config)
        .map(|p| p.id.to_string())
        .unwrap_or_else(|| "custom".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (tempfile::TempDir, TuiState) {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path());
        (dir, TuiState::new(store, Appearance::Dark))
    }

    #[test]
    fn new_state_loads_default() {
        let (_dir, state) = state();
        assert_eq!(state.config, ThemeConfig::default());
        assert_eq!(state.preset_label, "default");
        assert_eq!(state.screen, Screen::Customizer);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let (_dir, mut state) = state();
        state.select_prev();
        assert_eq!(state.selected, Field::COUNT - 1);
        assert_eq!(state.current_field(), Field::Radius);
        state.select_next();
        assert_eq!(state.current_field(), Field::Color(ColorField::Primary));
    }

    #[test]
    fn begin_edit_prefills_hex() {
        let (_dir, mut state) = state();
        state.begin_edit();
        assert_eq!(state.input_mode, InputMode::EditHex);
        assert_eq!(state.input_buffer, hsl_to_hex(&state.config.primary));
    }

    #[test]
    fn commit_hex_updates_and_persists() {
        let (_dir, mut state) = state();
        state.begin_edit();
        state.input_clear_line();
        for c in "#2563eb".chars() {
            state.input_insert(c);
        }
        assert_eq!(state.commit_input(), InputCommit::None);
        assert_eq!(state.config.primary, "221 83% 53%");
        assert_eq!(state.preset_label, "custom");
        assert_eq!(state.input_mode, InputMode::Normal);
        // Persisted on mutation
        assert_eq!(state.store.load(), state.config);
    }

    #[test]
    fn commit_bad_hex_keeps_editing() {
        let (_dir, mut state) = state();
        let before = state.config.clone();
        state.begin_edit();
        state.input_clear_line();
        state.input_insert('x');
        state.commit_input();
        assert_eq!(state.config, before);
        assert_eq!(state.input_mode, InputMode::EditHex);
        assert!(state.status.contains("hex"));
    }

    #[test]
    fn radius_edit_rejects_negative() {
        let (_dir, mut state) = state();
        state.selected = Field::COUNT - 1;
        state.begin_edit();
        assert_eq!(state.input_mode, InputMode::EditRadius);
        state.input_clear_line();
        for c in "-1".chars() {
            state.input_insert(c);
        }
        state.commit_input();
        assert_eq!(state.config.radius, 0.5);
        assert_eq!(state.input_mode, InputMode::EditRadius);
    }

    #[test]
    fn nudge_radius_clamps_and_steps() {
        let (_dir, mut state) = state();
        for _ in 0..10 {
            state.nudge_radius(0.1);
        }
        assert_eq!(state.config.radius, 1.0);
        state.nudge_radius(-0.1);
        assert_eq!(state.config.radius, 0.9);
        assert_eq!(state.preset_label, "custom");
    }

    #[test]
    fn cycle_preset_walks_catalog() {
        let (_dir, mut state) = state();
        state.cycle_preset();
        assert_eq!(state.preset_label, "slate");
        state.cycle_preset();
        assert_eq!(state.preset_label, "gray");
        assert_eq!(state.config, presets::find("gray").unwrap().config);
    }

    #[test]
    fn edit_after_preset_marks_custom() {
        let (_dir, mut state) = state();
        state.cycle_preset();
        state.nudge_radius(0.1);
        assert_eq!(state.preset_label, "custom");
        // Cycling again starts from the top of the catalog
        state.cycle_preset();
        assert_eq!(state.preset_label, "slate");
    }

    #[test]
    fn reset_restores_default() {
        let (_dir, mut state) = state();
        state.nudge_radius(0.3);
        state.reset();
        assert_eq!(state.config, ThemeConfig::default());
        assert_eq!(state.preset_label, "default");
        assert_eq!(state.store.load(), ThemeConfig::default());
    }

    #[test]
    fn community_apply_replaces_config() {
        let (_dir, mut state) = state();
        state.community_next();
        state.apply_selected_community();
        let expected = state.community[1].config.clone();
        assert_eq!(state.config, expected);
        assert_eq!(state.preset_label, state.community[1].id);
    }

    #[test]
    fn prompt_commit_returns_value() {
        let (_dir, mut state) = state();
        state.begin_prompt(InputMode::FetchUrl);
        for c in "https://example.com/theme.json".chars() {
            state.input_insert(c);
        }
        assert_eq!(
            state.commit_input(),
            InputCommit::Fetch("https://example.com/theme.json".to_string())
        );
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn empty_prompt_commit_is_rejected() {
        let (_dir, mut state) = state();
        state.begin_prompt(InputMode::ImportPath);
        assert_eq!(state.commit_input(), InputCommit::None);
        assert_eq!(state.input_mode, InputMode::ImportPath);
    }

    #[test]
    fn export_prompt_prefills_default_file() {
        let (_dir, mut state) = state();
        state.begin_prompt(InputMode::ExportPath);
        assert_eq!(state.input_buffer, portable::EXPORT_FILE);
    }

    #[test]
    fn trace_lines_are_capped() {
        let (_dir, mut state) = state();
        for i in 0..(MAX_TRACE_LINES + 10) {
            state.push_trace_line(format!("line {i}"));
        }
        assert_eq!(state.trace_lines.len(), MAX_TRACE_LINES);
        assert_eq!(state.trace_lines[0], "line 10");
    }

    #[test]
    fn input_editing_handles_cursor() {
        let (_dir, mut state) = state();
        state.begin_prompt(InputMode::ShareName);
        state.input_clear_line();
        for c in "abc".chars() {
            state.input_insert(c);
        }
        state.input_cursor_left();
        state.input_backspace();
        assert_eq!(state.input_buffer, "ac");
        state.input_cursor_home();
        state.input_delete();
        assert_eq!(state.input_buffer, "c");
        state.input_cursor_end();
        assert_eq!(state.input_cursor, 1);
    }

    #[test]
    fn toggle_appearance_swaps_chrome() {
        let (_dir, mut state) = state();
        let dark = state.palette.clone();
        state.toggle_appearance();
        assert_ne!(state.palette, dark);
        assert_eq!(state.appearance, Appearance::Light);
    }
}
