//! TUI view: header (fixed top), screen body, input bar + shortcut (fixed bottom).

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use tinct_core::hsl_to_hex;

use crate::layouts::{
    HEADER_STATUS_READY, HEADER_TITLE, INPUT_ICON, PanelLayout, accent_style, background_style,
    block_for_input_bordered, block_for_panel, border_style, horizontal_split, main_splits,
    render_header, selected_style, shortcut_inner_rect, shortcut_line, text_muted_style,
    text_style, vertical_split,
};
use crate::preview::preview_lines;
use crate::state::{Field, Screen, TuiState};
use crate::utils::{LEFT_PADDING, truncate_ellipsis};

/// Draw the full TUI: customizer, community browser, or debug traces.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    match state.screen {
        Screen::DebugTraces => draw_debug_traces(frame, state, area),
        Screen::Community => draw_community(frame, state, area),
        Screen::Customizer => draw_customizer(frame, state, area),
    }
}

fn header_status(state: &TuiState) -> (&str, bool) {
    let status = if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    let has_error = {
        let lower = status.to_lowercase();
        lower.contains("failed") || lower.contains("error") || lower.contains("not a")
    };
    (status, has_error)
}

/// Customizer: fields panel left, live preview right, input bar + hints below.
fn draw_customizer(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits(area);
    let palette = state.palette.clone();

    let (status, has_error) = header_status(state);
    let status = status.to_string();
    render_header(
        frame,
        splits.header,
        &palette,
        HEADER_TITLE,
        &status,
        state.is_fetching,
        has_error,
    );

    // ---- Body: fields | preview ----
    frame.render_widget(
        Block::default().style(background_style(palette.background)),
        splits.body,
    );
    let left_w = (splits.body.width / 2).min(44);
    let (left, right) = horizontal_split(splits.body, left_w);

    let fields_layout = PanelLayout::bordered(left);
    let fields_block = block_for_panel(&fields_layout, &palette, "Theme", true);
    frame.render_widget(fields_block, fields_layout.outer);
    let fields = field_lines(state);
    frame.render_widget(Paragraph::new(fields), fields_layout.inner);

    let preview_layout = PanelLayout::bordered(right);
    let preview_block = block_for_panel(&preview_layout, &palette, "Preview", false);
    frame.render_widget(preview_block, preview_layout.outer);
    let lines = preview_lines(&state.preview, preview_layout.inner.width as usize);
    frame.render_widget(
        Paragraph::new(lines).style(background_style(state.preview.background)),
        preview_layout.inner,
    );

    draw_footer(frame, state, splits.footer);
}

/// Rows for the fields panel: preset line, the eight colors, the radius.
fn field_lines(state: &TuiState) -> Vec<Line<'static>> {
    let palette = &state.palette;
    let mut lines = Vec::with_capacity(Field::COUNT + 2);

    lines.push(Line::from(vec![
        Span::styled("Preset: ".to_string(), text_muted_style(palette.text_muted)),
        Span::styled(state.preset_label.clone(), text_style(palette.text)),
    ]));
    lines.push(Line::from(""));

    for ix in 0..Field::COUNT {
        let field = Field::at(ix);
        let selected = ix == state.selected;
        let marker = if selected { "▸ " } else { LEFT_PADDING };
        let marker_span = Span::styled(marker.to_string(), accent_style(palette.accent));
        let label_span = Span::styled(
            format!("{:<12}", field.label()),
            if selected {
                text_style(palette.text).add_modifier(Modifier::BOLD)
            } else {
                text_style(palette.text)
            },
        );
        let mut spans = vec![marker_span, label_span];
        match field {
            Field::Color(color) => {
                let hsl = state.config.color(color);
                let chip = crate::theme::Rgb::from_hsl(hsl);
                spans.push(Span::styled(
                    "██ ".to_string(),
                    text_style(chip),
                ));
                spans.push(Span::styled(hsl_to_hex(hsl), text_style(palette.text)));
                spans.push(Span::styled(
                    format!("  {}", truncate_ellipsis(hsl, 18)),
                    text_muted_style(palette.text_muted),
                ));
            }
            Field::Radius => {
                spans.push(Span::styled(
                    format!("{:<4}", state.config.radius),
                    text_style(palette.text),
                ));
                spans.push(Span::styled(
                    radius_bar(state.config.radius),
                    text_muted_style(palette.text_muted),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// A ten-step slider for the radius, e.g. `──●───────` for 0.2.
fn radius_bar(radius: f64) -> String {
    let steps = 10usize;
    let pos = ((radius.clamp(0.0, 1.0) * steps as f64).round() as usize).min(steps);
    let mut bar = String::new();
    for i in 0..=steps {
        bar.push(if i == pos { '●' } else { '─' });
    }
    bar
}

/// Community browser: list of curated themes; Enter applies the selection.
fn draw_community(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits(area);
    let palette = state.palette.clone();

    let (status, has_error) = header_status(state);
    let status = status.to_string();
    render_header(
        frame,
        splits.header,
        &palette,
        HEADER_TITLE,
        &status,
        state.is_fetching,
        has_error,
    );

    frame.render_widget(
        Block::default().style(background_style(palette.background)),
        splits.body,
    );
    let layout = PanelLayout::bordered(splits.body);
    let block = block_for_panel(&layout, &palette, "Community themes", true);
    frame.render_widget(block, layout.outer);

    let mut lines = Vec::with_capacity(state.community.len() * 2);
    for (ix, theme) in state.community.iter().enumerate() {
        let selected = ix == state.community_selected;
        let marker = if selected { "▸ " } else { LEFT_PADDING };
        let chip = crate::theme::Rgb::from_hsl(&theme.config.primary);
        let name_style = if selected {
            text_style(palette.text)
                .add_modifier(Modifier::BOLD)
                .patch(selected_style(palette.element_selected))
        } else {
            text_style(palette.text)
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), accent_style(palette.accent)),
            Span::styled("██ ".to_string(), text_style(chip)),
            Span::styled(format!("{:<18}", theme.name), name_style),
            Span::styled(
                format!("{:<18}", theme.author),
                text_muted_style(palette.text_muted),
            ),
            Span::styled(
                format!("[{}]", theme.tags.join(", ")),
                text_muted_style(palette.text_disabled),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", theme.description),
            text_muted_style(palette.text_muted),
        )));
    }
    frame.render_widget(Paragraph::new(lines), layout.inner);

    draw_footer(frame, state, splits.footer);
}

/// Runtime logs screen: scrollable tracing output. Ctrl+D to close.
fn draw_debug_traces(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let palette = &state.palette;
    let title = " Runtime logs (Ctrl+D to close) ";
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height = state.trace_lines.len();
    let viewport_height = inner.height as usize;
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);
    let offset = max_scroll - state.trace_scroll;

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(offset)
        .take(viewport_height)
        .map(|s| {
            Line::from(Span::styled(
                s.clone(),
                text_muted_style(palette.text_muted),
            ))
        })
        .collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Footer: input block (with mode prompt when editing) + shortcut hints.
fn draw_footer(frame: &mut Frame, state: &TuiState, footer: Rect) {
    let palette = &state.palette;
    let editing = state.input_mode.is_editing();
    let (input_rect, shortcut_rect) = vertical_split(footer, 3);

    let mut block = block_for_input_bordered(palette, editing);
    if editing {
        block = block.title(format!(" {} ", state.input_mode.prompt()));
    }
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let placeholder = "Enter: edit the selected field";
    let (icon_style, content_style) = if editing {
        (accent_style(palette.accent), text_style(palette.text))
    } else {
        (
            text_muted_style(palette.text_muted),
            text_muted_style(palette.text_placeholder),
        )
    };
    let content = if editing {
        state.input_buffer.clone()
    } else {
        placeholder.to_string()
    };
    let input_line = Line::from(vec![
        Span::styled(INPUT_ICON.to_string(), icon_style),
        Span::styled(content, content_style),
    ]);
    frame.render_widget(Paragraph::new(input_line), inner);

    if editing {
        // Cursor column by display width (unicode-width)
        let icon_width = INPUT_ICON.width();
        let before_cursor = &state.input_buffer[..state.input_cursor.min(state.input_buffer.len())];
        let cursor_col_offset = before_cursor.width();
        let cursor_col =
            (inner.x + icon_width as u16 + cursor_col_offset as u16).min(inner.x + inner.width);
        frame.set_cursor_position((cursor_col, inner.y));
    }

    let shortcut_inner = shortcut_inner_rect(shortcut_rect);
    frame.render_widget(
        Paragraph::new(shortcut_line(palette, state.screen, editing)),
        shortcut_inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_bar_positions() {
        assert!(radius_bar(0.0).starts_with('●'));
        assert!(radius_bar(1.0).ends_with('●'));
        assert_eq!(radius_bar(0.5).chars().filter(|c| *c == '●').count(), 1);
        assert_eq!(radius_bar(0.5).chars().count(), 11);
        // Out-of-range input clamps rather than panics
        assert!(radius_bar(5.0).ends_with('●'));
    }
}
