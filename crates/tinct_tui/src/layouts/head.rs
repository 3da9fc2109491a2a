//! Header strip: top bar with title and right-aligned status (colored dot).

use ratatui::Frame;
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::style::{
    background_style, border_style, danger_style, success_style, text_muted_style, text_style,
    warning_style,
};
use crate::theme::ChromePalette;
use crate::utils::horizontal_padding;

/// Default title shown in the header.
pub const HEADER_TITLE: &str = "tinct";

/// Default status when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Build the header line: title (bold) left, right-aligned status with colored dot.
/// busy: yellow dot; has_error: red dot; else green dot.
fn header_line(
    title: &str,
    right: &str,
    busy: bool,
    has_error: bool,
    palette: &ChromePalette,
    width: u16,
) -> Line<'static> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let dot_style = if has_error {
        danger_style(palette.danger)
    } else if busy {
        warning_style(palette.warning)
    } else {
        success_style(palette.success)
    };
    let right_style = text_muted_style(palette.text_muted);
    let left_len = title.len() + 1;
    let right_len = 2 + right.len(); // "● " + status
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(right.to_string(), right_style),
    ])
}

/// Draw the header: two-line block (title line, then border), status with colored dot.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &ChromePalette,
    title: &str,
    status: &str,
    busy: bool,
    has_error: bool,
) {
    let inner = horizontal_padding(area);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.status_bar_background));
    let line = header_line(title, status, busy, has_error, palette, inner.width);
    let bg = background_style(palette.status_bar_background);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_right_aligns_status() {
        let palette = ChromePalette::dark();
        let line = header_line("tinct", "Ready", false, false, &palette, 40);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("tinct"));
        assert!(text.ends_with("Ready"));
        assert_eq!(text.chars().count(), 39); // width minus one spare column
    }

    #[test]
    fn header_line_narrow_width_does_not_panic() {
        let palette = ChromePalette::dark();
        let line = header_line("tinct", "a very long status message", false, false, &palette, 10);
        assert!(!line.spans.is_empty());
    }
}
