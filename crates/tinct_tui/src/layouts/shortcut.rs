//! Shortcut hint line: fixed line below the input bar, context-aware.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::state::Screen;
use crate::theme::ChromePalette;

/// Horizontal inset so the hint aligns with input content (border + input padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the shortcut line, padded to align with the input content above.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let inset = SHORTCUT_INSET_H;
    let w = area.width.saturating_sub(inset.saturating_mul(2));
    Rect {
        x: area.x.saturating_add(inset),
        y: area.y,
        width: w,
        height: area.height,
    }
}

/// Build the hint line for the footer. Dynamic based on state:
/// - During a prompt/edit: confirm-or-cancel hints.
/// - Community screen: navigate/apply hints.
/// - Traces screen: scroll/close hints.
/// - Otherwise: the customizer key map.
pub fn shortcut_line(palette: &ChromePalette, screen: Screen, editing: bool) -> Line<'static> {
    let hint = if editing {
        "Enter: apply  ·  Esc: cancel"
    } else {
        match screen {
            Screen::Community => "↑↓: select  ·  Enter: apply  ·  Esc: back  ·  q: quit",
            Screen::DebugTraces => "↑↓/PgUp/PgDn: scroll  ·  Ctrl+D/Esc: close",
            Screen::Customizer => {
                "↑↓: field  ·  Enter: edit  ·  +/-: radius  ·  p: preset  ·  c: community  ·  s: share  ·  e/i: export/import  ·  f: fetch  ·  r: reset  ·  q: quit"
            }
        }
    };
    Line::from(vec![Span::styled(
        hint.to_string(),
        text_muted_style(palette.text_muted),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_inner_rect_zero_width() {
        let area = Rect::new(0, 0, 0, 1);
        let inner = shortcut_inner_rect(area);
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn shortcut_line_editing() {
        let palette = ChromePalette::dark();
        let line = shortcut_line(&palette, Screen::Customizer, true);
        assert!(line.spans.iter().any(|s| s.content.contains("Esc: cancel")));
    }

    #[test]
    fn shortcut_line_customizer() {
        let palette = ChromePalette::dark();
        let line = shortcut_line(&palette, Screen::Customizer, false);
        assert!(line.spans.iter().any(|s| s.content.contains("preset")));
    }

    #[test]
    fn shortcut_line_community() {
        let palette = ChromePalette::dark();
        let line = shortcut_line(&palette, Screen::Community, false);
        assert!(line.spans.iter().any(|s| s.content.contains("apply")));
    }
}
