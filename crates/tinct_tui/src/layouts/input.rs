//! Input bar: bordered bottom strip for value entry and prompts.

use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::style::{background_style, border_focused_style, border_style};
use crate::theme::ChromePalette;

/// Horizontal padding inside the input block (each side).
pub const INPUT_PADDING_H: u16 = 2;

/// Icon shown at the start of the input line.
pub const INPUT_ICON: &str = "▸ ";

/// Block for the input area with rounded border and horizontal padding.
/// Focused (an edit or prompt is active) uses the focused border color.
pub fn block_for_input_bordered(palette: &ChromePalette, focused: bool) -> Block<'static> {
    let border = if focused {
        border_focused_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(background_style(palette.status_bar_background))
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}
