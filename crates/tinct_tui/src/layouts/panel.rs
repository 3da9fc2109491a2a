//! Bordered panel layout: outer area, inner padded content area, and chrome-backed block.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use super::style::{background_style, border_focused_style, border_style};
use crate::theme::ChromePalette;
use crate::utils::{HORIZONTAL_PADDING, padding};

/// Bordered panel: computes the inner [Rect] and a [Block] to render.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Full area of the panel (including border).
    pub outer: Rect,
    /// Inner area after border and padding (where content goes).
    pub inner: Rect,
}

impl PanelLayout {
    /// Build panel layout for `area` with inner padding inside the border.
    pub fn new(area: Rect, padding_h: u16, padding_v: u16) -> Self {
        let after_border = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        let inner = padding(after_border, padding_h, padding_v);
        Self { outer: area, inner }
    }

    /// Panel with default horizontal padding, no vertical padding.
    pub fn bordered(area: Rect) -> Self {
        Self::new(area, HORIZONTAL_PADDING, 0)
    }
}

/// Build a [Block] for the given [PanelLayout] and chrome palette.
/// Draw this block in `layout.outer`, then render content in `layout.inner`.
pub fn block_for_panel(
    _layout: &PanelLayout,
    palette: &ChromePalette,
    title: &str,
    focused: bool,
) -> Block<'static> {
    let border_color = if focused {
        border_focused_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_color)
        .style(background_style(palette.surface_background))
}
