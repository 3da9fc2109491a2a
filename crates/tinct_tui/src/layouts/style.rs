//! Map chrome palette colors to ratatui styles for layout components.
//!
//! All chrome colors come from [crate::theme::ChromePalette]; use these
//! helpers so borders, backgrounds, and text stay consistent.

use ratatui::style::{Color, Style};

use crate::theme::Rgb;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Style for panel borders (border color, no fill).
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

/// Style for panel background only (e.g. inner fill).
pub fn background_style(bg_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg_rgb))
}

/// Style for focused panel border.
pub fn border_focused_style(border_focused_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_focused_rgb))
}

/// Style for primary text on a panel.
pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

/// Style for muted/secondary text.
pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

/// Style for the selected row (background highlight).
pub fn selected_style(selected_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(selected_rgb))
}

/// Style for accent elements (selection marker, active hints).
pub fn accent_style(accent_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(accent_rgb))
}

/// Style for success state (saved, copied).
pub fn success_style(success_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success_rgb))
}

/// Style for error state (import failed, fetch failed).
pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}

/// Style for in-flight state (fetching).
pub fn warning_style(warning_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(warning_rgb))
}
