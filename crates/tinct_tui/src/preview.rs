//! Live component preview: buttons, a sample card, and a muted strip
//! rendered from the [PreviewPalette].

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::layouts::rgb_to_color;
use crate::theme::{PreviewPalette, Rgb};

fn fg(rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(rgb))
}

fn fg_bg(fg: Rgb, bg: Rgb) -> Style {
    Style::default().fg(rgb_to_color(fg)).bg(rgb_to_color(bg))
}

/// Corner glyphs for the current radius.
fn corners(preview: &PreviewPalette) -> (&'static str, &'static str, &'static str, &'static str) {
    if preview.rounded() {
        ("╭", "╮", "╰", "╯")
    } else {
        ("┌", "┐", "└", "┘")
    }
}

/// Render the preview as lines for a panel of the given inner width.
pub fn preview_lines(preview: &PreviewPalette, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Buttons".to_string(),
        fg(preview.muted_foreground),
    )));
    lines.push(buttons_line(preview));
    lines.push(Line::from(""));

    lines.extend(card_lines(preview, width));
    lines.push(Line::from(""));

    lines.push(muted_strip(preview, width));

    lines
}

/// One row of button variants: primary, secondary, outline, ghost, destructive.
fn buttons_line(preview: &PreviewPalette) -> Line<'static> {
    let gap = Span::raw(" ");
    Line::from(vec![
        Span::styled(" Primary ".to_string(), fg_bg(preview.primary_foreground, preview.primary)),
        gap.clone(),
        Span::styled(
            " Secondary ".to_string(),
            fg_bg(preview.secondary_foreground, preview.secondary),
        ),
        gap.clone(),
        Span::styled("[".to_string(), fg(preview.border)),
        Span::styled(" Outline ".to_string(), fg(preview.foreground)),
        Span::styled("]".to_string(), fg(preview.border)),
        gap.clone(),
        Span::styled(" Ghost ".to_string(), fg(preview.accent_foreground)),
        gap,
        Span::styled(
            " Destructive ".to_string(),
            fg_bg(preview.destructive_foreground, preview.destructive),
        ),
    ])
}

/// A bordered sample card; corners follow the radius.
fn card_lines(preview: &PreviewPalette, width: usize) -> Vec<Line<'static>> {
    let card_w = width.clamp(12, 36);
    let inner_w = card_w - 2;
    let (tl, tr, bl, br) = corners(preview);
    let border = fg(preview.border);
    let edge = "─".repeat(inner_w);
    let card_bg = rgb_to_color(preview.card);

    let pad = |text: &str| format!(" {:<w$}", text, w = inner_w.saturating_sub(1));

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(format!("{tl}{edge}{tr}"), border)));
    lines.push(Line::from(vec![
        Span::styled("│".to_string(), border),
        Span::styled(
            pad("Sample card"),
            Style::default()
                .fg(rgb_to_color(preview.card_foreground))
                .bg(card_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│".to_string(), border),
    ]));
    lines.push(Line::from(vec![
        Span::styled("│".to_string(), border),
        Span::styled(
            pad("Shows the current theme."),
            Style::default().fg(rgb_to_color(preview.muted_foreground)).bg(card_bg),
        ),
        Span::styled("│".to_string(), border),
    ]));
    lines.push(Line::from(Span::styled(format!("{bl}{edge}{br}"), border)));
    lines
}

/// A muted section strip.
fn muted_strip(preview: &PreviewPalette, width: usize) -> Line<'static> {
    let strip_w = width.clamp(12, 36);
    let text = format!(" {:<w$}", "A muted section", w = strip_w.saturating_sub(1));
    Line::from(Span::styled(
        text,
        fg_bg(preview.muted_foreground, preview.muted),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::ThemeConfig;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn preview_shows_all_components() {
        let preview = PreviewPalette::default();
        let text = text_of(&preview_lines(&preview, 40));
        for label in ["Primary", "Secondary", "Outline", "Ghost", "Destructive"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("Sample card"));
        assert!(text.contains("A muted section"));
    }

    #[test]
    fn card_corners_follow_radius() {
        let mut config = ThemeConfig::default();
        config.radius = 0.75;
        let rounded = text_of(&preview_lines(&PreviewPalette::from_config(&config), 40));
        assert!(rounded.contains('╭'));

        config.radius = 0.0;
        let square = text_of(&preview_lines(&PreviewPalette::from_config(&config), 40));
        assert!(square.contains('┌'));
        assert!(!square.contains('╭'));
    }

    #[test]
    fn narrow_width_does_not_panic() {
        let preview = PreviewPalette::default();
        assert!(!preview_lines(&preview, 0).is_empty());
    }
}
