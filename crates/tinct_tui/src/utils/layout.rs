//! Rect padding helpers.

use ratatui::layout::Rect;

use crate::utils::constants::HORIZONTAL_PADDING;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

/// Apply horizontal padding with a custom amount.
#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

/// Apply vertical padding to a Rect (symmetric top/bottom).
#[inline]
pub fn vertical_padding(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y.saturating_add(pad),
        width: area.width,
        height: area.height.saturating_sub(pad.saturating_mul(2)),
    }
}

/// Apply padding on all four sides.
#[inline]
pub fn padding(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal.saturating_mul(2)),
        height: area.height.saturating_sub(vertical.saturating_mul(2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_padding_shrinks_width() {
        let area = Rect::new(0, 0, 20, 5);
        let padded = horizontal_padding(area);
        assert_eq!(padded.x, HORIZONTAL_PADDING);
        assert_eq!(padded.width, 20 - HORIZONTAL_PADDING * 2);
        assert_eq!(padded.height, 5);
    }

    #[test]
    fn padding_saturates_on_small_rects() {
        let area = Rect::new(0, 0, 2, 1);
        let padded = padding(area, 4, 4);
        assert_eq!(padded.width, 0);
        assert_eq!(padded.height, 0);
    }
}
