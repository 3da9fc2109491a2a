//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]** — Split the screen into header, body, footer or left/right.
//! - **[panel]** — Bordered panel with inner padded rect and chrome-backed block.
//! - **[style]** — Map [crate::theme::Rgb] to ratatui [ratatui::style::Style] for borders and text.
//! - **[head]** — Header strip layout and styled header line.
//! - **[input]** — Input bar layout and block.
//! - **[shortcut]** — Shortcut hint line (below input).

mod head;
mod input;
mod panel;
mod shortcut;
mod split;
mod style;

pub use head::{HEADER_STATUS_READY, HEADER_TITLE, render_header};
pub use input::{INPUT_ICON, INPUT_PADDING_H, block_for_input_bordered};
pub use panel::{PanelLayout, block_for_panel};
pub use shortcut::{shortcut_inner_rect, shortcut_line};
pub use split::{
    FOOTER_HEIGHT, HEADER_HEIGHT, MainSplits, horizontal_split, main_splits,
    main_splits_with_padding, vertical_split,
};
pub use style::{
    accent_style, background_style, border_focused_style, border_style, danger_style,
    rgb_to_color, selected_style, success_style, text_muted_style, text_style, warning_style,
};
