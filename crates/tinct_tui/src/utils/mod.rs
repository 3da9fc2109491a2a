//! Shared utilities for the tinct TUI.
//!
//! - **[constants]** — Spacing and padding constants.
//! - **[layout]** — Rect padding helpers.
//! - **[format]** — String truncation for status lines.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::truncate_ellipsis;
pub use layout::{horizontal_padding, horizontal_padding_with, padding, vertical_padding};
