//! TUI color handling: chrome palette and the live preview palette.
//!
//! [ChromePalette] styles the app itself (header, panels, input bar).
//! [PreviewPalette] is the style sink the edited theme is applied to; the
//! preview panel renders from it.
//!
//! # Example
//!
//! ```ignore
//! use tinct_tui::theme::{Appearance, ChromePalette, PreviewPalette};
//!
//! let chrome = ChromePalette::for_appearance(Appearance::Dark);
//! let preview = PreviewPalette::from_config(&config);
//! let primary = preview.primary.tuple(); // (r, g, b) for ratatui
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::{ChromePalette, PreviewPalette};
pub use rgb::Rgb;
