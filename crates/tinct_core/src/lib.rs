pub mod apply;
pub mod color;
pub mod community;
pub mod config;
pub mod error;
pub mod portable;
pub mod presets;
pub mod remote;
pub mod share;
pub mod store;

pub use apply::{StyleSink, apply_theme, resolve_style_vars, theme_css};
pub use color::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, is_hex_color};
pub use community::CommunityTheme;
pub use config::{ColorField, ThemeConfig, theme_from_json};
pub use error::{Result, ThemeError};
pub use portable::{EXPORT_FILE, export_theme, import_theme};
pub use presets::Preset;
pub use remote::fetch_theme;
pub use share::{SharedTheme, parse_shared, share_url};
pub use store::{THEME_KEY, ThemeStore};
