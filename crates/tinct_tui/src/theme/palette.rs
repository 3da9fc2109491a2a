//! Palettes: app chrome roles and the live preview sink.

use tinct_core::{StyleSink, ThemeConfig, apply_theme};

use super::Appearance;
use super::rgb::Rgb;

/// Colors for the app chrome (header, panels, input bar, hints). Fixed per
/// appearance; not affected by the theme being edited.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromePalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Panel and card area.
    pub surface_background: Rgb,
    /// Header and input bar strip.
    pub status_bar_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Elements
    pub element_selected: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_disabled: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
}

impl ChromePalette {
    /// Default dark chrome.
    pub fn dark() -> Self {
        Self {
            background: Rgb(10, 10, 14),
            surface_background: Rgb(17, 18, 25),
            status_bar_background: Rgb(17, 18, 25),
            border: Rgb(32, 34, 46),
            border_focused: Rgb(112, 156, 255),
            element_selected: Rgb(38, 42, 62),
            text: Rgb(204, 212, 242),
            text_muted: Rgb(96, 104, 138),
            text_placeholder: Rgb(96, 104, 138),
            text_disabled: Rgb(66, 70, 104),
            accent: Rgb(112, 156, 255),
            success: Rgb(128, 220, 128),
            warning: Rgb(238, 186, 102),
            danger: Rgb(252, 106, 124),
        }
    }

    /// Light chrome.
    pub fn light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            surface_background: Rgb(250, 250, 250),
            status_bar_background: Rgb(250, 250, 250),
            border: Rgb(228, 228, 231),
            border_focused: Rgb(94, 140, 240),
            element_selected: Rgb(229, 231, 240),
            text: Rgb(28, 30, 42),
            text_muted: Rgb(110, 118, 150),
            text_placeholder: Rgb(110, 118, 150),
            text_disabled: Rgb(168, 170, 182),
            accent: Rgb(94, 140, 240),
            success: Rgb(92, 170, 92),
            warning: Rgb(214, 158, 74),
            danger: Rgb(226, 94, 114),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}

/// The style sink the edited theme is applied to: each resolved style
/// variable lands in a slot here (colors converted HSL→RGB), and the preview
/// panel renders from these slots. Variables the preview has no use for are
/// ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewPalette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub primary: Rgb,
    pub primary_foreground: Rgb,
    pub secondary: Rgb,
    pub secondary_foreground: Rgb,
    pub accent: Rgb,
    pub accent_foreground: Rgb,
    pub destructive: Rgb,
    pub destructive_foreground: Rgb,
    pub muted: Rgb,
    pub muted_foreground: Rgb,
    pub card: Rgb,
    pub card_foreground: Rgb,
    pub border: Rgb,
    pub ring: Rgb,
    /// Corner radius in the theme's abstract units (typically 0.0–1.0).
    pub radius: f64,
}

impl PreviewPalette {
    /// Resolve and apply `config`, producing the palette the preview draws
    /// from.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut palette = Self::zeroed();
        apply_theme(config, &mut palette);
        palette
    }

    /// Corners render rounded once the radius passes a quarter unit.
    pub fn rounded(&self) -> bool {
        self.radius >= 0.25
    }

    fn zeroed() -> Self {
        let black = Rgb(0, 0, 0);
        Self {
            background: black,
            foreground: black,
            primary: black,
            primary_foreground: black,
            secondary: black,
            secondary_foreground: black,
            accent: black,
            accent_foreground: black,
            destructive: black,
            destructive_foreground: black,
            muted: black,
            muted_foreground: black,
            card: black,
            card_foreground: black,
            border: black,
            ring: black,
            radius: 0.0,
        }
    }
}

impl Default for PreviewPalette {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl StyleSink for PreviewPalette {
    fn set_var(&mut self, name: &str, value: &str) {
        if name == "radius" {
            self.radius = value.trim_end_matches("rem").parse().unwrap_or(0.0);
            return;
        }
        let rgb = Rgb::from_hsl(value);
        match name {
            "background" => self.background = rgb,
            "foreground" => self.foreground = rgb,
            "primary" => self.primary = rgb,
            "primary-foreground" => self.primary_foreground = rgb,
            "secondary" => self.secondary = rgb,
            "secondary-foreground" => self.secondary_foreground = rgb,
            "accent" => self.accent = rgb,
            "accent-foreground" => self.accent_foreground = rgb,
            "destructive" => self.destructive = rgb,
            "destructive-foreground" => self.destructive_foreground = rgb,
            "muted" => self.muted = rgb,
            "muted-foreground" => self.muted_foreground = rgb,
            "card" => self.card = rgb,
            "card-foreground" => self.card_foreground = rgb,
            "border" => self.border = rgb,
            "ring" => self.ring = rgb,
            // popover and input have no preview surface
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::ColorField;

    #[test]
    fn preview_tracks_config() {
        let mut config = ThemeConfig::default();
        config.set_color(ColorField::Primary, "221.2 83.2% 53.3%");
        config.radius = 0.75;
        let palette = PreviewPalette::from_config(&config);
        assert_eq!(palette.primary, Rgb(0x25, 0x63, 0xeb));
        assert_eq!(palette.ring, palette.primary);
        assert_eq!(palette.card, palette.background);
        assert!(palette.rounded());
    }

    #[test]
    fn zero_radius_is_square() {
        let mut config = ThemeConfig::default();
        config.radius = 0.0;
        assert!(!PreviewPalette::from_config(&config).rounded());
    }

    #[test]
    fn unknown_var_is_ignored() {
        let mut palette = PreviewPalette::default();
        let before = palette.clone();
        palette.set_var("shadow", "0 0% 0%");
        assert_eq!(palette, before);
    }

    #[test]
    fn appearance_selects_chrome() {
        assert_eq!(ChromePalette::for_appearance(Appearance::Dark), ChromePalette::dark());
        assert_eq!(ChromePalette::for_appearance(Appearance::Light), ChromePalette::light());
        assert_ne!(ChromePalette::dark(), ChromePalette::light());
    }
}
