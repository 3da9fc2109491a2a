//! Theme configuration: the eight HSL color slots plus corner radius.
//!
//! [ThemeConfig] is the only domain entity. Every external source (store,
//! import file, remote fetch, share link) goes through [theme_from_json] so
//! shape and value checks happen in exactly one place.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// One of the eight color slots of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Primary,
    Secondary,
    Accent,
    Destructive,
    Background,
    Foreground,
    Muted,
    Border,
}

impl ColorField {
    /// All fields in display/edit order.
    pub const ALL: [ColorField; 8] = [
        ColorField::Primary,
        ColorField::Secondary,
        ColorField::Accent,
        ColorField::Destructive,
        ColorField::Background,
        ColorField::Foreground,
        ColorField::Muted,
        ColorField::Border,
    ];

    /// Style-variable name (e.g. "primary").
    pub fn key(self) -> &'static str {
        match self {
            ColorField::Primary => "primary",
            ColorField::Secondary => "secondary",
            ColorField::Accent => "accent",
            ColorField::Destructive => "destructive",
            ColorField::Background => "background",
            ColorField::Foreground => "foreground",
            ColorField::Muted => "muted",
            ColorField::Border => "border",
        }
    }

    /// Human label for the editor (e.g. "Primary").
    pub fn label(self) -> &'static str {
        match self {
            ColorField::Primary => "Primary",
            ColorField::Secondary => "Secondary",
            ColorField::Accent => "Accent",
            ColorField::Destructive => "Destructive",
            ColorField::Background => "Background",
            ColorField::Foreground => "Foreground",
            ColorField::Muted => "Muted",
            ColorField::Border => "Border",
        }
    }

    /// Parse a field from its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for ColorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A full theme: eight HSL triples (`"H S% L%"`) and a corner radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub destructive: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub border: String,
    pub radius: f64,
}

impl Default for ThemeConfig {
    /// Built-in default theme (the slate preset).
    fn default() -> Self {
        Self {
            primary: "222.2 47.4% 11.2%".to_string(),
            secondary: "210 40% 96%".to_string(),
            accent: "210 40% 96%".to_string(),
            destructive: "0 84.2% 60.2%".to_string(),
            background: "0 0% 100%".to_string(),
            foreground: "222.2 84% 4.9%".to_string(),
            muted: "210 40% 96%".to_string(),
            border: "214.3 31.8% 91.4%".to_string(),
            radius: 0.5,
        }
    }
}

impl ThemeConfig {
    /// Read one color slot.
    pub fn color(&self, field: ColorField) -> &str {
        match field {
            ColorField::Primary => &self.primary,
            ColorField::Secondary => &self.secondary,
            ColorField::Accent => &self.accent,
            ColorField::Destructive => &self.destructive,
            ColorField::Background => &self.background,
            ColorField::Foreground => &self.foreground,
            ColorField::Muted => &self.muted,
            ColorField::Border => &self.border,
        }
    }

    /// Set one color slot.
    pub fn set_color(&mut self, field: ColorField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ColorField::Primary => self.primary = value,
            ColorField::Secondary => self.secondary = value,
            ColorField::Accent => self.accent = value,
            ColorField::Destructive => self.destructive = value,
            ColorField::Background => self.background = value,
            ColorField::Foreground => self.foreground = value,
            ColorField::Muted => self.muted = value,
            ColorField::Border => self.border = value,
        }
    }

    /// Check value-level invariants: every color slot is a well-formed HSL
    /// triple and the radius is finite and non-negative.
    ///
    /// Shape (eight strings + one number) is enforced by serde; this covers
    /// what the type system can't.
    pub fn validate(&self) -> Result<()> {
        for field in ColorField::ALL {
            let value = self.color(field);
            if !is_hsl_triple(value) {
                return Err(ThemeError::Invalid(format!(
                    "{} is not an HSL triple: {:?}",
                    field.key(),
                    value
                )));
            }
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ThemeError::Invalid(format!(
                "radius must be a finite non-negative number, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// True when `value` is three whitespace-separated numeric tokens
/// (percent signs allowed on the second and third).
fn is_hsl_triple(value: &str) -> bool {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.len() != 3 {
        return false;
    }
    tokens
        .iter()
        .all(|t| t.trim_end_matches('%').parse::<f64>().map(|n| n.is_finite()).unwrap_or(false))
}

/// Parse and validate a theme from JSON. The single entry point for every
/// trust boundary: store load, file import, remote fetch, share decode.
pub fn theme_from_json(json: &str) -> Result<ThemeConfig> {
    let config: ThemeConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
