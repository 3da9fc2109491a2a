//! Built-in preset themes.
//!
//! Twelve named starting points. The slate preset doubles as the built-in
//! default ([crate::ThemeConfig::default]).

use serde::Serialize;

use crate::config::ThemeConfig;

/// A named built-in theme.
#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub config: ThemeConfig,
}

/// All presets, in catalog order.
pub fn all() -> Vec<Preset> {
    vec![
        Preset {
            id: "slate",
            name: "Slate",
            description: "Classic gray, clean and professional",
            config: slate(),
        },
        Preset {
            id: "gray",
            name: "Gray",
            description: "Neutral gray, balanced and steady",
            config: gray(),
        },
        Preset {
            id: "zinc",
            name: "Zinc",
            description: "Zinc gray, modern and minimal",
            config: zinc(),
        },
        Preset {
            id: "neutral",
            name: "Neutral",
            description: "Neutral tones, goes with anything",
            config: neutral(),
        },
        Preset {
            id: "stone",
            name: "Stone",
            description: "Stone tones, warm and natural",
            config: stone(),
        },
        Preset {
            id: "red",
            name: "Red",
            description: "Red, warm and energetic",
            config: with_primary("0 72.2% 50.6%"),
        },
        Preset {
            id: "rose",
            name: "Rose",
            description: "Rose, soft and elegant",
            config: with_primary("346.8 77.2% 49.8%"),
        },
        Preset {
            id: "orange",
            name: "Orange",
            description: "Orange, lively and creative",
            config: with_primary("20.5 90.2% 48.2%"),
        },
        Preset {
            id: "green",
            name: "Green",
            description: "Green, fresh and natural",
            config: with_primary("142.1 76.2% 36.3%"),
        },
        Preset {
            id: "blue",
            name: "Blue",
            description: "Blue, professional and dependable",
            config: with_primary("221.2 83.2% 53.3%"),
        },
        Preset {
            id: "yellow",
            name: "Yellow",
            description: "Yellow, bright and optimistic",
            config: with_primary("47.9 95.8% 53.1%"),
        },
        Preset {
            id: "violet",
            name: "Violet",
            description: "Violet, deep and refined",
            config: with_primary("262.1 83.3% 57.8%"),
        },
    ]
}

/// Look up a preset by id.
pub fn find(id: &str) -> Option<Preset> {
    all().into_iter().find(|p| p.id == id)
}

/// Slate: the default theme.
fn slate() -> ThemeConfig {
    ThemeConfig::default()
}

fn gray() -> ThemeConfig {
    ThemeConfig {
        primary: "220.9 39.3% 11%".to_string(),
        secondary: "220 14.3% 95.9%".to_string(),
        accent: "220 14.3% 95.9%".to_string(),
        destructive: "0 84.2% 60.2%".to_string(),
        background: "0 0% 100%".to_string(),
        foreground: "220.9 39.3% 11%".to_string(),
        muted: "220 14.3% 95.9%".to_string(),
        border: "220 13% 91%".to_string(),
        radius: 0.5,
    }
}

fn zinc() -> ThemeConfig {
    ThemeConfig {
        primary: "240 5.9% 10%".to_string(),
        secondary: "240 4.8% 95.9%".to_string(),
        accent: "240 4.8% 95.9%".to_string(),
        destructive: "0 84.2% 60.2%".to_string(),
        background: "0 0% 100%".to_string(),
        foreground: "240 10% 3.9%".to_string(),
        muted: "240 4.8% 95.9%".to_string(),
        border: "240 5.9% 90%".to_string(),
        radius: 0.5,
    }
}

fn neutral() -> ThemeConfig {
    ThemeConfig {
        primary: "0 0% 9%".to_string(),
        secondary: "0 0% 96.1%".to_string(),
        accent: "0 0% 96.1%".to_string(),
        destructive: "0 84.2% 60.2%".to_string(),
        background: "0 0% 100%".to_string(),
        foreground: "0 0% 3.9%".to_string(),
        muted: "0 0% 96.1%".to_string(),
        border: "0 0% 89.8%".to_string(),
        radius: 0.5,
    }
}

fn stone() -> ThemeConfig {
    ThemeConfig {
        primary: "24 9.8% 10%".to_string(),
        secondary: "60 4.8% 95.9%".to_string(),
        accent: "60 4.8% 95.9%".to_string(),
        destructive: "0 84.2% 60.2%".to_string(),
        background: "0 0% 100%".to_string(),
        foreground: "60 9.1% 97.8%".to_string(),
        muted: "60 4.8% 95.9%".to_string(),
        border: "60 4.8% 95.9%".to_string(),
        radius: 0.5,
    }
}

/// The colorful presets differ only in primary; the rest is a shared
/// neutral base.
fn with_primary(primary: &str) -> ThemeConfig {
    ThemeConfig {
        primary: primary.to_string(),
        secondary: "0 0% 96.1%".to_string(),
        accent: "0 0% 96.1%".to_string(),
        destructive: "0 84.2% 60.2%".to_string(),
        background: "0 0% 100%".to_string(),
        foreground: "0 0% 3.9%".to_string(),
        muted: "0 0% 96.1%".to_string(),
        border: "0 0% 89.8%".to_string(),
        radius: 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_presets_all_valid() {
        let presets = all();
        assert_eq!(presets.len(), 12);
        for preset in &presets {
            preset.config.validate().unwrap_or_else(|e| {
                panic!("preset {} invalid: {}", preset.id, e);
            });
        }
    }

    #[test]
    fn ids_are_unique() {
        let presets = all();
        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn slate_is_the_default() {
        assert_eq!(find("slate").unwrap().config, ThemeConfig::default());
    }

    #[test]
    fn find_unknown_is_none() {
        assert!(find("mauve").is_none());
    }

    #[test]
    fn blue_primary_matches_catalog() {
        assert_eq!(find("blue").unwrap().config.primary, "221.2 83.2% 53.3%");
    }
}
