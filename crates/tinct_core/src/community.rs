//! Curated community theme catalog.
//!
//! Static data: well-known editor and UI palettes expressed as
//! [ThemeConfig] values, attributed to their original authors.

use serde::Serialize;

use crate::config::ThemeConfig;

/// A curated third-party theme.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub tags: &'static [&'static str],
    pub config: ThemeConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<&'static str>,
}

fn theme(
    colors: [&str; 8],
    radius: f64,
) -> ThemeConfig {
    let [primary, secondary, accent, destructive, background, foreground, muted, border] = colors;
    ThemeConfig {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        destructive: destructive.to_string(),
        background: background.to_string(),
        foreground: foreground.to_string(),
        muted: muted.to_string(),
        border: border.to_string(),
        radius,
    }
}

/// All community themes, in catalog order.
pub fn all() -> Vec<CommunityTheme> {
    vec![
        CommunityTheme {
            id: "github-dark",
            name: "GitHub Dark",
            description: "GitHub's dark style, built for developers",
            author: "GitHub",
            tags: &["dark", "developer", "professional"],
            config: theme(
                [
                    "213 94% 68%",
                    "215 28% 17%",
                    "215 28% 17%",
                    "0 84% 60%",
                    "220 13% 9%",
                    "220 9% 46%",
                    "215 28% 17%",
                    "215 28% 17%",
                ],
                0.375,
            ),
            github_url: Some("https://github.com/primer/primitives"),
            website_url: None,
        },
        CommunityTheme {
            id: "dracula",
            name: "Dracula",
            description: "The classic dark theme, mysterious and elegant",
            author: "Dracula Team",
            tags: &["dark", "purple", "popular"],
            config: theme(
                [
                    "265 89% 78%",
                    "231 15% 18%",
                    "326 100% 74%",
                    "0 100% 67%",
                    "230 15% 15%",
                    "60 30% 96%",
                    "231 15% 18%",
                    "231 15% 25%",
                ],
                0.5,
            ),
            github_url: None,
            website_url: Some("https://draculatheme.com/"),
        },
        CommunityTheme {
            id: "nord",
            name: "Nord",
            description: "Arctic, north-bluish and clean",
            author: "Arctic Ice Studio",
            tags: &["light", "blue", "minimal"],
            config: theme(
                [
                    "213 32% 52%",
                    "220 16% 96%",
                    "354 42% 56%",
                    "354 42% 56%",
                    "0 0% 100%",
                    "220 16% 22%",
                    "220 14% 96%",
                    "220 13% 91%",
                ],
                0.25,
            ),
            github_url: None,
            website_url: Some("https://www.nordtheme.com/"),
        },
        CommunityTheme {
            id: "solarized-light",
            name: "Solarized Light",
            description: "The classic light theme, easy on the eyes",
            author: "Ethan Schoonover",
            tags: &["light", "classic", "comfortable"],
            config: theme(
                [
                    "205 69% 49%",
                    "44 87% 94%",
                    "68 100% 30%",
                    "1 71% 52%",
                    "44 87% 98%",
                    "192 81% 14%",
                    "44 87% 94%",
                    "45 100% 85%",
                ],
                0.375,
            ),
            github_url: None,
            website_url: Some("https://ethanschoonover.com/solarized/"),
        },
        CommunityTheme {
            id: "catppuccin-mocha",
            name: "Catppuccin Mocha",
            description: "Warm coffee-toned dark theme",
            author: "Catppuccin",
            tags: &["dark", "warm", "modern"],
            config: theme(
                [
                    "267 84% 81%",
                    "240 21% 15%",
                    "189 71% 73%",
                    "343 81% 75%",
                    "240 21% 9%",
                    "226 64% 88%",
                    "240 21% 15%",
                    "240 21% 21%",
                ],
                0.75,
            ),
            github_url: Some("https://github.com/catppuccin/catppuccin"),
            website_url: None,
        },
        CommunityTheme {
            id: "tokyo-night",
            name: "Tokyo Night",
            description: "Deep blue and violet, city lights at night",
            author: "Tokyo Night",
            tags: &["dark", "blue", "night"],
            config: theme(
                [
                    "217 92% 76%",
                    "222 16% 18%",
                    "310 43% 84%",
                    "0 73% 77%",
                    "222 16% 12%",
                    "218 27% 92%",
                    "222 16% 18%",
                    "223 16% 24%",
                ],
                0.5,
            ),
            github_url: Some("https://github.com/tokyo-night/tokyo-night-vscode-theme"),
            website_url: None,
        },
        CommunityTheme {
            id: "gruvbox-light",
            name: "Gruvbox Light",
            description: "Retro warm light theme",
            author: "Pavel Pertsev",
            tags: &["light", "warm", "retro"],
            config: theme(
                [
                    "24 56% 50%",
                    "36 54% 92%",
                    "142 34% 49%",
                    "4 68% 56%",
                    "36 54% 97%",
                    "25 18% 25%",
                    "36 54% 92%",
                    "35 30% 82%",
                ],
                0.25,
            ),
            github_url: Some("https://github.com/morhetz/gruvbox"),
            website_url: None,
        },
        CommunityTheme {
            id: "one-dark",
            name: "One Dark",
            description: "The Atom editor's classic dark theme",
            author: "Atom",
            tags: &["dark", "editor", "classic"],
            config: theme(
                [
                    "220 100% 66%",
                    "220 13% 18%",
                    "187 47% 55%",
                    "355 65% 65%",
                    "220 13% 15%",
                    "220 14% 71%",
                    "220 13% 18%",
                    "220 13% 24%",
                ],
                0.375,
            ),
            github_url: Some("https://github.com/atom/atom/tree/master/packages/one-dark-ui"),
            website_url: None,
        },
    ]
}

/// Look up a community theme by id.
pub fn find(id: &str) -> Option<CommunityTheme> {
    all().into_iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_themes_all_valid() {
        let themes = all();
        assert_eq!(themes.len(), 8);
        for theme in &themes {
            theme.config.validate().unwrap_or_else(|e| {
                panic!("community theme {} invalid: {}", theme.id, e);
            });
            assert!(!theme.tags.is_empty());
        }
    }

    #[test]
    fn find_by_id() {
        let dracula = find("dracula").unwrap();
        assert_eq!(dracula.author, "Dracula Team");
        assert_eq!(dracula.config.radius, 0.5);
        assert!(find("hotdog-stand").is_none());
    }
}
