//! Style-variable resolution and application.
//!
//! Resolving a theme is a pure function from [ThemeConfig] to an ordered
//! list of style-variable name/value pairs; the side effect of applying them
//! goes through an injected [StyleSink], so the computation is testable on
//! its own and the preview surface decides what "setting a variable" means.

use crate::config::ThemeConfig;

/// Receiver for resolved style variables (a preview palette, a CSS emitter).
pub trait StyleSink {
    fn set_var(&mut self, name: &str, value: &str);
}

/// Foreground used on primary and destructive surfaces.
const ON_STRONG_FOREGROUND: &str = "210 40% 98%";

/// Muted text tone.
const MUTED_FOREGROUND: &str = "215.4 16.3% 46.9%";

/// Resolve a theme to style variables: the eight configured slots, the
/// radius, and the derived variables (card, popover, input, ring, and the
/// per-surface foregrounds).
pub fn resolve_style_vars(config: &ThemeConfig) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = Vec::with_capacity(20);
    let mut push = |name: &str, value: &str| vars.push((name.to_string(), value.to_string()));

    push("primary", &config.primary);
    push("secondary", &config.secondary);
    push("accent", &config.accent);
    push("destructive", &config.destructive);
    push("background", &config.background);
    push("foreground", &config.foreground);
    push("muted", &config.muted);
    push("border", &config.border);
    push("radius", &format!("{}rem", config.radius));

    // Derived
    push("primary-foreground", ON_STRONG_FOREGROUND);
    push("secondary-foreground", &config.foreground);
    push("accent-foreground", &config.foreground);
    push("destructive-foreground", ON_STRONG_FOREGROUND);
    push("muted-foreground", MUTED_FOREGROUND);
    push("card", &config.background);
    push("card-foreground", &config.foreground);
    push("popover", &config.background);
    push("popover-foreground", &config.foreground);
    push("input", &config.border);
    push("ring", &config.primary);

    vars
}

/// Apply a theme through the sink, one variable at a time.
pub fn apply_theme(config: &ThemeConfig, sink: &mut dyn StyleSink) {
    for (name, value) in resolve_style_vars(config) {
        sink.set_var(&name, &value);
    }
}

/// The theme as a `:root` style-variable block.
pub fn theme_css(config: &ThemeConfig) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in resolve_style_vars(config) {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        vars: Vec<(String, String)>,
    }

    impl StyleSink for RecordingSink {
        fn set_var(&mut self, name: &str, value: &str) {
            self.vars.push((name.to_string(), value.to_string()));
        }
    }

    fn lookup<'a>(vars: &'a [(String, String)], name: &str) -> &'a str {
        vars.iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing var {name}"))
    }

    #[test]
    fn resolves_all_variables() {
        let vars = resolve_style_vars(&ThemeConfig::default());
        let expected = [
            "primary",
            "secondary",
            "accent",
            "destructive",
            "background",
            "foreground",
            "muted",
            "border",
            "radius",
            "primary-foreground",
            "secondary-foreground",
            "accent-foreground",
            "destructive-foreground",
            "muted-foreground",
            "card",
            "card-foreground",
            "popover",
            "popover-foreground",
            "input",
            "ring",
        ];
        assert_eq!(vars.len(), expected.len());
        for name in expected {
            lookup(&vars, name);
        }
    }

    #[test]
    fn derived_variables_follow_base_slots() {
        let mut config = ThemeConfig::default();
        config.primary = "120 50% 40%".to_string();
        config.background = "0 0% 10%".to_string();
        config.border = "0 0% 30%".to_string();
        let vars = resolve_style_vars(&config);
        assert_eq!(lookup(&vars, "ring"), "120 50% 40%");
        assert_eq!(lookup(&vars, "card"), "0 0% 10%");
        assert_eq!(lookup(&vars, "popover"), "0 0% 10%");
        assert_eq!(lookup(&vars, "input"), "0 0% 30%");
        assert_eq!(lookup(&vars, "secondary-foreground"), config.foreground);
    }

    #[test]
    fn radius_has_unit_suffix() {
        let mut config = ThemeConfig::default();
        config.radius = 0.75;
        let vars = resolve_style_vars(&config);
        assert_eq!(lookup(&vars, "radius"), "0.75rem");
    }

    #[test]
    fn apply_matches_resolution() {
        let config = ThemeConfig::default();
        let mut sink = RecordingSink::default();
        apply_theme(&config, &mut sink);
        assert_eq!(sink.vars, resolve_style_vars(&config));
    }

    #[test]
    fn css_block_shape() {
        let css = theme_css(&ThemeConfig::default());
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with('}'));
        assert!(css.contains("  --primary: 222.2 47.4% 11.2%;\n"));
        assert!(css.contains("  --radius: 0.5rem;\n"));
    }
}
