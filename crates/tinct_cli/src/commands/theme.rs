//! `tinct show` / `set` / `reset` / `css` — the current theme.

use anyhow::{Result, anyhow, bail};
use tinct_core::{ColorField, ThemeConfig, ThemeStore, hex_to_hsl, hsl_to_hex, is_hex_color, theme_css};

use crate::output;

/// Print a theme's color slots as a table plus the radius.
pub fn print_theme(config: &ThemeConfig) -> Result<()> {
    let mut table = output::table();
    output::table_header(&mut table, &["Field", "HSL", "Hex"]);
    for field in ColorField::ALL {
        let hsl = config.color(field);
        output::table_row(&mut table, &[field.key(), hsl, &hsl_to_hex(hsl)]);
    }
    output::table_print(&table, serde_json::to_value(config)?);
    output::kv("radius", &config.radius.to_string());
    Ok(())
}

pub fn show() -> Result<()> {
    let config = ThemeStore::open_default().load();
    output::header("Current theme");
    print_theme(&config)
}

pub fn set(field: &str, value: &str) -> Result<()> {
    let store = ThemeStore::open_default();
    let mut config = store.load();

    if field == "radius" {
        let radius: f64 = value
            .parse()
            .map_err(|_| anyhow!("radius must be a number, got {value:?}"))?;
        if !radius.is_finite() || radius < 0.0 {
            bail!("radius must be a finite non-negative number");
        }
        config.radius = radius;
    } else if let Some(slot) = ColorField::from_key(field) {
        let hsl = if is_hex_color(value) {
            hex_to_hsl(value)
        } else {
            value.to_string()
        };
        config.set_color(slot, hsl);
        config.validate()?;
    } else {
        bail!("unknown field {field:?} (expected a color slot or \"radius\")");
    }

    store.save(&config)?;
    output::success(&format!("{} set to {}", field, value));
    Ok(())
}

pub fn reset() -> Result<()> {
    ThemeStore::open_default().save(&ThemeConfig::default())?;
    output::success("Theme reset to default");
    Ok(())
}

pub fn css() -> Result<()> {
    let config = ThemeStore::open_default().load();
    output::block(&theme_css(&config));
    Ok(())
}
