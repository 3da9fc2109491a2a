//! `tinct presets` — list, show, and apply built-in presets.

use anyhow::{Result, anyhow};
use tinct_core::{ThemeStore, presets};

use super::theme::print_theme;
use crate::cli::PresetsAction;
use crate::output;

pub fn handle(action: PresetsAction) -> Result<()> {
    match action {
        PresetsAction::List => list(),
        PresetsAction::Show { id } => show(&id),
        PresetsAction::Apply { id } => apply(&id),
    }
}

fn list() -> Result<()> {
    let catalog = presets::all();
    output::header("Presets");
    let mut table = output::table();
    output::table_header(&mut table, &["Id", "Name", "Description"]);
    for preset in &catalog {
        output::table_row(&mut table, &[preset.id, preset.name, preset.description]);
    }
    output::table_print(&table, serde_json::to_value(&catalog)?);
    Ok(())
}

fn show(id: &str) -> Result<()> {
    let preset = presets::find(id).ok_or_else(|| anyhow!("no preset {id:?}"))?;
    output::header(preset.name);
    output::dim(preset.description);
    print_theme(&preset.config)
}

fn apply(id: &str) -> Result<()> {
    let preset = presets::find(id).ok_or_else(|| anyhow!("no preset {id:?}"))?;
    ThemeStore::open_default().save(&preset.config)?;
    output::success(&format!("Preset {} applied", preset.name));
    Ok(())
}
