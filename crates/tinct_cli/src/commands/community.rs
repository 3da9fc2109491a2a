//! `tinct community` — list, show, and apply curated community themes.

use anyhow::{Result, anyhow};
use tinct_core::{ThemeStore, community};

use super::theme::print_theme;
use crate::cli::CommunityAction;
use crate::output;

pub fn handle(action: CommunityAction) -> Result<()> {
    match action {
        CommunityAction::List => list(),
        CommunityAction::Show { id } => show(&id),
        CommunityAction::Apply { id } => apply(&id),
    }
}

fn list() -> Result<()> {
    let catalog = community::all();
    output::header("Community themes");
    let mut table = output::table();
    output::table_header(&mut table, &["Id", "Name", "Author", "Tags"]);
    for theme in &catalog {
        output::table_row(
            &mut table,
            &[theme.id, theme.name, theme.author, &theme.tags.join(", ")],
        );
    }
    output::table_print(&table, serde_json::to_value(&catalog)?);
    Ok(())
}

fn show(id: &str) -> Result<()> {
    let theme = community::find(id).ok_or_else(|| anyhow!("no community theme {id:?}"))?;
    output::header(theme.name);
    output::dim(theme.description);
    output::kv("author", theme.author);
    output::kv("tags", &theme.tags.join(", "));
    if let Some(url) = theme.github_url {
        output::kv("github", url);
    }
    if let Some(url) = theme.website_url {
        output::kv("website", url);
    }
    print_theme(&theme.config)
}

fn apply(id: &str) -> Result<()> {
    let theme = community::find(id).ok_or_else(|| anyhow!("no community theme {id:?}"))?;
    ThemeStore::open_default().save(&theme.config)?;
    output::success(&format!("{} applied", theme.name));
    Ok(())
}
