//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal theme customizer with live preview
#[derive(Parser)]
#[command(name = "tinct", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

/// Chrome appearance for the TUI.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum AppearanceArg {
    #[default]
    Dark,
    Light,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive theme customizer
    Tui {
        /// Chrome appearance (does not affect the theme being edited)
        #[arg(long, default_value = "dark")]
        appearance: AppearanceArg,
    },
    /// Show the current theme
    Show,
    /// Set one field: a color slot (hex "#RRGGBB" or HSL "H S% L%") or the radius
    Set {
        /// Field name: primary, secondary, accent, destructive, background,
        /// foreground, muted, border, or radius
        field: String,
        /// New value
        value: String,
    },
    /// Reset to the built-in default theme
    Reset,
    /// Built-in preset themes
    Presets {
        #[command(subcommand)]
        action: PresetsAction,
    },
    /// Curated community themes
    Community {
        #[command(subcommand)]
        action: CommunityAction,
    },
    /// Export the current theme to a JSON file
    Export {
        /// Destination file
        #[arg(long, default_value = "theme-config.json")]
        path: String,
    },
    /// Import a theme from a JSON file
    Import {
        /// Source file
        path: String,
    },
    /// Generate a shareable link for the current theme
    Share {
        /// Display name carried by the link
        #[arg(long, default_value = "My theme")]
        name: String,
        /// Base URL the theme parameter is attached to
        #[arg(long, default_value = "https://tinct.dev/")]
        base_url: String,
        /// Also copy the link to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Apply a theme from a shareable link
    Open {
        /// The shared link
        link: String,
    },
    /// Fetch and apply a theme from a URL
    Fetch {
        /// URL returning a theme JSON body
        url: String,
    },
    /// Print the theme as CSS variables
    Css,
}

#[derive(Subcommand)]
pub enum PresetsAction {
    /// List all presets
    List,
    /// Show one preset's colors
    Show {
        /// Preset id (e.g. slate, blue)
        id: String,
    },
    /// Apply a preset as the current theme
    Apply {
        /// Preset id (e.g. slate, blue)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CommunityAction {
    /// List community themes
    List,
    /// Show one community theme
    Show {
        /// Theme id (e.g. dracula)
        id: String,
    },
    /// Apply a community theme as the current theme
    Apply {
        /// Theme id (e.g. dracula)
        id: String,
    },
}
