// src/cli/mod.rs
// Command line options and settings maintenance commands

pub mod reset_settings;
pub mod show_settings;

use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;

use crate::settings::AppSettings;

#[derive(Parser, Debug)]
#[command(name = "table_editor")]
#[command(about = "Table Editor - create, edit and duplicate small tables", long_about = None)]
pub struct Cli {
    /// Number of tables shown side by side (overrides saved settings for this run)
    #[arg(long)]
    pub tables_per_row: Option<NonZeroUsize>,

    /// Log filter directive, e.g. "info,wgpu=error" (overrides saved settings for this run)
    #[arg(long)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the settings file location and its current contents
    ShowSettings,

    /// Overwrite the settings file with defaults
    ResetSettings,
}

impl Cli {
    /// Applies command line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut AppSettings) {
        if let Some(tables_per_row) = self.tables_per_row {
            settings.tables_per_row = tables_per_row;
        }
        if let Some(filter) = &self.log_filter {
            settings.log_filter = filter.clone();
        }
    }
}
