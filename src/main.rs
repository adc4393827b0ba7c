// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use clap::Parser;
use std::time::Duration;

use bevy_egui::EguiPlugin;

mod cli;
mod settings;
mod tables;
mod ui;

use cli::{Cli, Commands};
use settings::{io::load_settings_from_file, AppSettings};
use tables::TablesPlugin;
use ui::EditorUiPlugin;

fn main() {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        let result = match command {
            Commands::ShowSettings => cli::show_settings::run(),
            Commands::ResetSettings => cli::reset_settings::run(),
        };
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let mut app_settings: AppSettings = match load_settings_from_file() {
        Ok(settings) => settings,
        Err(e) => {
            // LogPlugin is not up yet.
            eprintln!("Failed to load settings ({}). Using defaults.", e);
            AppSettings::default()
        }
    };
    cli.apply_overrides(&mut app_settings);

    let unfocused_mode = if app_settings.low_power_when_unfocused {
        UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0))
    } else {
        UpdateMode::Continuous
    };

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode,
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Table Editor".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: app_settings.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .insert_resource(app_settings)
        .add_plugins(TablesPlugin)
        .add_plugins(EditorUiPlugin)
        .run();
}
