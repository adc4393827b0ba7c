// src/cli/reset_settings.rs
use crate::settings::{
    io::{get_config_path, save_settings_to_file, SettingsError},
    AppSettings,
};

pub fn run() -> Result<(), SettingsError> {
    save_settings_to_file(&AppSettings::default())?;
    println!("Settings reset to defaults at {}", get_config_path()?.display());
    Ok(())
}
