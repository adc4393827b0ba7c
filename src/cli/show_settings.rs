// src/cli/show_settings.rs
use crate::settings::{
    io::{get_config_path, load_settings_from_file, SettingsError},
    AppSettings,
};

pub fn run() -> Result<(), SettingsError> {
    let path = get_config_path()?;
    println!("Settings file: {}\n", path.display());

    let settings: AppSettings = load_settings_from_file()?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
