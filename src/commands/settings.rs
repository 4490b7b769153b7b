// src/commands/settings.rs

use tauri::State;

use crate::settings::{self, AppSettings};
use crate::state::OptimizerManager;

#[tauri::command]
pub fn get_settings(state: State<'_, OptimizerManager>) -> Result<AppSettings, String> {
    let settings = state.app_settings.lock().map_err(|e| e.to_string())?;
    Ok(settings.clone())
}

#[tauri::command]
pub fn save_app_settings(
    new_settings: AppSettings,
    state: State<'_, OptimizerManager>,
) -> Result<(), String> {
    settings::save_settings(&new_settings)?;
    let mut current = state.app_settings.lock().map_err(|e| e.to_string())?;
    *current = new_settings;
    Ok(())
}

#[tauri::command]
pub fn reset_settings(state: State<'_, OptimizerManager>) -> Result<AppSettings, String> {
    let defaults = settings::get_default_settings();
    settings::save_settings(&defaults)?;
    let mut current = state.app_settings.lock().map_err(|e| e.to_string())?;
    *current = defaults.clone();
    Ok(defaults)
}
