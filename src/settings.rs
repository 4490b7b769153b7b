// src/settings.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "openai-compatible")]
    OpenAiCompatible,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub api_key: String,
    pub base_url: String, // only consulted for openai-compatible
    pub model_id: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Gemini,
            api_key: String::new(),
            base_url: String::new(),
            model_id: "gemini-2.5-flash".to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSettings {
    pub model_family: String,  // "nano-banana" | "jimeng" | "midjourney"
    pub aspect_ratio: String,  // e.g. "16:9"
    pub target_language: String,
    pub midjourney_version: String,
    pub midjourney_stylize: String,
    pub midjourney_chaos: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            model_family: "nano-banana".to_string(),
            aspect_ratio: "16:9".to_string(),
            target_language: "Chinese (Simplified)".to_string(),
            midjourney_version: "6.0".to_string(),
            midjourney_stylize: "250".to_string(),
            midjourney_chaos: "0".to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub version: u32,
    pub provider: ProviderSettings,
    pub defaults: DefaultSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            provider: ProviderSettings::default(),
            defaults: DefaultSettings::default(),
        }
    }
}

/// Get the path to the settings file (~/.config/promptforge/settings.json)
pub fn get_settings_path() -> Result<PathBuf, String> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| "Could not determine config directory".to_string())?;

    let app_config_dir = config_dir.join("promptforge");

    // Create directory if it doesn't exist
    if !app_config_dir.exists() {
        fs::create_dir_all(&app_config_dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    Ok(app_config_dir.join("settings.json"))
}

/// Load settings from disk, creating default if not exists
pub fn load_settings() -> Result<AppSettings, String> {
    let path = get_settings_path()?;

    if !path.exists() {
        let default_settings = AppSettings::default();
        save_settings(&default_settings)?;
        println!("[settings] Created default settings at {}", path.display());
        return Ok(default_settings);
    }

    let content =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read settings: {}", e))?;

    let settings: AppSettings =
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse settings: {}", e))?;

    println!("[settings] Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), String> {
    let path = get_settings_path()?;

    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    fs::write(&path, content).map_err(|e| format!("Failed to write settings: {}", e))?;

    println!("[settings] Saved settings to {}", path.display());
    Ok(())
}

/// Get default settings (for reset functionality)
pub fn get_default_settings() -> AppSettings {
    AppSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run_behavior() {
        let settings = AppSettings::default();
        assert_eq!(settings.provider.kind, ProviderKind::Gemini);
        assert_eq!(settings.provider.model_id, "gemini-2.5-flash");
        assert_eq!(settings.defaults.model_family, "nano-banana");
        assert_eq!(settings.defaults.aspect_ratio, "16:9");
        assert_eq!(settings.defaults.target_language, "Chinese (Simplified)");
    }

    #[test]
    fn provider_kind_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProviderKind::Gemini).unwrap(),
            "\"gemini\""
        );
        assert_eq!(
            serde_json::to_string(&ProviderKind::OpenAiCompatible).unwrap(),
            "\"openai-compatible\""
        );
    }

    #[test]
    fn settings_round_trip_through_json() {
        let mut settings = AppSettings::default();
        settings.provider.kind = ProviderKind::OpenAiCompatible;
        settings.provider.api_key = "sk-test".to_string();
        settings.provider.base_url = "https://api.example.com/v1".to_string();

        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.provider.kind, ProviderKind::OpenAiCompatible);
        assert_eq!(back.provider.api_key, "sk-test");
        assert_eq!(back.provider.base_url, "https://api.example.com/v1");
    }
}
