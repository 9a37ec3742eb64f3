use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub appearance: AppearanceConfig,
    pub search: SearchConfig,
    pub random: RandomConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiescence window before a keystroke burst turns into a query.
    pub debounce_ms: u64,
    pub per_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Pages 1..=max_page are eligible for the random pick.
    pub max_page: u32,
    pub per_page: u32,
}

/// Requested appearance; `System` follows the OS preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Dark,
    Light,
}

impl AppConfig {
    /// Load config: user file if present, built-in defaults otherwise.
    pub fn load() -> Result<Self, String> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path).map_err(|e| e.to_string())?;
            toml::from_str(&user_str).map_err(|e| e.to_string())
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| e.to_string())
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(&path, content).map_err(|e| e.to_string())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "tansaku")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.appearance.mode, ThemeMode::System);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.per_page, 10);
        assert_eq!(config.random.max_page, 50);
        assert_eq!(config.random.per_page, 10);
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.search.debounce_ms, config.search.debounce_ms);
        assert_eq!(deserialized.appearance.mode, config.appearance.mode);
    }

    #[test]
    fn test_mode_serde_names() {
        let parsed: ThemeMode = toml::from_str::<AppearanceConfig>("mode = \"dark\"")
            .unwrap()
            .mode;
        assert_eq!(parsed, ThemeMode::Dark);
    }
}
