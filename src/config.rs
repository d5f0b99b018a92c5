use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::emissions::{Region, UnitSystem};
use crate::error::{AppError, Result};
use crate::locale::Language;

const APP_DIR_NAME: &str = "carbonfootprint";

/// Application configuration: defaults come from environment variables,
/// optionally merged with `config.toml` under the platform config dir.
/// Environment variables take precedence over the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_region: Region,
    pub default_language: Language,
    pub default_unit_system: UnitSystem,
    pub snapshot_file_name: String,
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_region: std::env::var("FOOTPRINT_REGION")
                .ok()
                .and_then(|code| Region::from_code(&code).ok())
                .unwrap_or_default(),
            default_language: std::env::var("FOOTPRINT_LANGUAGE")
                .ok()
                .and_then(|code| Language::from_code(&code).ok())
                .unwrap_or_default(),
            default_unit_system: std::env::var("FOOTPRINT_UNIT_SYSTEM")
                .ok()
                .and_then(|code| UnitSystem::from_code(&code).ok())
                .unwrap_or_default(),
            snapshot_file_name: std::env::var("FOOTPRINT_SNAPSHOT_FILE")
                .unwrap_or_else(|_| "footprint_data.json".to_string()),
            export_dir: std::env::var("FOOTPRINT_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join(APP_DIR_NAME).join("config.toml");
            if config_path.exists() {
                match std::fs::read_to_string(&config_path) {
                    Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                        Ok(file_config) => {
                            config = Self::merge_configs(file_config, config);
                        }
                        Err(e) => {
                            tracing::warn!("Failed to parse config.toml: {}", e);
                        }
                    },
                    Err(e) => {
                        tracing::warn!("Failed to read config.toml: {}", e);
                    }
                }
            }
        }
        config
    }

    /// Environment variables take precedence over file config.
    fn merge_configs(file_config: AppConfig, env_config: AppConfig) -> AppConfig {
        AppConfig {
            default_region: if std::env::var("FOOTPRINT_REGION").is_ok() {
                env_config.default_region
            } else {
                file_config.default_region
            },
            default_language: if std::env::var("FOOTPRINT_LANGUAGE").is_ok() {
                env_config.default_language
            } else {
                file_config.default_language
            },
            default_unit_system: if std::env::var("FOOTPRINT_UNIT_SYSTEM").is_ok() {
                env_config.default_unit_system
            } else {
                file_config.default_unit_system
            },
            snapshot_file_name: if std::env::var("FOOTPRINT_SNAPSHOT_FILE").is_ok() {
                env_config.snapshot_file_name
            } else {
                file_config.snapshot_file_name
            },
            export_dir: if std::env::var("FOOTPRINT_EXPORT_DIR").is_ok() {
                env_config.export_dir
            } else {
                file_config.export_dir
            },
        }
    }

    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.snapshot_file_name.trim().is_empty() {
            errors.push("Snapshot file name must not be empty".to_string());
        }
        if self.snapshot_file_name.contains('/') || self.snapshot_file_name.contains('\\') {
            errors.push("Snapshot file name must not contain path separators".to_string());
        }
        if self.export_dir.as_os_str().is_empty() {
            errors.push("Export directory must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Per-user display preferences, persisted as JSON in the config dir.
/// Distinct from the snapshot: the snapshot carries form values and
/// region/unit selections, preferences carry theme and language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    pub theme: ThemeMode,
    pub language: Language,
}

impl UserPreferences {
    pub fn load() -> Result<Self> {
        Self::load_from(&preferences_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read preferences: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse preferences: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&preferences_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(format!("Failed to create config dir: {}", e)))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize preferences: {}", e)))?;
        std::fs::write(path, json)
            .map_err(|e| AppError::Config(format!("Failed to write preferences: {}", e)))
    }

    pub fn reset_at(path: &Path) -> Result<Self> {
        let defaults = Self::default();
        defaults.save_to(path)?;
        Ok(defaults)
    }
}

fn preferences_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::Config("Could not find config directory".to_string()))?;
    Ok(config_dir.join(APP_DIR_NAME).join("preferences.json"))
}
