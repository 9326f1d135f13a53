use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration (saved to config/settings.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when --verbose is not given (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON lines instead of plain text
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Remembered form values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub wow_path: Option<PathBuf>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Keys accepted by `get_value` / `set_value`
pub const CONFIG_KEYS: &[&str] = &[
    "general.log_level",
    "general.log_json",
    "profile.wow_path",
    "profile.account",
    "profile.character",
];

impl Config {
    /// Load settings.toml from the config directory, falling back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let config_path = crate::util::paths::get_app_config_path()?;
        Self::load_from(&config_path)
    }

    /// Save settings.toml to the config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = crate::util::paths::get_app_config_path()?;
        self.save_to(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!("Config not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).context(format!("Failed to read {:?}", path))?;
        let config: Config =
            toml::from_str(&content).context(format!("Failed to parse {:?}", path))?;
        config.validate()?;

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;

        // Atomic write using temp file + rename
        let temp_path = path.with_extension("toml.tmp");
        std::fs::write(&temp_path, &content).context("Failed to write temp config file")?;
        std::fs::rename(&temp_path, path).context("Failed to rename temp config file")?;

        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        let level = self.general.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid general.log_level '{}' (expected one of: {})",
                self.general.log_level,
                LOG_LEVELS.join(", ")
            );
        }
        Ok(())
    }

    /// Get configuration value by dot notation key
    pub fn get_value(&self, key: &str) -> anyhow::Result<String> {
        let value = match key {
            "general.log_level" => self.general.log_level.clone(),
            "general.log_json" => self.general.log_json.to_string(),
            "profile.wow_path" => self
                .profile
                .wow_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "profile.account" => self.profile.account.clone().unwrap_or_default(),
            "profile.character" => self.profile.character.clone().unwrap_or_default(),
            _ => anyhow::bail!(
                "Unknown config key '{}' (valid keys: {})",
                key,
                CONFIG_KEYS.join(", ")
            ),
        };
        Ok(value)
    }

    /// Set configuration value by dot notation key.
    ///
    /// An empty value clears the optional profile fields.
    pub fn set_value(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        fn optional(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        match key {
            "general.log_level" => {
                let level = value.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    anyhow::bail!(
                        "Invalid log level '{}' (expected one of: {})",
                        value,
                        LOG_LEVELS.join(", ")
                    );
                }
                self.general.log_level = level;
            }
            "general.log_json" => {
                self.general.log_json = value
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid boolean '{}'", value))?;
            }
            "profile.wow_path" => self.profile.wow_path = optional(value).map(PathBuf::from),
            "profile.account" => self.profile.account = optional(value),
            "profile.character" => self.profile.character = optional(value),
            _ => anyhow::bail!(
                "Unknown config key '{}' (valid keys: {})",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}
