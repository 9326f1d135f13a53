use anyhow::Result;
use std::path::PathBuf;
use std::sync::RwLock;

/// Environment variable pointing at an alternative config directory
pub const CONFIG_DIR_ENV: &str = "BINDPAD_CONFIG_DIR";

const APP_DIR_NAME: &str = "bindpad-manager";

// Global config directory override (for --config flag and tests)
static CONFIG_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Set config directory override (used by --config flag and tests)
pub fn set_config_dir_override(path: Option<PathBuf>) {
    let mut override_path = CONFIG_DIR_OVERRIDE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *override_path = path;
}

/// Get current config directory override
pub fn get_config_dir_override() -> Option<PathBuf> {
    CONFIG_DIR_OVERRIDE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Find config directory by searching in priority order:
/// 1. Override from --config flag or set_config_dir_override() (used as-is, created on save)
/// 2. Environment variable BINDPAD_CONFIG_DIR
/// 3. User config directory (`~/.config/bindpad-manager/` on Unix, `%APPDATA%\bindpad-manager\` on Windows)
/// 4. Current working directory (`./config/`)
/// 5. Executable directory (`<exe_dir>/config/`)
///
/// If no config directory is found, returns the user config directory without
/// creating it; `Config::save` creates it on first write.
pub fn find_config_directory() -> Result<PathBuf> {
    // Priority 1: explicit override
    if let Some(override_path) = get_config_dir_override() {
        tracing::debug!("Using config directory override: {:?}", override_path);
        return Ok(override_path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(CONFIG_DIR_ENV) {
        let env_config = PathBuf::from(env_path);
        if env_config.exists() {
            tracing::debug!("Found config directory from {}: {:?}", CONFIG_DIR_ENV, env_config);
            return Ok(env_config);
        }
        tracing::warn!("{} does not exist: {:?}", CONFIG_DIR_ENV, env_config);
    }

    // Priority 3: User config directory (platform standard location)
    if let Ok(user_config) = get_user_config_dir() {
        if user_config.exists() {
            tracing::debug!("Found config directory at: {:?}", user_config);
            return Ok(user_config);
        }
    }

    // Priority 4: Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        let cwd_config = cwd.join("config");
        if cwd_config.exists() {
            tracing::debug!("Found config directory at: {:?}", cwd_config);
            return Ok(cwd_config);
        }
    }

    // Priority 5: Executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let exe_config = exe_dir.join("config");
            if exe_config.exists() {
                tracing::debug!("Found config directory at: {:?}", exe_config);
                return Ok(exe_config);
            }
        }
    }

    // Fallback: user config directory, created lazily on save
    let user_config = get_user_config_dir()?;
    tracing::debug!("No config directory yet, defaulting to: {:?}", user_config);
    Ok(user_config)
}

/// Get platform-specific user config directory
/// - Windows: `%APPDATA%\bindpad-manager`
/// - Unix: `~/.config/bindpad-manager`
fn get_user_config_dir() -> Result<PathBuf> {
    let base_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine user config directory"))?;
    Ok(base_dir.join(APP_DIR_NAME))
}

/// Get absolute path to settings.toml
pub fn get_app_config_path() -> Result<PathBuf> {
    let config_dir = find_config_directory()?;
    Ok(config_dir.join("settings.toml"))
}
