//! Centralized configuration paths for editable-field
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/editable-field/`
//! - Windows: `%APPDATA%\editable-field\`
//!
//! The field definition (`field.yaml`) and the rolling log files (`logs/`)
//! are the only things stored there.

use std::{env, fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};

const APP_DIR: &str = "editable-field";

/// Base config directory for editable-field
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/editable-field`
///   - Else: `~/.config/editable-field`
///
/// Windows:
///   - `%APPDATA%\editable-field`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/editable-field/field.yaml`
pub fn field_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("field.yaml"))
}

/// `~/.config/editable-field/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create `dir` (and its parents) if missing, returning it
fn ensure(dir: Option<PathBuf>, what: &str) -> Result<PathBuf> {
    let dir = dir.ok_or_else(|| anyhow!("No config directory available for {}", what))?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {} directory {}", what, dir.display()))?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    ensure(logs_dir(), "log")
}
