//! Field configuration persistence
//!
//! A field definition lives in `~/.config/editable-field/field.yaml`:
//!
//! ```yaml
//! field:
//!   name: title
//!   value: Hello
//!   required: true
//! constraints:
//!   max_length: 20
//!   char_filter: no_whitespace
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{InputConstraints, Properties};

/// Definition of a text field: construction properties plus the
/// constraints of its text input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub field: Properties<String>,
    pub constraints: InputConstraints,
}

impl FieldConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::field_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Field file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded field config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read field config at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse field config at {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize field config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write field config to {}", path.display()))?;

        tracing::info!("Saved field config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::CharClass;

    #[test]
    fn test_parse_partial_yaml() {
        let config = FieldConfig::from_yaml(
            "field:\n  name: title\n  value: Hello\n  required: true\nconstraints:\n  max_length: 5\n",
        )
        .unwrap();
        assert_eq!(config.field.name, "title");
        assert_eq!(config.field.value, "Hello");
        assert!(config.field.required);
        assert!(!config.field.disabled);
        assert_eq!(config.constraints.max_length, Some(5));
        assert_eq!(config.constraints.char_filter, CharClass::Any);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = FieldConfig::from_yaml("{}").unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(FieldConfig::from_yaml("field: [1, 2").is_err());
    }
}
