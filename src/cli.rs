//! Command-line argument parsing for the demo driver
//!
//! Supports:
//! - Loading a field definition from a YAML file
//! - Overriding individual properties
//! - Reading session commands from a script instead of stdin

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::FieldConfig;

/// Drive an editable field from the terminal
#[derive(Parser, Debug)]
#[command(name = "editable", version, about = "Drive an editable field from the terminal")]
pub struct CliArgs {
    /// Field definition (defaults to ~/.config/editable-field/field.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Initial value
    #[arg(long, value_name = "TEXT")]
    pub value: Option<String>,

    /// Field name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Require a non-empty value
    #[arg(long)]
    pub required: bool,

    /// Make the editor read-only
    #[arg(long)]
    pub read_only: bool,

    /// Start disabled
    #[arg(long)]
    pub disabled: bool,
}

impl CliArgs {
    /// Resolve the field definition: the config file (or the default one),
    /// with command-line overrides applied on top
    pub fn into_config(self) -> Result<FieldConfig> {
        let mut config = match &self.config {
            Some(path) => FieldConfig::load_from(path)?,
            None => FieldConfig::load(),
        };

        if let Some(value) = self.value {
            config.field.value = value;
        }
        if let Some(name) = self.name {
            config.field.name = name;
        }
        config.field.required |= self.required;
        config.field.read_only |= self.read_only;
        config.field.disabled |= self.disabled;

        Ok(config)
    }
}
