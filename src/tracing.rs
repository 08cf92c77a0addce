//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging field
//! mode switches, validity gating and render delegation.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=field=debug,render=trace` - scoped filtering
//! - `RUST_LOG=editable_field::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/editable-field/logs/editable.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::dom::SlotName;
use crate::editable::{EditableElement, Mode, Template};

/// Directives for the log file: field transitions and validity reports at
/// debug, render notifications at trace, everything else at warn
const FILE_DIRECTIVES: &str = "warn,field=debug,validity=debug,render=trace";

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The log file uses
/// `EDITABLE_LOG` when set, [`FILE_DIRECTIVES`] otherwise. Fails if a global
/// subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "editable.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(file_filter()),
            )
        }
        Err(e) => {
            eprintln!("Warning: file logging disabled: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;
    Ok(())
}

fn file_filter() -> EnvFilter {
    EnvFilter::try_from_env("EDITABLE_LOG").unwrap_or_else(|_| EnvFilter::new(FILE_DIRECTIVES))
}

/// Lightweight snapshot of field state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub mode: Mode,
    pub changed: bool,
    pub disabled: bool,
    pub value: String,
    pub conclude_disabled: Option<bool>,
}

impl FieldSnapshot {
    pub fn from_field<V: Clone + ToString + 'static>(field: &Template<V>) -> Self {
        Self {
            mode: field.mode(),
            changed: field.is_changed(),
            disabled: field.disabled(),
            value: field.value().to_string(),
            conclude_disabled: field.controls_disabled(SlotName::Conclude),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.value != other.value {
            changes.push(format!("value: {:?} → {:?}", self.value, other.value));
        }
        if self.changed != other.changed {
            changes.push(format!("changed: {} → {}", self.changed, other.changed));
        }
        if self.disabled != other.disabled {
            changes.push(format!("disabled: {} → {}", self.disabled, other.disabled));
        }
        if self.conclude_disabled != other.conclude_disabled {
            let status = match other.conclude_disabled {
                Some(true) => "disabled",
                Some(false) => "enabled",
                None => "absent",
            };
            changes.push(format!("conclude {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> FieldSnapshot {
        FieldSnapshot {
            mode: Mode::Viewing,
            changed: false,
            disabled: false,
            value: "1".to_string(),
            conclude_disabled: Some(true),
        }
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        assert_eq!(snapshot().diff(&snapshot()), None);
    }

    #[test]
    fn test_diff_lists_changes() {
        let before = snapshot();
        let after = FieldSnapshot {
            mode: Mode::Editing,
            conclude_disabled: Some(false),
            ..snapshot()
        };
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("mode: Viewing → Editing"));
        assert!(diff.contains("conclude enabled"));
        assert!(!diff.contains("value"));
    }
}
