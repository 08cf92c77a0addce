//! Editable field - a view/edit widget controller
//!
//! This crate provides an editable field that toggles between a read-only
//! viewer and an injected editor, built on a small in-memory DOM and driven
//! Elm-style: user input arrives as [`EditableMsg`] and is applied by
//! [`update()`].

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod dom;
pub mod editable;
pub mod messages;
pub mod session;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use config::FieldConfig;
pub use editable::{EditableElement, Mode, Template};
pub use messages::EditableMsg;
pub use update::update;
