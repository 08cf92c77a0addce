//! Errors raised by the editable field.

use thiserror::Error;

use crate::dom::SlotName;

/// Structural failures of the host template.
///
/// Everything else the field encounters (missing editor capabilities,
/// actions while disabled) resolves locally and is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditableError {
    /// The host has no element assigned to a slot the field must fill
    #[error("{} element not provided", capitalized(.0))]
    SlotNotProvided(SlotName),
}

fn capitalized(slot: &SlotName) -> String {
    let name = slot.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, EditableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_slot() {
        assert_eq!(
            EditableError::SlotNotProvided(SlotName::Editor).to_string(),
            "Editor element not provided"
        );
        assert_eq!(
            EditableError::SlotNotProvided(SlotName::Viewer).to_string(),
            "Viewer element not provided"
        );
    }
}
