//! EditableState - the committed state of an editable field.

use super::properties::Properties;

/// Committed state of an editable field.
///
/// `value` is always the last committed value: the one set by the most recent
/// conclude, cancel or external assignment, never text that is still being
/// typed into the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableState<V> {
    /// Field name, forwarded to the editor
    pub name: String,
    /// Committed value
    pub value: V,
    /// Whether a value is required
    pub required: bool,
    /// Whether the editor accepts input
    pub read_only: bool,
    /// Whether the field is inert
    pub disabled: bool,
}

impl<V: Clone> EditableState<V> {
    /// Initial state taken from construction properties
    pub fn from_properties(properties: &Properties<V>) -> Self {
        Self {
            name: properties.name.clone(),
            value: properties.value.clone(),
            required: properties.required,
            read_only: properties.read_only,
            disabled: properties.disabled,
        }
    }
}
