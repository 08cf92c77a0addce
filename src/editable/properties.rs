//! Construction properties of an editable field.

use serde::{Deserialize, Serialize};

/// Properties an editable field is constructed with.
///
/// `value` doubles as the field's default value: [`reset`] falls back to it
/// when the editor has no reset of its own.
///
/// [`reset`]: super::EditableElement::reset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "V: Deserialize<'de> + Default"))]
pub struct Properties<V> {
    /// Host classes
    pub class: Option<String>,
    /// Slot the host element is assigned to in its own parent
    pub slot: Option<String>,
    /// Field name
    pub name: String,
    /// Initial (and default) value
    pub value: V,
    /// Whether a value is required
    pub required: bool,
    /// Whether the editor accepts input
    pub read_only: bool,
    /// Whether the field starts disabled
    pub disabled: bool,
}

impl<V> Properties<V> {
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            class: None,
            slot: None,
            name: name.into(),
            value,
            required: false,
            read_only: false,
            disabled: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}
