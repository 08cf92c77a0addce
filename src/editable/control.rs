//! Capability interface for injected editor controls.

use crate::dom::{Element, SlotName};

/// An editor control injected into an editable field.
///
/// Only [`element`](EditorControl::element) is mandatory. Every other member
/// is an optional capability whose default means "not supported": setters do
/// nothing, queries return `None`, and [`reset`](EditorControl::reset)
/// returns `false`. The field treats a missing capability as a supported
/// absence and falls back to its own behavior.
pub trait EditorControl<V> {
    /// Presentation of the control, mounted into the editor slot
    fn element(&self) -> Element;

    /// Current (possibly uncommitted) value, if the control exposes one
    fn value(&self) -> Option<V> {
        None
    }

    fn set_value(&mut self, _value: V) {}

    fn set_name(&mut self, _name: &str) {}

    fn set_required(&mut self, _required: bool) {}

    fn set_read_only(&mut self, _read_only: bool) {}

    fn set_disabled(&mut self, _disabled: bool) {}

    /// `Some(valid)` if the control can check its own validity
    fn check_validity(&self) -> Option<bool> {
        None
    }

    /// Like [`check_validity`](EditorControl::check_validity), but also
    /// surfaces the result to the user
    fn report_validity(&mut self) -> Option<bool> {
        None
    }

    /// Restore the control's own initial value. Returns `false` when the
    /// control has no reset of its own.
    fn reset(&mut self) -> bool {
        false
    }
}

/// Boxed editor control owned by a field
pub type EditorBox<V> = Box<dyn EditorControl<V>>;

/// Editor used when no renderer supplied one. Supports no optional
/// capabilities, so a field using it can never conclude.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholder;

impl<V> EditorControl<V> for Placeholder {
    fn element(&self) -> Element {
        Element::new("div")
            .with_slot(SlotName::Editor.as_str())
            .with_text("Editor not provided")
    }
}
