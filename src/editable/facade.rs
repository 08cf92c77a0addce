//! Public surface of an editable field.
//!
//! Setters keep three things in step: the committed state, the live editor
//! (when one exists) and the field's own controls.

use crate::dom::{set_assigned_disabled, Element, SlotName};

use super::completion::Completion;
use super::error::Result;
use super::template::Template;

/// Properties and operations an editable field exposes to its callers.
pub trait EditableElement<V> {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: &str);

    /// Last committed value
    fn value(&self) -> &V;
    /// Assign a new committed value
    fn set_value(&mut self, value: V);

    /// The value the field was constructed with
    fn default_value(&self) -> &V;

    fn required(&self) -> bool;
    fn set_required(&mut self, required: bool);

    fn read_only(&self) -> bool;
    fn set_read_only(&mut self, read_only: bool);

    fn disabled(&self) -> bool;
    fn set_disabled(&mut self, disabled: bool);

    /// The host node
    fn element(&self) -> &Element;

    /// Whether the current editor content may be concluded. Always `false`
    /// before the first edit.
    fn check_validity(&self) -> bool;

    /// Like [`check_validity`](EditableElement::check_validity), and asks the
    /// editor to surface the result to the user
    fn report_validity(&mut self) -> bool;

    /// Restore the default value and clear the change flag
    fn reset(&mut self);

    /// Start editing
    fn edit(&mut self) -> Result<()>;

    /// Commit the current edit
    fn conclude(&mut self) -> Result<()>;

    /// Discard the current edit
    fn cancel(&mut self) -> Result<()>;

    /// Resolves `true` on the next conclude, `false` on the next cancel
    fn wait(&mut self) -> Completion;
}

impl<V: Clone + ToString + 'static> EditableElement<V> for Template<V> {
    fn name(&self) -> &str {
        &self.states.name
    }

    fn set_name(&mut self, name: &str) {
        self.states.name = name.to_string();
        if let Some(editor) = self.editor.as_mut() {
            editor.set_name(name);
        }
        self.refresh_editor_slot();
    }

    fn value(&self) -> &V {
        &self.states.value
    }

    fn set_value(&mut self, value: V) {
        self.states.value = value;
        if let Some(editor) = self.editor.as_mut() {
            editor.set_value(self.states.value.clone());
            self.refresh_editor_slot();
            self.enable_handler();
        }
        self.replace_viewer();
    }

    fn default_value(&self) -> &V {
        &self.properties.value
    }

    fn required(&self) -> bool {
        self.states.required
    }

    fn set_required(&mut self, required: bool) {
        self.states.required = required;
        if let Some(editor) = self.editor.as_mut() {
            editor.set_required(required);
        }
        self.refresh_editor_slot();
        self.enable_handler();
    }

    fn read_only(&self) -> bool {
        self.states.read_only
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.states.read_only = read_only;
        if let Some(editor) = self.editor.as_mut() {
            editor.set_read_only(read_only);
        }
        self.refresh_editor_slot();
        self.enable_handler();
    }

    fn disabled(&self) -> bool {
        self.states.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.states.disabled = disabled;
        if let Some(editor) = self.editor.as_mut() {
            editor.set_disabled(disabled);
        }
        self.refresh_editor_slot();
        for slot in [SlotName::Edit, SlotName::Conclude, SlotName::Cancel] {
            set_assigned_disabled(&mut self.skeleton, slot, disabled);
        }
        if !disabled {
            self.enable_handler();
        }
    }

    fn element(&self) -> &Element {
        &self.skeleton
    }

    fn check_validity(&self) -> bool {
        self.editor_valid()
    }

    fn report_validity(&mut self) -> bool {
        self.editor_report_validity()
    }

    fn reset(&mut self) {
        self.restore_default();
    }

    fn edit(&mut self) -> Result<()> {
        self.enter_editing()
    }

    fn conclude(&mut self) -> Result<()> {
        self.conclude_editing()
    }

    fn cancel(&mut self) -> Result<()> {
        self.cancel_editing()
    }

    fn wait(&mut self) -> Completion {
        self.wait_for_completion()
    }
}
