//! TextInput - a reference single-line editor control.
//!
//! `TextInput` is a cheap handle: clones share the same underlying state, the
//! same way a DOM node reference does. A field owns one handle as its editor
//! while the frontend (or a test) keeps another to deliver user keystrokes.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Element, SlotName};

use super::constraints::{InputConstraints, ValidityState};
use super::control::EditorControl;

#[derive(Debug, Default)]
struct InputState {
    name: String,
    value: String,
    default_value: String,
    required: bool,
    read_only: bool,
    disabled: bool,
    constraints: InputConstraints,
    last_report: Option<ValidityState>,
}

/// Shared handle to a single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    inner: Rc<RefCell<InputState>>,
}

impl TextInput {
    /// Create an input showing `value`. The value is also what
    /// [`reset`](EditorControl::reset) restores.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            inner: Rc::new(RefCell::new(InputState {
                default_value: value.clone(),
                value,
                ..InputState::default()
            })),
        }
    }

    pub fn with_constraints(self, constraints: InputConstraints) -> Self {
        self.inner.borrow_mut().constraints = constraints;
        self
    }

    /// Simulate the user replacing the text. Returns `false` (and leaves the
    /// value untouched) when the input is read-only or disabled.
    pub fn type_text(&self, text: &str) -> bool {
        let mut state = self.inner.borrow_mut();
        if state.read_only || state.disabled {
            return false;
        }
        state.value = text.to_string();
        true
    }

    pub fn text(&self) -> String {
        self.inner.borrow().value.clone()
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    pub fn is_required(&self) -> bool {
        self.inner.borrow().required
    }

    pub fn is_read_only(&self) -> bool {
        self.inner.borrow().read_only
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.borrow().disabled
    }

    /// Current validity of the typed text
    pub fn validity(&self) -> ValidityState {
        let state = self.inner.borrow();
        state.constraints.validate(&state.value, state.required)
    }

    /// Result of the most recent [`report_validity`](EditorControl::report_validity)
    pub fn last_report(&self) -> Option<ValidityState> {
        self.inner.borrow().last_report
    }

    /// Whether two handles refer to the same input
    pub fn ptr_eq(&self, other: &TextInput) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl EditorControl<String> for TextInput {
    fn element(&self) -> Element {
        let state = self.inner.borrow();
        let mut el = Element::new("input")
            .with_slot(SlotName::Editor.as_str())
            .with_attr("value", state.value.as_str());
        if !state.name.is_empty() {
            el.set_attr("name", state.name.as_str());
        }
        if state.required {
            el.set_attr("required", "");
        }
        if state.read_only {
            el.set_attr("readonly", "");
        }
        el.set_disabled(state.disabled);
        el
    }

    fn value(&self) -> Option<String> {
        Some(self.text())
    }

    fn set_value(&mut self, value: String) {
        self.inner.borrow_mut().value = value;
    }

    fn set_name(&mut self, name: &str) {
        self.inner.borrow_mut().name = name.to_string();
    }

    fn set_required(&mut self, required: bool) {
        self.inner.borrow_mut().required = required;
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.inner.borrow_mut().disabled = disabled;
    }

    fn check_validity(&self) -> Option<bool> {
        Some(self.validity().is_valid())
    }

    fn report_validity(&mut self) -> Option<bool> {
        let validity = self.validity();
        if !validity.is_valid() {
            tracing::warn!(
                target: "validity",
                name = %self.name(),
                message = %validity.message(),
                "input is invalid"
            );
        }
        self.inner.borrow_mut().last_report = Some(validity);
        Some(validity.is_valid())
    }

    fn reset(&mut self) -> bool {
        let mut state = self.inner.borrow_mut();
        state.value = state.default_value.clone();
        state.last_report = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::constraints::CharClass;

    #[test]
    fn test_clones_share_state() {
        let input = TextInput::new("a");
        let handle = input.clone();
        assert!(handle.type_text("b"));
        assert_eq!(input.text(), "b");
        assert!(input.ptr_eq(&handle));
    }

    #[test]
    fn test_read_only_rejects_typing() {
        let mut input = TextInput::new("a");
        input.set_read_only(true);
        assert!(!input.type_text("b"));
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_required_validity() {
        let mut input = TextInput::new("");
        assert_eq!(input.check_validity(), Some(true));
        input.set_required(true);
        assert_eq!(input.check_validity(), Some(false));
        assert_eq!(input.report_validity(), Some(false));
        assert_eq!(input.last_report(), Some(ValidityState::ValueMissing));
    }

    #[test]
    fn test_constraints_apply() {
        let input = TextInput::new("").with_constraints(InputConstraints {
            char_filter: CharClass::Digits,
            ..InputConstraints::default()
        });
        input.type_text("12x");
        assert_eq!(input.validity(), ValidityState::InvalidChar('x'));
    }

    #[test]
    fn test_reset_restores_initial_value() {
        let mut input = TextInput::new("start");
        input.type_text("changed");
        assert!(input.reset());
        assert_eq!(input.text(), "start");
    }

    #[test]
    fn test_element_reflects_properties() {
        let mut input = TextInput::new("v");
        input.set_name("title");
        input.set_required(true);
        input.set_disabled(true);
        let el = input.element();
        assert_eq!(el.tag(), "input");
        assert_eq!(el.attr("name"), Some("title"));
        assert_eq!(el.attr("value"), Some("v"));
        assert_eq!(el.attr("required"), Some(""));
        assert!(el.is_disabled());
    }
}
