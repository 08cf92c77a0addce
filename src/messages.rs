//! Message types for the Elm-style architecture
//!
//! User input reaches an editable field only through these messages.

/// Key released inside the editor. The field only re-evaluates its validity
/// gate on key release; binding keys to actions is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Parse a key name as typed on the command line
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Key::Enter,
            "escape" | "esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// User-facing input events of an editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableMsg {
    /// Edit button clicked
    EditClicked,
    /// Conclude button clicked
    ConcludeClicked,
    /// Cancel button clicked
    CancelClicked,
    /// Editor submitted (e.g. form submit)
    Submit,
    /// Editor committed a change to its value
    EditorChanged,
    /// Key released inside the editor
    EditorKeyUp(Key),
}

impl EditableMsg {
    /// Check if this message comes from the editor rather than a button
    pub fn is_editor_event(&self) -> bool {
        matches!(
            self,
            EditableMsg::Submit | EditableMsg::EditorChanged | EditableMsg::EditorKeyUp(_)
        )
    }
}
