//! Update function for the Elm-style architecture
//!
//! Routes user input to the field's guarded handlers. Every message is
//! processed inside a `DEBUG` span and the resulting state change is logged
//! as a snapshot diff.

use tracing::{debug, span, trace, Level};

use crate::editable::{EditableElement, Result, Template};
use crate::messages::EditableMsg;
use crate::tracing::FieldSnapshot;

/// Main update function - dispatches a message to the field
pub fn update<V: Clone + ToString + 'static>(
    field: &mut Template<V>,
    msg: EditableMsg,
) -> Result<()> {
    let _span = span!(Level::DEBUG, "update", msg = ?msg).entered();
    let before = FieldSnapshot::from_field(field);

    let result = update_inner(field, msg);

    let after = FieldSnapshot::from_field(field);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "field", %diff, "state changed");
    }

    result
}

fn update_inner<V: Clone + ToString + 'static>(
    field: &mut Template<V>,
    msg: EditableMsg,
) -> Result<()> {
    // The editor is only mounted while editing; stray editor events are dropped
    if msg.is_editor_event() && !field.is_editing() {
        trace!(target: "field", ?msg, "editor event while viewing ignored");
        return Ok(());
    }

    match msg {
        EditableMsg::EditClicked => field.edit(),
        EditableMsg::ConcludeClicked | EditableMsg::Submit => field.conclude(),
        EditableMsg::CancelClicked => field.cancel(),
        EditableMsg::EditorChanged => {
            field.change_handler();
            Ok(())
        }
        EditableMsg::EditorKeyUp(key) => {
            trace!(target: "field", ?key, "editor keyup");
            field.keyup_handler();
            Ok(())
        }
    }
}
