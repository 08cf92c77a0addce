//! Editable field: a view/edit widget controller.
//!
//! An editable field toggles between a read-only *viewer* and an interactive
//! *editor*. It tracks whether the editor reported changes, gates concluding
//! on the editor's validity, and signals the outcome of each edit session
//! through an awaitable [`Completion`].
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`EditableState`]: committed name/value/required/read-only/disabled
//! - [`render`](notify_render): viewer/editor rendering through cancellable
//!   notifications, with default fallbacks
//! - [`Template`]: the controller; owns the mode switch and validity gate
//! - [`Completion`]: one-shot outcome of an edit session
//! - [`EditableElement`]: the public property/operation surface
//! - [`EditorControl`]: capability interface for injected editors, with
//!   [`TextInput`] as a reference implementation
//!
//! # Example
//!
//! ```ignore
//! use editable_field::dom::Element;
//! use editable_field::editable::{EditableElement, Properties, Renderers, Template, TextInput};
//!
//! let input = TextInput::new("1");
//! let handle = input.clone();
//! let mut field = Template::new(
//!     Properties::new("count", "1".to_string()),
//!     Renderers::new().editor(move |_| handle.clone()),
//!     vec![
//!         Element::new("div").with_slot("viewer"),
//!         Element::new("div").with_slot("editor"),
//!     ],
//! )?;
//!
//! field.edit()?;
//! input.type_text("2");
//! ```

mod completion;
mod constraints;
mod control;
mod error;
mod facade;
mod input;
mod properties;
mod render;
mod state;
mod template;

pub use completion::Completion;
pub use constraints::{CharClass, InputConstraints, ValidityState};
pub use control::{EditorBox, EditorControl, Placeholder};
pub use error::{EditableError, Result};
pub use facade::EditableElement;
pub use input::TextInput;
pub use properties::Properties;
pub use render::{
    default_editor, default_viewer, notify_render, EditorEvent, EditorRenderer, RenderKind,
    RenderRequest, RenderResponse, Renderers, ViewerEvent, ViewerRenderer,
};
pub use state::EditableState;
pub use template::{Mode, Template, CHANGE_EVENT, EDITING_MARKER};
