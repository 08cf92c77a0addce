//! Template - the editable field controller.
//!
//! The field is always in one of two modes, derived from which wrapper is
//! mounted in its shadow root:
//!
//! - **Viewing**: the viewer wrapper projects the viewer node and the edit
//!   button
//! - **Editing**: the editor wrapper projects the editor node and the
//!   conclude/cancel buttons, and the host carries `data-editing="on"`
//!
//! Structural mutations (wrapper mount/unmount, slot contents, control
//! flags) always complete before any notification fires, so `change`
//! listeners and completion waiters never observe a half-switched field.

use tracing::debug;

use crate::dom::{
    first_assigned, first_assigned_mut, set_assigned_disabled, Element, EventTarget, ShadowRoot,
    SlotName, Wrapper,
};

use super::completion::{Completion, Conclusion};
use super::control::EditorBox;
use super::error::{EditableError, Result};
use super::facade::EditableElement;
use super::properties::Properties;
use super::render::{
    default_editor, default_viewer, notify_render, EditorEvent, RenderKind, RenderRequest,
    Renderers, ViewerEvent,
};
use super::state::EditableState;

/// Marker toggled on the host while editing
pub const EDITING_MARKER: &str = "editing";

/// Public notification fired after a concluded session with changes
pub const CHANGE_EVENT: &str = "change";

/// Presentation mode of an editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Editing,
}

/// Editable field controller.
///
/// Owns the committed state, the lazily created editor, the current viewer
/// node and the host skeleton. Use it through [`EditableElement`] and route
/// user input through [`crate::update::update`].
pub struct Template<V> {
    pub(super) properties: Properties<V>,
    pub(super) states: EditableState<V>,
    /// The editor reported a change since editing started
    pub(super) changed: bool,
    /// Created on first edit, reused afterwards
    pub(super) editor: Option<EditorBox<V>>,
    pub(super) viewer: Element,
    pub(super) conclusion: Conclusion,
    pub(super) skeleton: Element,
    pub(super) shadow: ShadowRoot,
    viewer_events: EventTarget<RenderRequest<V, Element>>,
    editor_events: EventTarget<RenderRequest<V, EditorBox<V>>>,
    change_events: EventTarget<()>,
}

impl<V: Clone + ToString + 'static> Template<V> {
    /// Build a field from its properties, renderers and light-DOM children.
    ///
    /// The children must include an element assigned to the `viewer` slot,
    /// and one assigned to the `editor` slot before the first edit.
    pub fn new(
        properties: Properties<V>,
        renderers: Renderers<V>,
        children: Vec<Element>,
    ) -> Result<Self> {
        let mut skeleton = Element::new("div").with_children(children);
        if let Some(slot) = &properties.slot {
            skeleton.set_attr("slot", slot.as_str());
        }
        if let Some(class) = &properties.class {
            skeleton.set_attr("class", class.as_str());
        }

        let mut template = Self {
            states: EditableState::from_properties(&properties),
            properties,
            changed: false,
            editor: None,
            viewer: Element::default(),
            conclusion: Conclusion::default(),
            skeleton,
            shadow: ShadowRoot::new(),
            viewer_events: EventTarget::new(),
            editor_events: EventTarget::new(),
            change_events: EventTarget::new(),
        };
        template.bind_renderers(renderers);
        template.initial_render()?;
        Ok(template)
    }

    fn bind_renderers(&mut self, renderers: Renderers<V>) {
        if let Some(render) = renderers.on_render_viewer {
            self.on_render_viewer(move |event| {
                let output = render(&event.detail().input);
                event.detail_mut().output = Some(output);
            });
        }
        if let Some(render) = renderers.on_render_editor {
            self.on_render_editor(move |event| {
                let output = render(&event.detail().input);
                event.detail_mut().output = Some(output);
            });
        }
    }

    fn initial_render(&mut self) -> Result<()> {
        self.viewer = self.render_viewer();
        self.stop_editing()
    }

    /// Observe `renderviewer` notifications. Listeners may write the output
    /// or suppress it with `prevent_default`.
    pub fn on_render_viewer<F>(&mut self, listener: F)
    where
        F: FnMut(&mut ViewerEvent<'_, V>) + 'static,
    {
        self.viewer_events
            .add_listener(RenderKind::Viewer.event_name(), listener);
    }

    /// Observe `rendereditor` notifications
    pub fn on_render_editor<F>(&mut self, listener: F)
    where
        F: FnMut(&mut EditorEvent<'_, V>) + 'static,
    {
        self.editor_events
            .add_listener(RenderKind::Editor.event_name(), listener);
    }

    /// Observe the public `change` notification
    pub fn on_change<F>(&mut self, mut listener: F)
    where
        F: FnMut() + 'static,
    {
        self.change_events.add_listener(CHANGE_EVENT, move |_| listener());
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Current mode, derived from the mounted wrapper
    pub fn mode(&self) -> Mode {
        let mode = match self.shadow.mounted() {
            Some(Wrapper::Editor) => Mode::Editing,
            _ => Mode::Viewing,
        };
        debug_assert_eq!(
            mode == Mode::Editing,
            self.skeleton.has_marker(EDITING_MARKER),
            "editing marker out of sync with mounted wrapper"
        );
        mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode() == Mode::Editing
    }

    /// Whether the editor reported a change since editing started
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn has_editor(&self) -> bool {
        self.editor.is_some()
    }

    /// The current viewer node
    pub fn viewer(&self) -> &Element {
        &self.viewer
    }

    pub fn shadow(&self) -> &ShadowRoot {
        &self.shadow
    }

    /// Whether every control assigned to `slot` is disabled (`None` when the
    /// slot has no controls)
    pub fn controls_disabled(&self, slot: SlotName) -> Option<bool> {
        let mut controls = crate::dom::assigned(&self.skeleton, slot).peekable();
        controls.peek()?;
        Some(controls.all(Element::is_disabled))
    }

    /// Markup of the host followed by its shadow tree
    pub fn markup(&self) -> String {
        format!("{}\n{}", self.skeleton, self.shadow.element())
    }

    // =========================================================================
    // Render coordination
    // =========================================================================

    pub(super) fn render_viewer(&mut self) -> Element {
        let response = notify_render(
            &mut self.viewer_events,
            RenderKind::Viewer,
            &self.states.value,
        );
        response
            .output
            .unwrap_or_else(|| default_viewer(&response.input))
    }

    fn render_editor(&mut self) -> EditorBox<V> {
        let response = notify_render(
            &mut self.editor_events,
            RenderKind::Editor,
            &self.states.value,
        );
        response.output.unwrap_or_else(default_editor)
    }

    /// Re-render the viewer and place it into the viewer slot, if present
    pub(super) fn replace_viewer(&mut self) {
        self.viewer = self.render_viewer();
        if let Some(slot) = first_assigned_mut(&mut self.skeleton, SlotName::Viewer) {
            slot.clear().append(self.viewer.clone());
        }
    }

    /// Re-mount the editor's presentation into the editor slot
    pub(super) fn refresh_editor_slot(&mut self) {
        let Some(editor) = &self.editor else {
            return;
        };
        let element = editor.element();
        if let Some(slot) = first_assigned_mut(&mut self.skeleton, SlotName::Editor) {
            slot.clear().append(element);
        }
    }

    // =========================================================================
    // Mode switching
    // =========================================================================

    fn update_property_state(&mut self, property: &str, state: bool) {
        self.skeleton.set_marker(property, state);
    }

    fn require_slot(&self, slot: SlotName) -> Result<()> {
        match first_assigned(&self.skeleton, slot) {
            Some(_) => Ok(()),
            None => Err(EditableError::SlotNotProvided(slot)),
        }
    }

    fn start_editing(&mut self) -> Result<()> {
        self.require_slot(SlotName::Editor)?;

        self.changed = false;
        self.shadow.unmount(Wrapper::Viewer);
        self.update_property_state(EDITING_MARKER, true);
        self.shadow.mount(Wrapper::Editor);
        self.refresh_editor_slot();

        let disabled = self.states.disabled;
        let conclude_disabled = disabled || !self.editor_valid();
        set_assigned_disabled(&mut self.skeleton, SlotName::Conclude, conclude_disabled);
        set_assigned_disabled(&mut self.skeleton, SlotName::Cancel, disabled);
        Ok(())
    }

    fn stop_editing(&mut self) -> Result<()> {
        self.require_slot(SlotName::Viewer)?;

        self.changed = false;
        self.shadow.unmount(Wrapper::Editor);
        self.update_property_state(EDITING_MARKER, false);
        self.shadow.mount(Wrapper::Viewer);
        if let Some(slot) = first_assigned_mut(&mut self.skeleton, SlotName::Viewer) {
            slot.clear().append(self.viewer.clone());
        }

        let disabled = self.states.disabled;
        set_assigned_disabled(&mut self.skeleton, SlotName::Edit, disabled);
        Ok(())
    }

    /// Switch to editing, rendering the editor on first use.
    /// No-op while disabled or already editing.
    pub(super) fn enter_editing(&mut self) -> Result<()> {
        if self.states.disabled {
            debug!(target: "field", name = %self.states.name, "edit ignored: disabled");
            return Ok(());
        }
        if self.is_editing() {
            return Ok(());
        }
        self.require_slot(SlotName::Editor)?;

        if self.editor.is_none() {
            let mut editor = self.render_editor();
            editor.set_name(&self.states.name);
            editor.set_required(self.states.required);
            editor.set_read_only(self.states.read_only);
            editor.set_disabled(self.states.disabled);
            self.editor = Some(editor);
        }

        self.start_editing()?;
        debug!(target: "field", name = %self.states.name, "editing started");
        Ok(())
    }

    /// Commit the editor's value and switch back to viewing.
    /// No-op while viewing, disabled or invalid.
    pub(super) fn conclude_editing(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Ok(());
        }
        if self.states.disabled || !self.editor_valid() {
            debug!(target: "field", name = %self.states.name, "conclude ignored");
            return Ok(());
        }
        self.require_slot(SlotName::Viewer)?;

        let changed = self.changed;
        if changed {
            if let Some(value) = self.editor.as_ref().and_then(|editor| editor.value()) {
                self.states.value = value;
            }
            self.viewer = self.render_viewer();
        }
        self.stop_editing()?;

        let waiters = self.conclusion.resolve(true);
        if changed {
            self.change_events.dispatch(CHANGE_EVENT, &mut (), true, false);
        }
        debug!(target: "field", name = %self.states.name, changed, waiters, "editing concluded");
        Ok(())
    }

    /// Discard in-progress edits and switch back to viewing.
    /// No-op while viewing or disabled.
    pub(super) fn cancel_editing(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Ok(());
        }
        if self.states.disabled {
            debug!(target: "field", name = %self.states.name, "cancel ignored: disabled");
            return Ok(());
        }
        self.require_slot(SlotName::Viewer)?;

        if self.changed {
            if let Some(editor) = self.editor.as_mut() {
                editor.set_value(self.states.value.clone());
            }
            self.refresh_editor_slot();
        }
        self.stop_editing()?;

        let waiters = self.conclusion.resolve(false);
        debug!(target: "field", name = %self.states.name, waiters, "editing cancelled");
        Ok(())
    }

    /// Reset to the default value: through the editor's own reset when it has
    /// one, otherwise by assigning the construction-time value.
    pub(super) fn restore_default(&mut self) {
        let reset_by_editor = self.editor.as_mut().is_some_and(|editor| editor.reset());
        if reset_by_editor {
            self.refresh_editor_slot();
        } else {
            let value = self.properties.value.clone();
            self.set_value(value);
        }
        self.enable_handler();
        self.changed = false;
    }

    pub(super) fn wait_for_completion(&mut self) -> Completion {
        self.conclusion.wait()
    }

    // =========================================================================
    // Validity gate
    // =========================================================================

    /// The editor exists, can check its validity, and is valid
    pub(super) fn editor_valid(&self) -> bool {
        self.editor
            .as_ref()
            .and_then(|editor| editor.check_validity())
            .unwrap_or(false)
    }

    pub(super) fn editor_report_validity(&mut self) -> bool {
        let valid = self
            .editor
            .as_mut()
            .and_then(|editor| editor.report_validity())
            .unwrap_or(false);
        self.refresh_editor_slot();
        valid
    }

    /// Recompute the conclude control's disabled flag from editor validity.
    /// Leaves the flag alone while the field is disabled.
    pub(crate) fn enable_handler(&mut self) {
        let disable = !self.editor_valid();
        if !self.states.disabled {
            set_assigned_disabled(&mut self.skeleton, SlotName::Conclude, disable);
        }
    }

    // =========================================================================
    // Editor notifications
    // =========================================================================

    /// The editor reported a committed change of its value
    pub(crate) fn change_handler(&mut self) {
        self.enable_handler();
        self.changed = true;
        self.refresh_editor_slot();
    }

    /// The editor reported a key release
    pub(crate) fn keyup_handler(&mut self) {
        self.enable_handler();
        self.refresh_editor_slot();
    }
}

impl<V> std::fmt::Debug for Template<V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("states", &self.states)
            .field("changed", &self.changed)
            .field("has_editor", &self.editor.is_some())
            .field("awaited", &self.conclusion.is_pending())
            .field("viewer", &self.viewer)
            .field("shadow", &self.shadow)
            .finish_non_exhaustive()
    }
}
