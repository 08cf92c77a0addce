//! Named slots and the light-DOM children assigned to them.

use std::fmt;

use super::element::Element;

/// The named slots an editable field projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotName {
    /// Host element for the viewer node
    Viewer,
    /// "Edit" button(s)
    Edit,
    /// Host element for the editor node
    Editor,
    /// "Conclude" button(s)
    Conclude,
    /// "Cancel" button(s)
    Cancel,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::Viewer => "viewer",
            SlotName::Edit => "edit",
            SlotName::Editor => "editor",
            SlotName::Conclude => "conclude",
            SlotName::Cancel => "cancel",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Children of `host` assigned to `slot`
pub fn assigned<'a>(host: &'a Element, slot: SlotName) -> impl Iterator<Item = &'a Element> + 'a {
    host.children()
        .iter()
        .filter(move |child| child.slot() == Some(slot.as_str()))
}

/// First element assigned to `slot`, if any
pub fn first_assigned(host: &Element, slot: SlotName) -> Option<&Element> {
    assigned(host, slot).next()
}

/// First element assigned to `slot`, mutably
pub fn first_assigned_mut(host: &mut Element, slot: SlotName) -> Option<&mut Element> {
    host.children_mut()
        .iter_mut()
        .find(|child| child.slot() == Some(slot.as_str()))
}

/// Set the `disabled` property on every element assigned to `slot`
pub fn set_assigned_disabled(host: &mut Element, slot: SlotName, disabled: bool) {
    host.children_mut()
        .iter_mut()
        .filter(|child| child.slot() == Some(slot.as_str()))
        .for_each(|child| child.set_disabled(disabled));
}
