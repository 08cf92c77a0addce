//! Encapsulated presentation of the field: a style sheet plus one wrapper.

use super::element::Element;
use super::slot::SlotName;

const STYLES: &str = ":host > .viewer,
:host > .editor {
  display: flex;
  flex-direction: row;
  width: 100%;
}";

/// The two presentation wrappers of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    /// Projects the viewer and the edit button
    Viewer,
    /// Projects the editor and the conclude/cancel buttons
    Editor,
}

impl Wrapper {
    pub fn class(&self) -> &'static str {
        match self {
            Wrapper::Viewer => "viewer",
            Wrapper::Editor => "editor",
        }
    }

    /// Slots projected by this wrapper, in order
    pub fn slots(&self) -> &'static [SlotName] {
        match self {
            Wrapper::Viewer => &[SlotName::Viewer, SlotName::Edit],
            Wrapper::Editor => &[SlotName::Editor, SlotName::Conclude, SlotName::Cancel],
        }
    }

    /// Markup of the wrapper, with one `<slot>` per projected slot
    pub fn element(&self) -> Element {
        Element::new("div").with_class(self.class()).with_children(
            self.slots()
                .iter()
                .map(|slot| Element::new("slot").with_attr("name", slot.as_str())),
        )
    }
}

/// Closed shadow root: fixed styles plus at most one mounted wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowRoot {
    mounted: Option<Wrapper>,
}

impl ShadowRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles(&self) -> &'static str {
        STYLES
    }

    pub fn mounted(&self) -> Option<Wrapper> {
        self.mounted
    }

    /// Mount `wrapper`, replacing whatever was mounted
    pub fn mount(&mut self, wrapper: Wrapper) {
        self.mounted = Some(wrapper);
    }

    /// Unmount `wrapper` if it is the mounted one
    pub fn unmount(&mut self, wrapper: Wrapper) {
        if self.mounted == Some(wrapper) {
            self.mounted = None;
        }
    }

    /// Markup of the shadow tree
    pub fn element(&self) -> Element {
        let mut root =
            Element::new("shadow-root").with_child(Element::new("style").with_text(STYLES));
        if let Some(wrapper) = self.mounted {
            root.append(wrapper.element());
        }
        root
    }
}
