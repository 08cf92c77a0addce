//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use editable_field::dom::{first_assigned, Element, SlotName};
use editable_field::editable::{
    EditableElement, InputConstraints, Properties, Renderers, Template, TextInput,
};

/// A field together with the handle of its text input
pub struct Fixture {
    pub field: Template<String>,
    pub input: TextInput,
    pub changes: Rc<Cell<usize>>,
}

impl Fixture {
    /// Number of `change` notifications fired so far
    pub fn change_count(&self) -> usize {
        self.changes.get()
    }

    /// Simulate the user typing `text` and committing it
    pub fn type_and_commit(&mut self, text: &str) {
        assert!(self.input.type_text(text), "input rejected {:?}", text);
        editable_field::update(&mut self.field, editable_field::EditableMsg::EditorChanged)
            .unwrap();
    }
}

/// Light-DOM children with every slot filled
pub fn full_children() -> Vec<Element> {
    vec![
        Element::new("div").with_slot(SlotName::Viewer.as_str()),
        Element::new("div").with_slot(SlotName::Editor.as_str()),
        Element::new("button").with_slot(SlotName::Edit.as_str()),
        Element::new("button").with_slot(SlotName::Conclude.as_str()),
        Element::new("button").with_slot(SlotName::Cancel.as_str()),
    ]
}

/// Children without the slot named `missing`
pub fn children_without(missing: SlotName) -> Vec<Element> {
    full_children()
        .into_iter()
        .filter(|child| child.slot() != Some(missing.as_str()))
        .collect()
}

/// Renderers whose editor is always `input`
pub fn text_renderers(input: &TextInput) -> Renderers<String> {
    let handle = input.clone();
    Renderers::new().editor(move |_: &String| handle.clone())
}

/// Build a field named `title` holding `value`, edited through a text input
pub fn text_field(value: &str) -> Fixture {
    text_field_with(
        Properties::new("title", value.to_string()),
        InputConstraints::default(),
    )
}

/// Build a field from `properties`, edited through a text input under
/// `constraints`
pub fn text_field_with(properties: Properties<String>, constraints: InputConstraints) -> Fixture {
    let input = TextInput::new(properties.value.as_str()).with_constraints(constraints);
    let mut field = Template::new(properties, text_renderers(&input), full_children()).unwrap();

    let changes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changes);
    field.on_change(move || counter.set(counter.get() + 1));

    Fixture {
        field,
        input,
        changes,
    }
}

/// Text of the node currently projected into the viewer slot
pub fn viewer_text(field: &Template<String>) -> Option<String> {
    first_assigned(field.element(), SlotName::Viewer)
        .and_then(|slot| slot.children().first())
        .and_then(|viewer| viewer.text())
        .map(str::to_string)
}

/// `value` attribute of the editor node projected into the editor slot
pub fn editor_slot_value(field: &Template<String>) -> Option<String> {
    first_assigned(field.element(), SlotName::Editor)
        .and_then(|slot| slot.children().first())
        .and_then(|editor| editor.attr("value"))
        .map(str::to_string)
}
