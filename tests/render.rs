//! Render delegation, default fallbacks and slot requirements

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{children_without, full_children, text_renderers, viewer_text};
use editable_field::dom::{Element, SlotName};
use editable_field::editable::{
    EditableElement, EditableError, EditorBox, EditorEvent, Mode, Properties, Renderers, Template,
    TextInput, ViewerEvent,
};

#[test]
fn test_custom_viewer_renderer() {
    let renderers = Renderers::new().viewer(|value: &String| {
        Element::new("strong")
            .with_slot(SlotName::Viewer.as_str())
            .with_text(format!("#{}", value))
    });
    let mut field =
        Template::new(Properties::new("n", "1".to_string()), renderers, full_children()).unwrap();

    assert_eq!(field.viewer().tag(), "strong");
    assert_eq!(viewer_text(&field).as_deref(), Some("#1"));

    field.set_value("2".to_string());
    assert_eq!(viewer_text(&field).as_deref(), Some("#2"));
}

#[test]
fn test_prevented_viewer_render_falls_back_to_default() {
    let renderers = Renderers::new().viewer(|value: &String| {
        Element::new("strong").with_text(value.clone())
    });
    let mut field =
        Template::new(Properties::new("n", "1".to_string()), renderers, full_children()).unwrap();

    field.on_render_viewer(|event: &mut ViewerEvent<'_, String>| event.prevent_default());
    field.set_value("2".to_string());

    assert_eq!(field.viewer().tag(), "div");
    assert_eq!(field.viewer().slot(), Some("viewer"));
    assert_eq!(viewer_text(&field).as_deref(), Some("2"));
}

#[test]
fn test_render_listeners_observe_value() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let mut field = Template::new(
        Properties::new("n", "1".to_string()),
        Renderers::new(),
        full_children(),
    )
    .unwrap();
    field.on_render_viewer(move |event: &mut ViewerEvent<'_, String>| {
        log.borrow_mut().push(event.detail().input.clone());
    });

    field.set_value("2".to_string());
    field.set_value("3".to_string());

    assert_eq!(*seen.borrow(), vec!["2".to_string(), "3".to_string()]);
}

#[test]
fn test_editor_listener_can_supply_editor() {
    let input = TextInput::new("1");
    let handle = input.clone();
    let mut field = Template::new(
        Properties::new("n", "1".to_string()),
        Renderers::new(),
        full_children(),
    )
    .unwrap();
    field.on_render_editor(move |event: &mut EditorEvent<'_, String>| {
        event.detail_mut().output = Some(Box::new(handle.clone()) as EditorBox<String>);
    });

    field.edit().unwrap();
    assert!(field.check_validity());
    assert_eq!(input.name(), "n");
}

#[test]
fn test_prevented_editor_render_uses_placeholder() {
    let input = TextInput::new("1");
    let mut field = Template::new(
        Properties::new("n", "1".to_string()),
        text_renderers(&input),
        full_children(),
    )
    .unwrap();
    field.on_render_editor(|event: &mut EditorEvent<'_, String>| event.prevent_default());

    field.edit().unwrap();
    assert!(field.has_editor());
    assert!(!field.check_validity());
    // The supplied input was discarded, so it never received the field's name
    assert_eq!(input.name(), "");
}

#[test]
fn test_missing_viewer_slot_fails_construction() {
    let result = Template::new(
        Properties::new("n", "1".to_string()),
        Renderers::new(),
        children_without(SlotName::Viewer),
    );
    let err = result.unwrap_err();
    assert!(matches!(err, EditableError::SlotNotProvided(SlotName::Viewer)));
    assert_eq!(err.to_string(), "Viewer element not provided");
}

#[test]
fn test_missing_editor_slot_fails_edit() {
    let input = TextInput::new("1");
    let mut field = Template::new(
        Properties::new("n", "1".to_string()),
        text_renderers(&input),
        children_without(SlotName::Editor),
    )
    .unwrap();

    let err = field.edit().unwrap_err();
    assert_eq!(err.to_string(), "Editor element not provided");
    assert_eq!(field.mode(), Mode::Viewing);
}

#[test]
fn test_buttons_are_optional() {
    let children = full_children()
        .into_iter()
        .filter(|child| {
            !matches!(
                child.slot(),
                Some("edit") | Some("conclude") | Some("cancel")
            )
        })
        .collect();
    let mut field =
        Template::new(Properties::new("n", "1".to_string()), Renderers::new(), children).unwrap();

    assert_eq!(field.controls_disabled(SlotName::Conclude), None);
    field.edit().unwrap();
    field.cancel().unwrap();
    assert_eq!(field.mode(), Mode::Viewing);
}

#[test]
fn test_markup_escapes_value() {
    let mut field = Template::new(
        Properties::new("n", "1".to_string()),
        Renderers::new(),
        full_children(),
    )
    .unwrap();
    field.set_value("a\"b<i>".to_string());

    assert_eq!(viewer_text(&field).as_deref(), Some("a\"b<i>"));
    let markup = field.markup();
    assert!(markup.contains("<div slot=\"viewer\">a&quot;b&lt;i&gt;</div>"));
    assert!(!markup.contains("<i>"));
}

#[test]
fn test_markup_shows_mounted_wrapper() {
    let mut field = Template::new(
        Properties::new("n", "1".to_string()),
        Renderers::new(),
        full_children(),
    )
    .unwrap();
    assert!(field.markup().contains("class=\"viewer\""));

    field.edit().unwrap();
    let markup = field.markup();
    assert!(markup.contains("class=\"editor\""));
    assert!(markup.contains("data-editing=\"on\""));
}
