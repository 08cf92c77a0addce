//! Scripted session driving a text field, used by the `editable` binary.
//!
//! Each command line maps onto the same messages a frontend would send, so a
//! script exercises the field exactly as clicks and keystrokes would.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use futures::FutureExt;

use crate::config::FieldConfig;
use crate::dom::{Element, SlotName};
use crate::editable::{Completion, EditableElement, Renderers, Template, TextInput};
use crate::messages::{EditableMsg, Key};
use crate::update::update;

/// One line of a session script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit,
    /// Replace the editor text and commit it as a change
    Type(String),
    Key(Key),
    Conclude,
    Cancel,
    Reset,
    /// Assign the value directly
    Set(String),
    Disable,
    Enable,
    Required(bool),
    Validity,
    Show,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let command = match word {
            "edit" => Command::Edit,
            "type" => Command::Type(rest.to_string()),
            "key" => Command::Key(Key::from_name(rest.trim())),
            "conclude" | "save" => Command::Conclude,
            "cancel" => Command::Cancel,
            "reset" => Command::Reset,
            "set" => Command::Set(rest.to_string()),
            "disable" => Command::Disable,
            "enable" => Command::Enable,
            "required" => match rest.trim() {
                "on" | "true" => Command::Required(true),
                "off" | "false" => Command::Required(false),
                other => bail!("expected `required on|off`, got `{}`", other),
            },
            "validity" => Command::Validity,
            "show" => Command::Show,
            other => bail!("unknown command `{}`", other),
        };
        Ok(command)
    }
}

/// Light-DOM children of the demo field
pub fn default_children() -> Vec<Element> {
    vec![
        Element::new("div").with_slot(SlotName::Viewer.as_str()),
        Element::new("div").with_slot(SlotName::Editor.as_str()),
        Element::new("button")
            .with_slot(SlotName::Edit.as_str())
            .with_text("Edit"),
        Element::new("button")
            .with_slot(SlotName::Conclude.as_str())
            .with_text("Save"),
        Element::new("button")
            .with_slot(SlotName::Cancel.as_str())
            .with_text("Cancel"),
    ]
}

/// A text field plus the handles a user would interact with
pub struct Session {
    field: Template<String>,
    input: Rc<RefCell<Option<TextInput>>>,
    waiter: Option<Completion>,
    changes: Rc<Cell<usize>>,
}

impl Session {
    pub fn new(config: FieldConfig) -> Result<Self> {
        let input: Rc<RefCell<Option<TextInput>>> = Rc::new(RefCell::new(None));
        let editor_slot = Rc::clone(&input);
        let constraints = config.constraints;

        let renderers = Renderers::new()
            .viewer(|value: &String| {
                Element::new("span")
                    .with_slot(SlotName::Viewer.as_str())
                    .with_text(value.as_str())
            })
            .editor(move |value: &String| {
                let editor = TextInput::new(value.as_str()).with_constraints(constraints.clone());
                *editor_slot.borrow_mut() = Some(editor.clone());
                editor
            });

        let mut field = Template::new(config.field, renderers, default_children())
            .context("Failed to build field")?;

        let changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&changes);
        field.on_change(move || counter.set(counter.get() + 1));

        Ok(Self {
            field,
            input,
            waiter: None,
            changes,
        })
    }

    pub fn field(&self) -> &Template<String> {
        &self.field
    }

    /// Number of `change` notifications fired so far
    pub fn change_count(&self) -> usize {
        self.changes.get()
    }

    fn input(&self) -> Result<TextInput> {
        self.input
            .borrow()
            .clone()
            .ok_or_else(|| anyhow!("no editor yet: run `edit` first"))
    }

    /// Run one command and describe the resulting state
    pub fn execute(&mut self, command: Command) -> Result<String> {
        let mut notes = Vec::new();
        match command {
            Command::Edit => {
                update(&mut self.field, EditableMsg::EditClicked)?;
                if self.field.is_editing() && self.waiter.is_none() {
                    self.waiter = Some(self.field.wait());
                }
            }
            Command::Type(text) => {
                if !self.input()?.type_text(&text) {
                    notes.push("input rejected the text".to_string());
                }
                update(&mut self.field, EditableMsg::EditorKeyUp(Key::Other))?;
                update(&mut self.field, EditableMsg::EditorChanged)?;
            }
            Command::Key(key) => {
                update(&mut self.field, EditableMsg::EditorKeyUp(key))?;
                // Driver shortcuts: Enter submits, Escape cancels
                match key {
                    Key::Enter => update(&mut self.field, EditableMsg::Submit)?,
                    Key::Escape => update(&mut self.field, EditableMsg::CancelClicked)?,
                    Key::Other => {}
                }
            }
            Command::Conclude => update(&mut self.field, EditableMsg::ConcludeClicked)?,
            Command::Cancel => update(&mut self.field, EditableMsg::CancelClicked)?,
            Command::Reset => self.field.reset(),
            Command::Set(value) => self.field.set_value(value),
            Command::Disable => self.field.set_disabled(true),
            Command::Enable => self.field.set_disabled(false),
            Command::Required(required) => self.field.set_required(required),
            Command::Validity => {
                let valid = self.field.report_validity();
                let report = self
                    .input
                    .borrow()
                    .as_ref()
                    .and_then(TextInput::last_report)
                    .map(|validity| validity.message())
                    .filter(|message| !message.is_empty());
                notes.push(match report {
                    Some(message) => format!("valid: {} ({})", valid, message),
                    None => format!("valid: {}", valid),
                });
            }
            Command::Show => notes.push(self.field.markup()),
        }

        if let Some(outcome) = self.poll_outcome() {
            notes.push(if outcome {
                "session concluded".to_string()
            } else {
                "session cancelled".to_string()
            });
        }

        notes.insert(0, self.status());
        Ok(notes.join("\n"))
    }

    /// Outcome of the tracked edit session, once it resolved
    fn poll_outcome(&mut self) -> Option<bool> {
        let waiter = self.waiter.as_mut()?;
        let outcome = waiter.now_or_never()?;
        self.waiter = None;
        Some(outcome)
    }

    /// One-line summary of the field
    pub fn status(&self) -> String {
        format!(
            "[{:?}] {} = {:?}{}{}",
            self.field.mode(),
            self.field.name(),
            self.field.value(),
            if self.field.disabled() { " (disabled)" } else { "" },
            if self.field.is_changed() { " *" } else { "" },
        )
    }
}
