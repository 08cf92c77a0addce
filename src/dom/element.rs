//! Element node tree.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use quick_xml::escape::escape;

/// A DOM-like element.
///
/// Attributes and `data-*` markers are kept in ordered maps so the rendered
/// markup is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    dataset: BTreeMap<String, String>,
    text: Option<String>,
    disabled: bool,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder: set an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: set the `slot` attribute
    pub fn with_slot(self, slot: impl Into<String>) -> Self {
        self.with_attr("slot", slot)
    }

    /// Builder: set the `class` attribute
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    /// Builder: set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: append a child
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn slot(&self) -> Option<&str> {
        self.attr("slot")
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Concatenated text of this element and all descendants, in document order
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// Append a child node
    pub fn append(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Remove all children and text, returning `self` for chaining
    pub fn clear(&mut self) -> &mut Self {
        self.children.clear();
        self.text = None;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The `data-*` markers map
    pub fn dataset(&self) -> &BTreeMap<String, String> {
        &self.dataset
    }

    /// Toggle a boolean presentation marker (`data-<name>="on"` or absent)
    pub fn set_marker(&mut self, name: &str, state: bool) {
        if state {
            self.dataset.insert(name.to_string(), "on".to_string());
        } else {
            self.dataset.remove(name);
        }
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.dataset.get(name).is_some_and(|v| v == "on")
    }

    fn write_markup(&self, out: &mut String) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(out, " {}=\"{}\"", name, escape(value.as_str()))?;
        }
        for (name, value) in &self.dataset {
            write!(out, " data-{}=\"{}\"", name, escape(value.as_str()))?;
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text.as_str()));
        }
        for child in &self.children {
            child.write_markup(out)?;
        }
        write!(out, "</{}>", self.tag)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_markup(&mut out)?;
        f.write_str(&out)
    }
}
