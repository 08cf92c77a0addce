//! Render delegation through cancellable notifications.
//!
//! The field never calls renderers directly. It dispatches a `renderviewer`
//! or `rendereditor` notification carrying the committed value; listeners may
//! fill in the output. A listener that prevents the default action
//! suppresses whatever output was written, and the field falls back to its
//! default node.

use crate::dom::{CustomEvent, Element, EventTarget, SlotName};

use super::control::{EditorBox, EditorControl, Placeholder};

/// Which presentation is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Viewer,
    Editor,
}

impl RenderKind {
    /// Notification name
    pub fn event_name(&self) -> &'static str {
        match self {
            RenderKind::Viewer => "renderviewer",
            RenderKind::Editor => "rendereditor",
        }
    }
}

/// Mutable detail of a render notification
#[derive(Debug)]
pub struct RenderRequest<V, N> {
    /// Committed value to render
    pub input: V,
    /// Node produced by a listener
    pub output: Option<N>,
}

/// Result of a render notification.
#[derive(Debug)]
pub struct RenderResponse<V, N> {
    pub input: V,
    /// `None` when no listener produced output or the output was suppressed
    pub output: Option<N>,
    /// `false` when an observer prevented the default action
    pub accepted: bool,
}

/// Render notification as seen by viewer listeners
pub type ViewerEvent<'a, V> = CustomEvent<'a, RenderRequest<V, Element>>;

/// Render notification as seen by editor listeners
pub type EditorEvent<'a, V> = CustomEvent<'a, RenderRequest<V, EditorBox<V>>>;

/// Viewer renderer callback
pub type ViewerRenderer<V> = Box<dyn Fn(&V) -> Element>;

/// Editor renderer callback
pub type EditorRenderer<V> = Box<dyn Fn(&V) -> EditorBox<V>>;

/// Renderer callbacks supplied at construction. Either may be absent, in
/// which case the field renders its defaults.
pub struct Renderers<V> {
    pub on_render_viewer: Option<ViewerRenderer<V>>,
    pub on_render_editor: Option<EditorRenderer<V>>,
}

impl<V> Default for Renderers<V> {
    fn default() -> Self {
        Self {
            on_render_viewer: None,
            on_render_editor: None,
        }
    }
}

impl<V: 'static> Renderers<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewer<F>(mut self, render: F) -> Self
    where
        F: Fn(&V) -> Element + 'static,
    {
        self.on_render_viewer = Some(Box::new(render));
        self
    }

    /// Editor renderer returning any concrete control
    pub fn editor<F, E>(mut self, render: F) -> Self
    where
        F: Fn(&V) -> E + 'static,
        E: EditorControl<V> + 'static,
    {
        self.on_render_editor = Some(Box::new(move |value: &V| -> EditorBox<V> {
            Box::new(render(value))
        }));
        self
    }
}

/// Dispatch a render notification of `kind` for `value`.
pub fn notify_render<V: Clone, N>(
    target: &mut EventTarget<RenderRequest<V, N>>,
    kind: RenderKind,
    value: &V,
) -> RenderResponse<V, N> {
    let mut detail = RenderRequest {
        input: value.clone(),
        output: None,
    };
    let accepted = target.dispatch(kind.event_name(), &mut detail, true, true);
    if !accepted {
        detail.output = None;
    }
    tracing::trace!(
        target: "render",
        kind = kind.event_name(),
        accepted,
        produced = detail.output.is_some(),
        "render notified"
    );
    RenderResponse {
        input: detail.input,
        output: detail.output,
        accepted,
    }
}

/// Default viewer: the value as text
pub fn default_viewer<V: ToString>(value: &V) -> Element {
    Element::new("div")
        .with_slot(SlotName::Viewer.as_str())
        .with_text(value.to_string())
}

/// Default editor: a placeholder stating no editor was supplied
pub fn default_editor<V: 'static>() -> EditorBox<V> {
    Box::new(Placeholder)
}
