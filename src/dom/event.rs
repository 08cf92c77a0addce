//! Structured notifications with a mutable detail payload.

/// Listener callback type
pub type Listener<D> = Box<dyn FnMut(&mut CustomEvent<'_, D>)>;

/// A notification being dispatched to listeners.
///
/// Listeners may mutate the detail. When the event is cancelable, a listener
/// may also suppress the default action with [`CustomEvent::prevent_default`].
pub struct CustomEvent<'a, D> {
    kind: &'static str,
    bubbles: bool,
    cancelable: bool,
    default_prevented: bool,
    detail: &'a mut D,
}

impl<'a, D> CustomEvent<'a, D> {
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    pub fn detail(&self) -> &D {
        &*self.detail
    }

    pub fn detail_mut(&mut self) -> &mut D {
        &mut *self.detail
    }

    /// Suppress the default action. Ignored for non-cancelable events.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Registry of listeners for notifications carrying a `D` payload.
pub struct EventTarget<D> {
    listeners: Vec<(&'static str, Listener<D>)>,
}

impl<D> Default for EventTarget<D> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<D> EventTarget<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for the given notification kind.
    /// Listeners run in registration order.
    pub fn add_listener<F>(&mut self, kind: &'static str, listener: F)
    where
        F: FnMut(&mut CustomEvent<'_, D>) + 'static,
    {
        self.listeners.push((kind, Box::new(listener)));
    }

    pub fn listener_count(&self, kind: &str) -> usize {
        self.listeners.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Dispatch a notification.
    ///
    /// Returns `false` if the event was cancelable and a listener prevented
    /// its default action, `true` otherwise.
    pub fn dispatch(
        &mut self,
        kind: &'static str,
        detail: &mut D,
        bubbles: bool,
        cancelable: bool,
    ) -> bool {
        let mut event = CustomEvent {
            kind,
            bubbles,
            cancelable,
            default_prevented: false,
            detail,
        };
        for (listener_kind, listener) in &mut self.listeners {
            if *listener_kind == kind {
                listener(&mut event);
            }
        }
        !event.default_prevented
    }
}

impl<D> std::fmt::Debug for EventTarget<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<&str> = self.listeners.iter().map(|(k, _)| *k).collect();
        f.debug_struct("EventTarget").field("listeners", &kinds).finish()
    }
}
