//! Minimal in-memory host document for the editable field.
//!
//! The field controller never depends on a real rendering framework. It only
//! needs three things from its host, all provided here:
//!
//! - [`Element`]: a node tree with attributes, `data-*` markers, text content
//!   and a `disabled` property
//! - [`EventTarget`] / [`CustomEvent`]: cancellable, bubbling notifications
//!   carrying a mutable detail payload
//! - slot queries ([`first_assigned_mut`], [`set_assigned_disabled`]) and a
//!   [`ShadowRoot`] holding the mounted wrapper
//!
//! Frontends that drive a real widget toolkit translate from these types at
//! their own boundary.

mod element;
mod event;
mod shadow;
mod slot;

pub use element::Element;
pub use event::{CustomEvent, EventTarget, Listener};
pub use shadow::{ShadowRoot, Wrapper};
pub use slot::{assigned, first_assigned, first_assigned_mut, set_assigned_disabled, SlotName};
