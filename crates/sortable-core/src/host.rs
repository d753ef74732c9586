//! The boundary between the engine and whatever renders the list.
//!
//! The engine never touches a DOM or a widget tree directly. It reads boxes
//! and sends [`StyleCommand`]s through a [`Host`], which a browser binding,
//! a native UI toolkit or a test mock implements.

use crate::event::{EventType, ListenerTarget};
use crate::geometry::{Rect, Size, Sides};
use crate::style::StyleCommand;
use std::fmt;

/// Opaque handle to a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// Services the engine needs from the rendering layer.
///
/// The trait is object-safe; the engine takes `&mut dyn Host` so any backend
/// can be plugged in without generics leaking into the public API.
///
/// Hosts must tolerate handles that no longer exist: reads return an empty
/// box and mutations are dropped.
pub trait Host {
    /// Parent of `element`, or `None` at the root.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Live border box in client coordinates, including applied transforms.
    fn bounding_rect(&self, element: ElementId) -> Rect<f32>;

    /// Layout size including border and padding, excluding margin.
    fn offset_size(&self, element: ElementId) -> Size<f32>;

    /// Computed margins as raw CSS values (`"8px"`, `"auto"`, ...).
    fn computed_margin(&self, element: ElementId) -> Sides<String>;

    /// Apply one visual change to `element`.
    fn apply_style(&mut self, element: ElementId, command: StyleCommand);

    /// Deep-clone `element` and insert the clone at the top of the visual
    /// tree, returning the clone's handle.
    fn clone_to_overlay(&mut self, element: ElementId) -> ElementId;

    /// Detach and discard `element`.
    fn remove_element(&mut self, element: ElementId);

    fn add_listener(&mut self, target: ListenerTarget, event_type: EventType);

    fn remove_listener(&mut self, target: ListenerTarget, event_type: EventType);
}

static_assertions::assert_obj_safe!(Host);
static_assertions::assert_impl_all!(ElementId: Copy, Send, Sync);
