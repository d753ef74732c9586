//! Mock implementation of [`Host`] for testing.
//!
//! Elements are plain boxes in client coordinates. Style commands mutate a
//! small per-element style record, and reads honour it the way a browser
//! would: floated elements sit at their `top`/`left` plus margin, and
//! translates offset the reported bounding box.

use parking_lot::Mutex;
use sortable_core::alloc::HashMap;
use sortable_core::event::{EventType, ListenerTarget};
use sortable_core::geometry::{Rect, Sides, Size};
use sortable_core::host::{ElementId, Host};
use sortable_core::math::Vec2;
use sortable_core::style::{FloatPlacement, StyleCommand, css_pixels};
use std::time::Duration;

/// Records a host call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    BoundingRect(ElementId),
    ApplyStyle {
        element: ElementId,
        command: StyleCommand,
    },
    CloneToOverlay {
        source: ElementId,
        clone: ElementId,
    },
    RemoveElement(ElementId),
    AddListener {
        target: ListenerTarget,
        event_type: EventType,
    },
    RemoveListener {
        target: ListenerTarget,
        event_type: EventType,
    },
}

/// Inline style state of a mock element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockStyle {
    pub translate: Option<Vec2>,
    pub transition: Option<Duration>,
    pub concealed: bool,
    pub float: Option<FloatPlacement>,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone)]
struct MockElement {
    parent: Option<ElementId>,
    layout: Rect<f32>,
    margin: Sides<String>,
    style: MockStyle,
}

/// In-memory host for tests.
///
/// # Borrow Checking Pattern: Interior Mutability
///
/// Reads such as [`Host::bounding_rect`] take `&self` but are recorded too, so
/// the call log sits behind a `parking_lot::Mutex`.
pub struct MockHost {
    elements: HashMap<ElementId, MockElement>,
    listeners: Vec<(ListenerTarget, EventType)>,
    next_id: u64,
    calls: Mutex<Vec<HostCall>>,
}

impl MockHost {
    /// Create an empty mock host.
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            listeners: Vec::new(),
            next_id: 1,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn allocate(&mut self, element: MockElement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, element);
        id
    }

    /// Add a parentless element at the origin.
    pub fn add_root(&mut self, size: Size<f32>) -> ElementId {
        self.add_element(None, Rect::from_origin_size(Vec2::ZERO, size))
    }

    /// Add an element with a layout box in client coordinates.
    pub fn add_element(&mut self, parent: Option<ElementId>, layout: Rect<f32>) -> ElementId {
        self.allocate(MockElement {
            parent,
            layout,
            margin: Sides::all("0px".to_string()),
            style: MockStyle::default(),
        })
    }

    /// Add `count` equally sized children of `parent`, stacked vertically
    /// from `origin`.
    pub fn stacked_list(
        &mut self,
        parent: ElementId,
        origin: Vec2,
        item_size: Size<f32>,
        count: usize,
    ) -> Vec<ElementId> {
        (0..count)
            .map(|i| {
                let offset = Vec2::new(0.0, item_size.height * i as f32);
                self.add_element(Some(parent), Rect::from_origin_size(origin + offset, item_size))
            })
            .collect()
    }

    /// Set raw CSS margin values of an element.
    pub fn set_margin(&mut self, element: ElementId, margin: Sides<&str>) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.margin = margin.map(str::to_string);
        }
    }

    /// Move an element's layout box, as a relayout would.
    pub fn set_layout(&mut self, element: ElementId, layout: Rect<f32>) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.layout = layout;
        }
    }

    pub fn exists(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Inline style state of an element.
    pub fn style(&self, element: ElementId) -> Option<&MockStyle> {
        self.elements.get(&element).map(|el| &el.style)
    }

    /// Current translate of an element, zero when unset.
    pub fn translate(&self, element: ElementId) -> Vec2 {
        self.style(element)
            .and_then(|style| style.translate)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn transition(&self, element: ElementId) -> Option<Duration> {
        self.style(element).and_then(|style| style.transition)
    }

    pub fn is_concealed(&self, element: ElementId) -> bool {
        self.style(element).is_some_and(|style| style.concealed)
    }

    /// Currently bound listeners, in binding order.
    pub fn listeners(&self) -> &[(ListenerTarget, EventType)] {
        &self.listeners
    }

    pub fn has_listener(&self, target: ListenerTarget, event_type: EventType) -> bool {
        self.listeners.contains(&(target, event_type))
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    /// Style commands recorded for one element, in order.
    pub fn style_commands(&self, element: ElementId) -> Vec<StyleCommand> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::ApplyStyle { element: el, command } if *el == element => {
                    Some(command.clone())
                }
                _ => None,
            })
            .collect()
    }

    /// Count every recorded mutation (reads excluded).
    pub fn count_mutations(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| !matches!(call, HostCall::BoundingRect(_)))
            .count()
    }

    /// Count clone operations.
    pub fn count_clones(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::CloneToOverlay { .. }))
            .count()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MockHost {
    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.elements.get(&element).and_then(|el| el.parent)
    }

    fn bounding_rect(&self, element: ElementId) -> Rect<f32> {
        self.calls.lock().push(HostCall::BoundingRect(element));

        let Some(el) = self.elements.get(&element) else {
            return Rect::ZERO;
        };
        let base = match el.style.float {
            Some(placement) => Rect::new(
                placement.left + css_pixels(&el.margin.left),
                placement.top + css_pixels(&el.margin.top),
                placement.width,
                placement.height,
            ),
            None => el.layout,
        };
        base.translate(el.style.translate.unwrap_or(Vec2::ZERO))
    }

    fn offset_size(&self, element: ElementId) -> Size<f32> {
        self.elements
            .get(&element)
            .map(|el| el.layout.size())
            .unwrap_or_default()
    }

    fn computed_margin(&self, element: ElementId) -> Sides<String> {
        self.elements
            .get(&element)
            .map(|el| el.margin.clone())
            .unwrap_or_else(|| Sides::all("0px".to_string()))
    }

    fn apply_style(&mut self, element: ElementId, command: StyleCommand) {
        self.calls.lock().push(HostCall::ApplyStyle {
            element,
            command: command.clone(),
        });

        let Some(el) = self.elements.get_mut(&element) else {
            return;
        };
        let style = &mut el.style;
        match command {
            StyleCommand::Translate(offset) => style.translate = Some(offset),
            StyleCommand::ResetTransform => style.translate = None,
            StyleCommand::TransitionDuration(duration) => style.transition = Some(duration),
            StyleCommand::ResetTransition => style.transition = None,
            StyleCommand::Conceal => style.concealed = true,
            StyleCommand::Reveal => style.concealed = false,
            StyleCommand::Float(placement) => style.float = Some(placement),
            StyleCommand::AddClass(class) => style.classes.push(class),
        }
    }

    fn clone_to_overlay(&mut self, element: ElementId) -> ElementId {
        let copy = self
            .elements
            .get(&element)
            .cloned()
            .map(|el| MockElement { parent: None, ..el })
            .unwrap_or_else(|| MockElement {
                parent: None,
                layout: Rect::ZERO,
                margin: Sides::all("0px".to_string()),
                style: MockStyle::default(),
            });
        let clone = self.allocate(copy);
        self.calls.lock().push(HostCall::CloneToOverlay {
            source: element,
            clone,
        });
        clone
    }

    fn remove_element(&mut self, element: ElementId) {
        self.calls.lock().push(HostCall::RemoveElement(element));
        self.elements.remove(&element);
    }

    fn add_listener(&mut self, target: ListenerTarget, event_type: EventType) {
        self.calls.lock().push(HostCall::AddListener { target, event_type });
        self.listeners.push((target, event_type));
    }

    fn remove_listener(&mut self, target: ListenerTarget, event_type: EventType) {
        self.calls.lock().push(HostCall::RemoveListener { target, event_type });
        if let Some(pos) = self.listeners.iter().position(|l| *l == (target, event_type)) {
            self.listeners.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_moves_bounding_rect() {
        let mut host = MockHost::new();
        let el = host.add_element(None, Rect::new(10.0, 10.0, 20.0, 20.0));

        host.apply_style(el, StyleCommand::Translate(Vec2::new(5.0, -5.0)));
        assert_eq!(host.bounding_rect(el), Rect::new(15.0, 5.0, 20.0, 20.0));

        host.apply_style(el, StyleCommand::ResetTransform);
        assert_eq!(host.bounding_rect(el), Rect::new(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn test_float_adds_margin_back() {
        let mut host = MockHost::new();
        let el = host.add_element(None, Rect::new(0.0, 0.0, 20.0, 20.0));
        host.set_margin(el, Sides::new(" 4px ", "0px", "0px", "2px"));

        host.apply_style(
            el,
            StyleCommand::Float(FloatPlacement {
                top: 96.0,
                left: 8.0,
                width: 20.0,
                height: 20.0,
                z_index: 600,
            }),
        );
        assert_eq!(host.bounding_rect(el), Rect::new(10.0, 100.0, 20.0, 20.0));
    }

    #[test]
    fn test_clone_is_detached_copy() {
        let mut host = MockHost::new();
        let root = host.add_root(Size::new(100.0, 100.0));
        let child = host.add_element(Some(root), Rect::new(0.0, 50.0, 100.0, 50.0));

        let clone = host.clone_to_overlay(child);
        assert_ne!(clone, child);
        assert_eq!(host.parent(clone), None);
        assert_eq!(host.bounding_rect(clone), host.bounding_rect(child));
        assert_eq!(host.count_clones(), 1);

        host.remove_element(clone);
        assert!(!host.exists(clone));
        assert_eq!(host.bounding_rect(clone), Rect::ZERO);
    }

    #[test]
    fn test_listener_bookkeeping() {
        let mut host = MockHost::new();
        host.add_listener(ListenerTarget::Document, EventType::MouseDown);
        host.add_listener(ListenerTarget::Document, EventType::MouseDown);
        host.remove_listener(ListenerTarget::Document, EventType::MouseDown);

        assert_eq!(host.listeners().len(), 1);
        assert!(host.has_listener(ListenerTarget::Document, EventType::MouseDown));
    }
}
