//! Caller-facing configuration of a sortable container.

use crate::outcome::SortEnd;
use sortable_core::event::PointerEvent;
use std::fmt;
use std::time::Duration;

/// Duration of the shift animation applied to displaced items.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Stacking order of the floating helper.
pub const HELPER_Z_INDEX: i32 = 600;

pub type ClickCallback = Box<dyn FnMut(usize)>;
pub type ReorderCallback = Box<dyn FnMut(SortEnd)>;
pub type CancelPredicate = Box<dyn Fn(&PointerEvent) -> bool>;

/// Options and callbacks for a [`SortableContainer`](crate::SortableContainer).
///
/// # Example
///
/// ```
/// use sortable::SortableConfig;
///
/// let config = SortableConfig::default()
///     .with_helper_class("dragging")
///     .on_reorder(|end| println!("moved {} -> {}", end.old_index, end.new_index));
/// assert_eq!(config.helper_class.as_deref(), Some("dragging"));
/// ```
pub struct SortableConfig {
    /// Class added to the floating helper.
    pub helper_class: Option<String>,
    /// Animation time for items shifting out of the way.
    pub transition_duration: Duration,
    /// Stacking order of the helper.
    pub helper_z_index: i32,
    on_item_click: Option<ClickCallback>,
    on_reorder: Option<ReorderCallback>,
    should_cancel_press: Option<CancelPredicate>,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            helper_class: None,
            transition_duration: Duration::from_millis(DEFAULT_TRANSITION_MS),
            helper_z_index: HELPER_Z_INDEX,
            on_item_click: None,
            on_reorder: None,
            should_cancel_press: None,
        }
    }
}

impl fmt::Debug for SortableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableConfig")
            .field("helper_class", &self.helper_class)
            .field("transition_duration", &self.transition_duration)
            .field("helper_z_index", &self.helper_z_index)
            .field("on_item_click", &self.on_item_click.as_ref().map(|_| ".."))
            .field("on_reorder", &self.on_reorder.as_ref().map(|_| ".."))
            .field("should_cancel_press", &self.should_cancel_press.as_ref().map(|_| ".."))
            .finish()
    }
}

impl SortableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_helper_class(mut self, class: impl Into<String>) -> Self {
        self.helper_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    #[must_use]
    pub fn with_helper_z_index(mut self, z_index: i32) -> Self {
        self.helper_z_index = z_index;
        self
    }

    /// Called with the item's index when it is pressed and released without
    /// moving.
    #[must_use]
    pub fn on_item_click(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_item_click = Some(Box::new(callback));
        self
    }

    /// Called when a drag completes.
    #[must_use]
    pub fn on_reorder(mut self, callback: impl FnMut(SortEnd) + 'static) -> Self {
        self.on_reorder = Some(Box::new(callback));
        self
    }

    /// Veto a press before it starts a drag (e.g. presses on a button inside
    /// an item).
    #[must_use]
    pub fn should_cancel_press(mut self, predicate: impl Fn(&PointerEvent) -> bool + 'static) -> Self {
        self.should_cancel_press = Some(Box::new(predicate));
        self
    }

    pub(crate) fn cancels(&self, event: &PointerEvent) -> bool {
        self.should_cancel_press
            .as_ref()
            .is_some_and(|predicate| predicate(event))
    }

    pub(crate) fn emit_click(&mut self, index: usize) {
        if let Some(callback) = self.on_item_click.as_mut() {
            callback(index);
        }
    }

    pub(crate) fn emit_reorder(&mut self, end: SortEnd) {
        if let Some(callback) = self.on_reorder.as_mut() {
            callback(end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortable_core::event::EventType;
    use sortable_core::host::ElementId;
    use sortable_core::math::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_defaults() {
        let config = SortableConfig::default();
        assert_eq!(config.transition_duration, Duration::from_millis(300));
        assert_eq!(config.helper_z_index, 600);
        assert!(config.helper_class.is_none());
    }

    #[test]
    fn test_cancel_predicate() {
        let event = PointerEvent::mouse(EventType::MouseDown, ElementId(9), Vec2::ZERO);
        assert!(!SortableConfig::default().cancels(&event));

        let config = SortableConfig::default().should_cancel_press(|e| e.target == ElementId(9));
        assert!(config.cancels(&event));
    }

    #[test]
    fn test_callbacks_fire() {
        let clicked = Rc::new(Cell::new(None));
        let sink = clicked.clone();
        let mut config = SortableConfig::default().on_item_click(move |index| sink.set(Some(index)));

        config.emit_click(4);
        config.emit_reorder(SortEnd { old_index: 0, new_index: 1 });
        assert_eq!(clicked.get(), Some(4));
    }
}
