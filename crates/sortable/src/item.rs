//! Per-item lifecycle glue between a rendered element and the registry.

use crate::registry::{ItemKey, RegistryHandle};
use sortable_core::host::ElementId;

/// Binds one rendered list item to its container's registry.
///
/// The owner calls [`attach`](Self::attach) once the element exists and
/// [`detach`](Self::detach) (or drops the binder) when it goes away. The index
/// is pushed with [`set_index`](Self::set_index) whenever the list
/// re-renders.
///
/// Changing an index while a drag is in progress is not supported: the
/// running drag keeps using the bounds and indices captured at press time.
#[derive(Debug)]
pub struct SortableItem {
    registry: RegistryHandle,
    index: usize,
    disabled: bool,
    element: Option<ElementId>,
    key: Option<ItemKey>,
}

impl SortableItem {
    pub fn new(registry: RegistryHandle, index: usize) -> Self {
        Self {
            registry,
            index,
            disabled: false,
            element: None,
            key: None,
        }
    }

    /// Opt this item out of sorting. Must be set before attaching.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// Registry key, present while attached and enabled.
    pub fn key(&self) -> Option<ItemKey> {
        self.key
    }

    pub fn is_registered(&self) -> bool {
        self.key.is_some()
    }

    /// Register `element` with the registry. Disabled items stay invisible to
    /// the registry.
    ///
    /// An element is owned by one binder: attaching to an element that
    /// another binder already registered leaves this one unregistered.
    pub fn attach(&mut self, element: ElementId) {
        self.element = Some(element);
        if self.disabled {
            tracing::trace!(%element, index = self.index, "disabled item not registered");
            return;
        }
        if self.key.is_some() {
            self.detach_from_registry();
        }

        let mut registry = self.registry.borrow_mut();
        if let Some(owner) = registry.key_for(element) {
            tracing::warn!(%element, %owner, "element already bound by another item");
            return;
        }
        self.key = Some(registry.register(element, self.index));
    }

    /// Unregister from the registry if this item had registered.
    pub fn detach(&mut self) {
        self.detach_from_registry();
        self.element = None;
    }

    fn detach_from_registry(&mut self) {
        if let Some(key) = self.key.take() {
            self.registry.borrow_mut().unregister(key);
        }
    }

    /// Record a new position after the list re-rendered.
    pub fn set_index(&mut self, index: usize) {
        if index == self.index {
            return;
        }
        self.index = index;

        let Some(key) = self.key else {
            return;
        };
        let mut registry = self.registry.borrow_mut();
        if registry.is_dragging() {
            tracing::warn!(%key, index, "item index changed during a drag");
        }
        if let Err(err) = registry.set_index(key, index) {
            tracing::warn!(%err, "failed to update item index");
        }
    }
}

impl Drop for SortableItem {
    fn drop(&mut self) {
        let Some(key) = self.key.take() else {
            return;
        };
        match self.registry.try_borrow_mut() {
            Some(mut registry) => registry.unregister(key),
            None => tracing::warn!(%key, "registry busy, item not unregistered on drop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_registers_with_index() {
        let registry = RegistryHandle::new();
        let mut item = SortableItem::new(registry.clone(), 3);
        item.attach(ElementId(10));

        let key = item.key().expect("registered");
        assert_eq!(registry.borrow().entry(key).map(|e| e.index()), Some(3));
        assert_eq!(registry.borrow().key_for(ElementId(10)), Some(key));
    }

    #[test]
    fn test_disabled_item_never_registers() {
        let registry = RegistryHandle::new();
        let mut item = SortableItem::new(registry.clone(), 0).disabled(true);
        item.attach(ElementId(10));

        assert!(!item.is_registered());
        assert!(registry.borrow().is_empty());

        item.detach();
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn test_detach_unregisters() {
        let registry = RegistryHandle::new();
        let mut item = SortableItem::new(registry.clone(), 0);
        item.attach(ElementId(1));
        item.detach();

        assert!(registry.borrow().is_empty());
        assert!(item.element().is_none());
    }

    #[test]
    fn test_drop_unregisters() {
        let registry = RegistryHandle::new();
        {
            let mut item = SortableItem::new(registry.clone(), 0);
            item.attach(ElementId(1));
            assert_eq!(registry.borrow().len(), 1);
        }
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn test_set_index_updates_registry() {
        let registry = RegistryHandle::new();
        let mut item = SortableItem::new(registry.clone(), 0);
        item.attach(ElementId(1));
        item.set_index(5);

        assert_eq!(registry.borrow().entry_at(5).map(|e| e.element()), Some(ElementId(1)));
        assert!(registry.borrow().entry_at(0).is_none());
    }

    #[test]
    fn test_second_binder_on_same_element_stays_unregistered() {
        let registry = RegistryHandle::new();
        let mut first = SortableItem::new(registry.clone(), 0);
        let mut second = SortableItem::new(registry.clone(), 1);
        first.attach(ElementId(1));
        second.attach(ElementId(1));

        assert!(first.is_registered());
        assert!(!second.is_registered());
        assert_eq!(registry.borrow().len(), 1);

        second.detach();
        assert_eq!(registry.borrow().key_for(ElementId(1)), first.key());

        first.detach();
        assert!(registry.borrow().is_empty());
        assert!(!second.is_registered());
    }

    #[test]
    fn test_reattach_keeps_single_entry() {
        let registry = RegistryHandle::new();
        let mut item = SortableItem::new(registry.clone(), 0);
        item.attach(ElementId(1));
        item.attach(ElementId(2));

        assert_eq!(registry.borrow().len(), 1);
        assert!(registry.borrow().contains_element(ElementId(2)));
        assert!(!registry.borrow().contains_element(ElementId(1)));
    }
}
