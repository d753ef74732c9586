//! Registry of the items taking part in one sortable list.
//!
//! The registry owns every [`Entry`] and the single [`ActiveDrag`]. Entries
//! are keyed by a generational [`ItemKey`]; the element → key association is
//! a side table, so nothing is stored on the host element itself.

use sortable_core::alloc::HashMap;
use sortable_core::alloc::sparse_set::{IndexSlot, SparseSet};
use sortable_core::geometry::Rect;
use sortable_core::host::{ElementId, Host};
use sortable_core::profiling::profile_function;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity of a registered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey(IndexSlot);

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemKey({}v{})", self.0.index(), self.0.generation())
    }
}

/// Unique id of a registry, used to tell lists apart in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(u64);

impl RegistryId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "registry#{}", self.0)
    }
}

/// One participating element.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    key: ItemKey,
    index: usize,
    element: ElementId,
    initial_bounds: Option<Rect<f32>>,
}

impl Entry {
    pub fn key(&self) -> ItemKey {
        self.key
    }

    /// Current ordinal position in the list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Box captured when the current (or last) drag started.
    pub fn initial_bounds(&self) -> Option<Rect<f32>> {
        self.initial_bounds
    }
}

/// The entry being dragged, with its index at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDrag {
    pub key: ItemKey,
    pub index: usize,
}

/// Error types for registry updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The key was never issued by this registry, or its entry is gone.
    UnknownItem(ItemKey),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownItem(key) => write!(f, "Item {} is not registered", key),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Result type for registry updates.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Ordered collection of the items of one sortable list.
#[derive(Debug)]
pub struct Registry {
    id: RegistryId,
    entries: SparseSet<Entry>,
    /// Registration order, the tie-break for equal indices.
    order: Vec<ItemKey>,
    by_element: HashMap<ElementId, ItemKey>,
    active: Option<ActiveDrag>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            id: RegistryId::next(),
            entries: SparseSet::new(),
            order: Vec::new(),
            by_element: HashMap::new(),
            active: None,
        }
    }

    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Register `element` at `index`.
    ///
    /// Registering an element twice keeps a single entry: the existing key is
    /// returned and its index updated.
    pub fn register(&mut self, element: ElementId, index: usize) -> ItemKey {
        if let Some(&key) = self.by_element.get(&element) {
            if let Some(entry) = self.entries.get_mut(key.0) {
                entry.index = index;
            }
            tracing::trace!(registry = %self.id, %element, index, "element already registered");
            return key;
        }

        let slot = self.entries.push(Entry {
            key: ItemKey(IndexSlot::new(0, 0)),
            index,
            element,
            initial_bounds: None,
        });
        let key = ItemKey(slot);
        if let Some(entry) = self.entries.get_mut(slot) {
            entry.key = key;
        }
        self.order.push(key);
        self.by_element.insert(element, key);
        tracing::trace!(registry = %self.id, %key, %element, index, "registered item");
        key
    }

    /// Remove an entry. Unknown or stale keys are ignored.
    pub fn unregister(&mut self, key: ItemKey) {
        let Some(entry) = self.entries.remove(key.0) else {
            tracing::trace!(registry = %self.id, %key, "unregister of unknown item ignored");
            return;
        };
        self.order.retain(|k| *k != key);
        self.by_element.remove(&entry.element);
        tracing::trace!(registry = %self.id, %key, "unregistered item");
    }

    /// Update the index of a registered entry.
    pub fn set_index(&mut self, key: ItemKey, index: usize) -> RegistryResult<()> {
        let entry = self
            .entries
            .get_mut(key.0)
            .ok_or(RegistryError::UnknownItem(key))?;
        entry.index = index;
        Ok(())
    }

    /// Set or clear the active drag. Last write wins; an unknown key clears it.
    pub fn set_active(&mut self, key: Option<ItemKey>) {
        self.active = key.and_then(|key| {
            self.entries.get(key.0).map(|entry| ActiveDrag {
                key,
                index: entry.index,
            })
        });
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<ActiveDrag> {
        self.active
    }

    pub fn active_entry(&self) -> Option<&Entry> {
        self.active.and_then(|active| self.entries.get(active.key.0))
    }

    pub fn entry(&self, key: ItemKey) -> Option<&Entry> {
        self.entries.get(key.0)
    }

    pub fn contains(&self, key: ItemKey) -> bool {
        self.entries.contains(key.0)
    }

    pub fn contains_element(&self, element: ElementId) -> bool {
        self.by_element.contains_key(&element)
    }

    pub fn key_for(&self, element: ElementId) -> Option<ItemKey> {
        self.by_element.get(&element).copied()
    }

    /// Position of `key` in registration order.
    pub fn position_of(&self, key: ItemKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    /// First entry, in registration order, whose index equals `index`.
    pub fn entry_at(&self, index: usize) -> Option<&Entry> {
        self.iter().find(|entry| entry.index == index)
    }

    /// All entries sorted ascending by index.
    pub fn ordered_entries(&self) -> Vec<&Entry> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|entry| entry.index);
        entries
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.order.iter().filter_map(|key| self.entries.get(key.0))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capture the current box of every entry as its initial bounds.
    pub fn snapshot_bounds(&mut self, host: &dyn Host) {
        profile_function!();
        for key in &self.order {
            if let Some(entry) = self.entries.get_mut(key.0) {
                entry.initial_bounds = Some(host.bounding_rect(entry.element));
            }
        }
    }
}

/// Shared, single-threaded handle to a [`Registry`].
///
/// The container creates it and hands clones to its items when they attach.
#[derive(Debug, Clone, Default)]
pub struct RegistryHandle(Rc<RefCell<Registry>>);

impl RegistryHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn borrow(&self) -> Ref<'_, Registry> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Registry> {
        self.0.borrow_mut()
    }

    pub fn try_borrow_mut(&self) -> Option<RefMut<'_, Registry>> {
        self.0.try_borrow_mut().ok()
    }

    pub fn id(&self) -> RegistryId {
        self.0.borrow().id
    }

    /// Whether both handles refer to the same registry.
    pub fn same_registry(&self, other: &RegistryHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
