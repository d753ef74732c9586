//! Sortable - drag-to-reorder for linear lists
//!
//! A press on an item floats a clone of it under the pointer; while it moves
//! the remaining items slide out of the way to preview the drop, and the
//! release reports either a click or the `old_index → new_index` move.
//!
//! The engine renders nothing itself. It reads element boxes and sends
//! [`StyleCommand`](sortable_core::style::StyleCommand)s through a
//! [`Host`](sortable_core::host::Host) implemented by the UI layer.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sortable::{EventScope, SortableConfig, SortableContainer, SortableItem};
//!
//! let mut list = SortableContainer::new(
//!     SortableConfig::default().on_reorder(|end| println!("{:?}", end)),
//! );
//! list.mount(&mut host, container_element);
//!
//! let mut items: Vec<_> = elements
//!     .iter()
//!     .enumerate()
//!     .map(|(index, &element)| {
//!         let mut item = SortableItem::new(list.registry(), index);
//!         item.attach(element);
//!         item
//!     })
//!     .collect();
//!
//! // From the host's listeners:
//! list.dispatch(&mut host, &mut event, EventScope::Document);
//! ```

pub mod config;
pub mod container;
pub mod item;
pub mod outcome;
pub mod registry;
pub mod utils;

pub use config::{DEFAULT_TRANSITION_MS, HELPER_Z_INDEX, SortableConfig};
pub use container::{DragPhase, EventScope, SortableContainer, is_shifted};
pub use item::SortableItem;
pub use outcome::{SortEnd, SortOutcome};
pub use registry::{
    ActiveDrag, Entry, ItemKey, Registry, RegistryError, RegistryHandle, RegistryId,
    RegistryResult,
};
