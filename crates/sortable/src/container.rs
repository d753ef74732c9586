//! Drag engine for one sortable list.
//!
//! [`SortableContainer`] binds press/move/release listeners through the
//! [`Host`], tracks the single active drag, floats a helper clone under the
//! pointer and shifts the other items to preview the drop.
//!
//! # Event flow
//!
//! | scope | phase | handler |
//! |-------|-------|---------|
//! | document | start | [`SortableContainer::handle_start`] |
//! | document | move | [`SortableContainer::handle_move`] (moves the helper) |
//! | document | end | [`SortableContainer::handle_end`] (reports the outcome) |
//! | container | move | [`SortableContainer::handle_sort_move`] (hit test + shifts) |
//!
//! Events for which there is no active drag are ignored.

use crate::config::SortableConfig;
use crate::outcome::{SortEnd, SortOutcome};
use crate::registry::{Entry, ItemKey, Registry, RegistryHandle, RegistryId};
use crate::utils::{element_dimensions, element_margin, find_ancestor, hovers, pointer_offset};
use sortable_core::event::{EventPhase, ListenerTarget, PointerEvent};
use sortable_core::host::{ElementId, Host};
use sortable_core::math::Vec2;
use sortable_core::profiling::profile_function;
use sortable_core::style::{FloatPlacement, StyleCommand};

/// Where an event was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    /// Document-wide listener.
    Document,
    /// Listener on the list container itself.
    Container,
}

/// Observable state of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Pressed on an item, pointer has not moved yet.
    Pressed,
    /// Pointer moved since the press.
    Dragging,
}

/// Per-drag state, alive between press and release.
#[derive(Debug)]
struct DragSession {
    key: ItemKey,
    initial_index: usize,
    /// The pressed element, concealed in place.
    ghost: ElementId,
    /// Floating clone following the pointer.
    helper: ElementId,
    initial_offset: Vec2,
    translate: Vec2,
    moved: bool,
    hovered_index: Option<usize>,
}

/// Drag-to-reorder engine bound to one list container.
pub struct SortableContainer {
    registry: RegistryHandle,
    registry_id: RegistryId,
    config: SortableConfig,
    container: Option<ElementId>,
    session: Option<DragSession>,
}

impl std::fmt::Debug for SortableContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableContainer")
            .field("registry", &self.registry_id)
            .field("config", &self.config)
            .field("container", &self.container)
            .field("session", &self.session)
            .finish()
    }
}

impl SortableContainer {
    /// Create a container with its own empty registry.
    pub fn new(config: SortableConfig) -> Self {
        Self::with_registry(RegistryHandle::new(), config)
    }

    /// Create a container driving an existing registry.
    pub fn with_registry(registry: RegistryHandle, config: SortableConfig) -> Self {
        Self {
            registry_id: registry.id(),
            registry,
            config,
            container: None,
            session: None,
        }
    }

    /// Handle to pass to each item when it attaches.
    pub fn registry(&self) -> RegistryHandle {
        self.registry.clone()
    }

    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SortableConfig {
        &mut self.config
    }

    pub fn container(&self) -> Option<ElementId> {
        self.container
    }

    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }

    pub fn phase(&self) -> DragPhase {
        match &self.session {
            None => DragPhase::Idle,
            Some(session) if session.moved => DragPhase::Dragging,
            Some(_) => DragPhase::Pressed,
        }
    }

    /// Prospective drop index of the current drag.
    pub fn hovered_index(&self) -> Option<usize> {
        self.session.as_ref().and_then(|session| session.hovered_index)
    }

    /// Handle of the floating helper while a drag is in progress.
    pub fn helper(&self) -> Option<ElementId> {
        self.session.as_ref().map(|session| session.helper)
    }

    /// Current translate of the helper relative to where it was created.
    pub fn helper_translate(&self) -> Option<Vec2> {
        self.session.as_ref().map(|session| session.translate)
    }

    /// Bind listeners: every press/move/release type on the document, every
    /// move type on `container`.
    pub fn mount(&mut self, host: &mut dyn Host, container: ElementId) {
        if let Some(current) = self.container {
            tracing::trace!(%current, "container already mounted");
            return;
        }

        for phase in EventPhase::ALL {
            for &event_type in phase.event_types() {
                host.add_listener(ListenerTarget::Document, event_type);
            }
        }
        for &event_type in EventPhase::Move.event_types() {
            host.add_listener(ListenerTarget::Element(container), event_type);
        }

        self.container = Some(container);
        tracing::debug!(registry = %self.registry_id, %container, "sortable container mounted");
    }

    /// Remove exactly the listeners bound by [`mount`](Self::mount).
    ///
    /// A drag still in progress is torn down without reporting an outcome.
    pub fn unmount(&mut self, host: &mut dyn Host) {
        let Some(container) = self.container.take() else {
            return;
        };

        if let Some(session) = self.session.take() {
            tracing::debug!(index = session.initial_index, "drag abandoned by unmount");
            self.restore(host, &session);
            self.registry.borrow_mut().set_active(None);
        }

        for phase in EventPhase::ALL {
            for &event_type in phase.event_types() {
                host.remove_listener(ListenerTarget::Document, event_type);
            }
        }
        for &event_type in EventPhase::Move.event_types() {
            host.remove_listener(ListenerTarget::Element(container), event_type);
        }

        tracing::debug!(registry = %self.registry_id, %container, "sortable container unmounted");
    }

    /// Route one event delivered by a listener bound at mount time.
    ///
    /// Returns the outcome when the event ends a drag.
    pub fn dispatch(
        &mut self,
        host: &mut dyn Host,
        event: &mut PointerEvent,
        scope: EventScope,
    ) -> Option<SortOutcome> {
        if !self.is_mounted() {
            tracing::trace!(event = %event.event_type, "event on unmounted container ignored");
            return None;
        }

        match (scope, event.phase()) {
            (EventScope::Document, EventPhase::Start) => {
                self.handle_start(host, event);
                None
            }
            (EventScope::Document, EventPhase::Move) => {
                self.handle_move(host, event);
                None
            }
            (EventScope::Document, EventPhase::End) => self.handle_end(host, event),
            (EventScope::Container, EventPhase::Move) => {
                self.handle_sort_move(host);
                None
            }
            (EventScope::Container, _) => None,
        }
    }

    fn is_dragging(&self) -> bool {
        self.session.is_some() && self.registry.borrow().is_dragging()
    }

    /// Start a drag if the press lands on one of this list's items.
    ///
    /// Returns `true` when a drag was started.
    pub fn handle_start(&mut self, host: &mut dyn Host, event: &PointerEvent) -> bool {
        let key = {
            let registry = self.registry.borrow();
            if registry.is_dragging() || self.session.is_some() {
                tracing::trace!("press ignored, a drag is already active");
                return false;
            }
            let node = find_ancestor(&*host, event.target, |element| {
                registry.contains_element(element)
            });
            match node.and_then(|node| registry.key_for(node)) {
                Some(key) => key,
                None => {
                    tracing::trace!(target = %event.target, "press outside sortable items");
                    return false;
                }
            }
        };

        if self.config.cancels(event) {
            tracing::trace!(target = %event.target, "press cancelled by predicate");
            return false;
        }

        self.registry.borrow_mut().set_active(Some(key));
        self.handle_press(host, key, event)
    }

    fn handle_press(&mut self, host: &mut dyn Host, key: ItemKey, event: &PointerEvent) -> bool {
        let (element, initial_index) = {
            let mut registry = self.registry.borrow_mut();
            registry.snapshot_bounds(&*host);
            match registry.active_entry() {
                Some(entry) => (entry.element(), entry.index()),
                None => return false,
            }
        };

        let bounds = host.bounding_rect(element);
        let margin = element_margin(&*host, element);
        let dimensions = element_dimensions(&*host, element);
        let initial_offset = pointer_offset(event);

        let helper = host.clone_to_overlay(element);
        if let Some(class) = &self.config.helper_class {
            host.apply_style(helper, StyleCommand::AddClass(class.clone()));
        }
        host.apply_style(
            helper,
            StyleCommand::Float(FloatPlacement {
                top: bounds.top() - margin.top,
                left: bounds.left() - margin.left,
                width: dimensions.width,
                height: dimensions.height,
                z_index: self.config.helper_z_index,
            }),
        );
        host.apply_style(element, StyleCommand::Conceal);

        self.session = Some(DragSession {
            key,
            initial_index,
            ghost: element,
            helper,
            initial_offset,
            translate: Vec2::ZERO,
            moved: false,
            hovered_index: None,
        });

        tracing::debug!(
            registry = %self.registry_id,
            index = initial_index,
            %element,
            %helper,
            "drag pressed"
        );
        true
    }

    /// Move the helper with the pointer.
    pub fn handle_move(&mut self, host: &mut dyn Host, event: &mut PointerEvent) {
        if !self.is_dragging() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        event.prevent_default();

        session.translate = pointer_offset(event) - session.initial_offset;
        host.apply_style(session.helper, StyleCommand::Translate(session.translate));
        session.moved = true;
    }

    /// Recompute the hovered index and shift the other items.
    pub fn handle_sort_move(&mut self, host: &mut dyn Host) {
        if !self.is_dragging() {
            return;
        }
        self.update_nodes_position(host);
    }

    fn update_nodes_position(&mut self, host: &mut dyn Host) {
        profile_function!();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let registry = self.registry.borrow();
        let entries = registry.ordered_entries();
        let helper_bounds = host.bounding_rect(session.helper);

        for entry in &entries {
            if let Some(bounds) = entry.initial_bounds()
                && hovers(&helper_bounds, &bounds)
            {
                session.hovered_index = Some(entry.index());
            }
        }

        // Keep the previous target (and its shifts) until a new one is hit
        let Some(hovered) = session.hovered_index else {
            tracing::trace!("no item hovered yet");
            return;
        };
        let initial = session.initial_index;

        for entry in &entries {
            if entry.key() == session.key {
                continue;
            }
            let command = if is_shifted(entry.index(), initial, hovered) {
                StyleCommand::Translate(shift_offset(&registry, entry, hovered > initial))
            } else {
                StyleCommand::Translate(Vec2::ZERO)
            };
            host.apply_style(
                entry.element(),
                StyleCommand::TransitionDuration(self.config.transition_duration),
            );
            host.apply_style(entry.element(), command);
        }
    }

    /// Finish the drag: report the outcome and restore every element.
    pub fn handle_end(&mut self, host: &mut dyn Host, _event: &PointerEvent) -> Option<SortOutcome> {
        let session = self.session.take()?;

        let active = self.registry.borrow().is_dragging();
        let outcome = if !active {
            tracing::debug!("drag session lost its active item, tearing down");
            None
        } else if !session.moved {
            Some(SortOutcome::Click {
                index: session.initial_index,
            })
        } else {
            Some(SortOutcome::Reorder(SortEnd {
                old_index: session.initial_index,
                new_index: session.hovered_index.unwrap_or(session.initial_index),
            }))
        };

        self.restore(host, &session);
        self.registry.borrow_mut().set_active(None);

        match outcome {
            Some(SortOutcome::Click { index }) => {
                tracing::debug!(index, "item clicked");
                self.config.emit_click(index);
            }
            Some(SortOutcome::Reorder(end)) => {
                tracing::debug!(old_index = end.old_index, new_index = end.new_index, "items reordered");
                self.config.emit_reorder(end);
            }
            None => {}
        }
        outcome
    }

    fn restore(&self, host: &mut dyn Host, session: &DragSession) {
        {
            let registry = self.registry.borrow();
            for entry in registry.ordered_entries() {
                host.apply_style(entry.element(), StyleCommand::ResetTransition);
                host.apply_style(entry.element(), StyleCommand::ResetTransform);
            }
        }
        host.remove_element(session.helper);
        host.apply_style(session.ghost, StyleCommand::Reveal);
    }
}

/// Whether the item at `index` moves to open a gap when the item dragged from
/// `initial` hovers `hovered`.
pub fn is_shifted(index: usize, initial: usize, hovered: usize) -> bool {
    if hovered > initial {
        initial < index && index <= hovered
    } else {
        hovered <= index && index < initial
    }
}

/// Translate moving `entry` into the slot of its neighbour one step closer to
/// the drag origin (the previous index when dragging toward higher indices).
fn shift_offset(registry: &Registry, entry: &Entry, toward_higher: bool) -> Vec2 {
    let index = entry.index();
    let neighbour_index = if toward_higher { index - 1 } else { index + 1 };
    let neighbour = registry
        .entry_at(neighbour_index)
        .and_then(|neighbour| neighbour.initial_bounds());

    match (entry.initial_bounds(), neighbour) {
        (Some(own), Some(neighbour)) => neighbour.origin() - own.origin(),
        _ => {
            tracing::warn!(index, neighbour_index, "no bounds for shift, indices are not contiguous");
            Vec2::ZERO
        }
    }
}
