//! Pointer input delivered to the engine.
//!
//! Mouse and touch input are unified into [`PointerEvent`]. The raw platform
//! event names are kept in [`EventType`] so hosts can bind one listener per
//! name, grouped by [`EventPhase`].

use crate::host::ElementId;
use crate::math::Vec2;
use std::fmt;

/// Platform event names the engine listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    TouchStart,
    MouseDown,
    TouchMove,
    MouseMove,
    TouchEnd,
    TouchCancel,
    MouseUp,
}

impl EventType {
    /// Which phase of a press/move/release cycle this event belongs to.
    pub const fn phase(self) -> EventPhase {
        match self {
            EventType::TouchStart | EventType::MouseDown => EventPhase::Start,
            EventType::TouchMove | EventType::MouseMove => EventPhase::Move,
            EventType::TouchEnd | EventType::TouchCancel | EventType::MouseUp => EventPhase::End,
        }
    }

    pub const fn is_touch(self) -> bool {
        matches!(
            self,
            EventType::TouchStart | EventType::TouchMove | EventType::TouchEnd | EventType::TouchCancel
        )
    }

    /// DOM event name.
    pub const fn name(self) -> &'static str {
        match self {
            EventType::TouchStart => "touchstart",
            EventType::MouseDown => "mousedown",
            EventType::TouchMove => "touchmove",
            EventType::MouseMove => "mousemove",
            EventType::TouchEnd => "touchend",
            EventType::TouchCancel => "touchcancel",
            EventType::MouseUp => "mouseup",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Press, move or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventPhase {
    Start,
    Move,
    End,
}

impl EventPhase {
    pub const ALL: [EventPhase; 3] = [EventPhase::Start, EventPhase::Move, EventPhase::End];

    /// Every platform event name that maps to this phase.
    pub const fn event_types(self) -> &'static [EventType] {
        match self {
            EventPhase::Start => &[EventType::TouchStart, EventType::MouseDown],
            EventPhase::Move => &[EventType::TouchMove, EventType::MouseMove],
            EventPhase::End => &[EventType::TouchEnd, EventType::TouchCancel, EventType::MouseUp],
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The whole document, so releases outside the list are still seen.
    Document,
    /// A single element, usually the list container.
    Element(ElementId),
}

/// A mouse or touch event in client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub event_type: EventType,
    /// Innermost element under the pointer.
    pub target: ElementId,
    /// Mouse client position. For touch events this mirrors the first touch.
    pub client: Vec2,
    /// Active touch points, empty for mouse events.
    pub touches: Vec<Vec2>,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn mouse(event_type: EventType, target: ElementId, client: Vec2) -> Self {
        Self {
            event_type,
            target,
            client,
            touches: Vec::new(),
            default_prevented: false,
        }
    }

    pub fn touch(event_type: EventType, target: ElementId, touches: impl Into<Vec<Vec2>>) -> Self {
        let touches = touches.into();
        Self {
            event_type,
            target,
            client: touches.first().copied().unwrap_or(Vec2::ZERO),
            touches,
            default_prevented: false,
        }
    }

    pub fn phase(&self) -> EventPhase {
        self.event_type.phase()
    }

    /// Ask the host to skip its default handling (scrolling, text selection).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_tables_cover_every_type() {
        let mut seen = 0;
        for phase in EventPhase::ALL {
            for ty in phase.event_types() {
                assert_eq!(ty.phase(), phase);
                seen += 1;
            }
        }
        assert_eq!(seen, 7);
    }

    #[test]
    fn test_touch_event_mirrors_first_touch() {
        let event = PointerEvent::touch(
            EventType::TouchStart,
            ElementId(1),
            vec![Vec2::new(3.0, 4.0), Vec2::new(9.0, 9.0)],
        );
        assert_eq!(event.client, Vec2::new(3.0, 4.0));
        assert!(event.event_type.is_touch());
    }

    #[test]
    fn test_prevent_default() {
        let mut event = PointerEvent::mouse(EventType::MouseMove, ElementId(1), Vec2::ZERO);
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }
}
