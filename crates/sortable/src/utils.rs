//! Geometry helpers used by the drag engine.
//!
//! Everything here is a pure function of its inputs (plus host reads), with
//! no knowledge of drag state.

use sortable_core::event::PointerEvent;
use sortable_core::geometry::{Rect, Sides, Size};
use sortable_core::host::{ElementId, Host};
use sortable_core::math::Vec2;

pub use sortable_core::style::css_pixels;

/// Client position of a pointer event, preferring the first touch point.
pub fn pointer_offset(event: &PointerEvent) -> Vec2 {
    event.touches.first().copied().unwrap_or(event.client)
}

/// Margins of `element` in pixels.
pub fn element_margin(host: &dyn Host, element: ElementId) -> Sides<f32> {
    host.computed_margin(element).map(|value| css_pixels(&value))
}

/// Outer box size of `element`: border and padding included, margin excluded.
pub fn element_dimensions(host: &dyn Host, element: ElementId) -> Size<f32> {
    host.offset_size(element)
}

/// Bound `value` to `[min, max]`.
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Walk from `node` up through its ancestors, returning the first match.
///
/// `node` itself is tested first.
pub fn find_ancestor(
    host: &dyn Host,
    node: ElementId,
    mut predicate: impl FnMut(ElementId) -> bool,
) -> Option<ElementId> {
    let mut current = Some(node);
    while let Some(element) = current {
        if predicate(element) {
            return Some(element);
        }
        current = host.parent(element);
    }
    None
}

/// Whether a helper box at `helper` hovers the slot `target`.
///
/// The helper's top-left corner has to fall strictly within half the
/// target's extent of the target's own top-left corner, on both axes.
pub fn hovers(helper: &Rect<f32>, target: &Rect<f32>) -> bool {
    let half_width = target.width / 2.0;
    let half_height = target.height / 2.0;

    helper.left() > target.left() - half_width
        && helper.left() < target.left() + half_width
        && helper.top() > target.top() - half_height
        && helper.top() < target.top() + half_height
}
