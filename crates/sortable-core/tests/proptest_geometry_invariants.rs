//! Property-based invariant tests for the f32 box helpers.
//!
//! 1. Translating keeps the size and moves the origin by exactly the offset.
//! 2. Every corner of a box is contained in it.
//! 3. Right/bottom edges are consistent with x+width, y+height.

use proptest::prelude::*;
use sortable_core::geometry::Rect;
use sortable_core::math::Vec2;

fn rect_strategy() -> impl Strategy<Value = Rect<f32>> {
    (-1000i32..1000, -1000i32..1000, 0i32..500, 0i32..500)
        .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
}

fn offset_strategy() -> impl Strategy<Value = Vec2> {
    (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Vec2::new(x as f32, y as f32))
}

proptest! {
    #[test]
    fn translate_preserves_size(rect in rect_strategy(), offset in offset_strategy()) {
        let moved = rect.translate(offset);
        prop_assert_eq!(moved.size(), rect.size());
        prop_assert_eq!(moved.origin() - rect.origin(), offset);
    }

    #[test]
    fn corners_are_contained(rect in rect_strategy()) {
        for corner in [
            Vec2::new(rect.left(), rect.top()),
            Vec2::new(rect.right(), rect.top()),
            Vec2::new(rect.left(), rect.bottom()),
            Vec2::new(rect.right(), rect.bottom()),
        ] {
            prop_assert!(rect.contains(corner), "{:?} not in {:?}", corner, rect);
        }
    }

    #[test]
    fn edges_consistent(rect in rect_strategy()) {
        prop_assert_eq!(rect.right(), rect.x + rect.width);
        prop_assert_eq!(rect.bottom(), rect.y + rect.height);
    }
}
