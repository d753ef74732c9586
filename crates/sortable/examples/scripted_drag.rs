//! Scripted Drag - Reordering a list without a UI toolkit
//!
//! This example drives the engine with a canned pointer sequence against the
//! in-memory mock host:
//! - Press on the second item
//! - Drag it down past three siblings, printing the live shifts
//! - Release and apply the reported move to the caller's data
//!
//! Run with `RUST_LOG=sortable=trace` to see every registry operation.

use sortable::{EventScope, SortOutcome, SortableConfig, SortableContainer, SortableItem};
use sortable_core::event::{EventType, PointerEvent};
use sortable_core::geometry::Size;
use sortable_core::logging;
use sortable_core::math::Vec2;
use sortable_core::profiling::{ProfilingBackend, init_profiling, new_frame};
use sortable_test_utils::MockHost;

const ROW: Size<f32> = Size {
    width: 240.0,
    height: 32.0,
};

fn main() {
    logging::init();

    // Connect puffin_viewer at http://127.0.0.1:8585
    init_profiling(ProfilingBackend::PuffinHttp);

    let mut fruits = vec!["apple", "banana", "cherry", "damson", "elderberry"];

    let mut host = MockHost::new();
    let container = host.add_root(Size::new(ROW.width, ROW.height * fruits.len() as f32));
    let rows = host.stacked_list(container, Vec2::ZERO, ROW, fruits.len());

    let mut list = SortableContainer::new(
        SortableConfig::default()
            .with_helper_class("row--dragging")
            .on_item_click(|index| println!("clicked row {index}")),
    );
    list.mount(&mut host, container);

    let _items: Vec<_> = rows
        .iter()
        .enumerate()
        .map(|(index, &row)| {
            let mut item = SortableItem::new(list.registry(), index);
            item.attach(row);
            item
        })
        .collect();

    let start = Vec2::new(ROW.width / 2.0, ROW.height * 1.5);
    let mut press = PointerEvent::mouse(EventType::MouseDown, rows[1], start);
    list.dispatch(&mut host, &mut press, EventScope::Document);

    for step in 1..=6 {
        new_frame();
        let point = start + Vec2::new(0.0, ROW.height * 0.5 * step as f32);
        let mut motion = PointerEvent::mouse(EventType::MouseMove, container, point);
        list.dispatch(&mut host, &mut motion, EventScope::Document);
        list.dispatch(&mut host, &mut motion, EventScope::Container);

        let shifts: Vec<_> = rows.iter().map(|&row| host.translate(row).y).collect();
        println!(
            "pointer y={:>5.1} hovered={:?} shifts={:?}",
            point.y,
            list.hovered_index(),
            shifts
        );
    }

    let mut release = PointerEvent::mouse(EventType::MouseUp, container, Vec2::ZERO);
    match list.dispatch(&mut host, &mut release, EventScope::Document) {
        Some(SortOutcome::Reorder(end)) => {
            end.apply(&mut fruits);
            println!("moved {} -> {}: {:?}", end.old_index, end.new_index, fruits);
        }
        Some(SortOutcome::Click { index }) => println!("click on {index}"),
        None => println!("drag abandoned"),
    }

    list.unmount(&mut host);
}
