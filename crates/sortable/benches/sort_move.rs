use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sortable::{EventScope, SortableConfig, SortableContainer, SortableItem};
use sortable_core::event::{EventType, PointerEvent};
use sortable_core::geometry::Size;
use sortable_core::host::ElementId;
use sortable_core::math::Vec2;
use sortable_test_utils::MockHost;

fn setup(count: usize) -> (MockHost, SortableContainer, Vec<SortableItem>, ElementId) {
    let mut host = MockHost::new();
    let container = host.add_root(Size::new(200.0, 40.0 * count as f32));
    let elements = host.stacked_list(container, Vec2::ZERO, Size::new(200.0, 40.0), count);

    let mut list = SortableContainer::new(SortableConfig::default());
    list.mount(&mut host, container);
    let items = elements
        .iter()
        .enumerate()
        .map(|(index, &element)| {
            let mut item = SortableItem::new(list.registry(), index);
            item.attach(element);
            item
        })
        .collect();

    let mut press = PointerEvent::mouse(EventType::MouseDown, elements[0], Vec2::new(100.0, 20.0));
    list.dispatch(&mut host, &mut press, EventScope::Document);

    (host, list, items, container)
}

fn bench_sort_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_move");

    for count in [10, 50, 100, 500] {
        group.bench_with_input(BenchmarkId::new("items", count), &count, |b, &count| {
            let (mut host, mut list, _items, container) = setup(count);
            let target = Vec2::new(100.0, 20.0 + 40.0 * (count / 2) as f32);
            b.iter(|| {
                let mut event = PointerEvent::mouse(EventType::MouseMove, container, target);
                list.dispatch(&mut host, &mut event, EventScope::Document);
                list.dispatch(&mut host, &mut event, EventScope::Container);
                host.clear_calls();
                black_box(list.hovered_index())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort_move);
criterion_main!(benches);
