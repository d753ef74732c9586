//! SparseSet generational handle tests.
//!
//! Registry entries are keyed by these handles, so a handle kept by a
//! detached item must never resolve to a newer entry in the same slot.

use sortable_core::alloc::sparse_set::{IndexSlot, SparseSet};

#[test]
fn test_push_and_get() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    assert_eq!(set.get(idx), Some(&42));

    let idx2 = set.push(100);
    assert_eq!(set.get(idx2), Some(&100));

    // Original value should still be accessible
    assert_eq!(set.get(idx), Some(&42));
}

#[test]
fn test_push_returns_correct_index() {
    let mut set = SparseSet::<i32>::new();

    let idx0 = set.push(0);
    assert_eq!(idx0.index(), 0);
    assert_eq!(idx0.generation(), 0);

    let idx1 = set.push(1);
    assert_eq!(idx1.index(), 1);
    assert_eq!(idx1.generation(), 0);
}

#[test]
fn test_get_mut() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    if let Some(value) = set.get_mut(idx) {
        *value = 7;
    }
    assert_eq!(set.get(idx), Some(&7));
}

#[test]
fn test_get_after_remove_returns_none() {
    let mut set = SparseSet::new();
    let idx = set.push("entry");

    assert_eq!(set.remove(idx), Some("entry"));
    assert_eq!(set.get(idx), None);
    assert!(set.get_mut(idx).is_none());
    assert!(!set.contains(idx));
}

#[test]
fn test_remove_already_removed_is_none() {
    let mut set = SparseSet::new();
    let idx = set.push(1u8);

    assert_eq!(set.remove(idx), Some(1));
    assert_eq!(set.remove(idx), None);
    assert_eq!(set.len(), 0);
}

#[test]
fn test_generation_increment() {
    let mut set = SparseSet::new();

    let first = set.push(1);
    set.remove(first);
    let second = set.push(2);

    assert_eq!(first.index(), second.index());
    assert_eq!(second.generation(), first.generation() + 1);
    assert_eq!(set.get(first), None);
    assert_eq!(set.get(second), Some(&2));
}

#[test]
fn test_multiple_generation_increments() {
    let mut set = SparseSet::new();
    let mut idx = set.push(0);

    for round in 1..10 {
        set.remove(idx);
        idx = set.push(round);
        assert_eq!(idx.index(), 0);
        assert_eq!(idx.generation(), round as u32);
    }
}

#[test]
fn test_iteration_with_removed_elements() {
    let mut set = SparseSet::new();
    let handles: Vec<_> = (0..5).map(|i| set.push(i)).collect();

    set.remove(handles[1]);
    set.remove(handles[3]);

    let values: Vec<_> = set.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![0, 2, 4]);

    for (handle, value) in set.iter() {
        assert_eq!(set.get(handle), Some(value));
    }
}

#[test]
fn test_len_and_is_empty() {
    let mut set = SparseSet::new();
    assert!(set.is_empty());

    let a = set.push('a');
    let _b = set.push('b');
    assert_eq!(set.len(), 2);

    set.remove(a);
    assert_eq!(set.len(), 1);
    assert!(!set.is_empty());
}

#[test]
fn test_index_slot_equality() {
    let a = IndexSlot::new(3, 7);
    let b = IndexSlot::new(3, 7);
    let c = IndexSlot::new(4, 7);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.generation(), 3);
    assert_eq!(a.index(), 7);
}

#[test]
fn test_stress_many_removals_and_reuses() {
    let mut set = SparseSet::new();
    let mut live = Vec::new();

    for i in 0..1000 {
        live.push((set.push(i), i));
        if i % 3 == 0 {
            let (handle, _) = live.remove(0);
            set.remove(handle);
        }
    }

    assert_eq!(set.len(), live.len());
    for (handle, value) in &live {
        assert_eq!(set.get(*handle), Some(value));
    }
}
