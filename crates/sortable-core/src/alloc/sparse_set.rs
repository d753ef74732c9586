use crate::profiling::profile_function;
use std::num::NonZeroU64;

/// Generational handle into a [`SparseSet`].
///
/// The low word stores `index + 1` so the handle is never zero, the high word
/// stores the slot generation. A handle whose slot has been freed and reused
/// no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexSlot(NonZeroU64);

impl IndexSlot {
    pub fn new(generation: u32, idx: u32) -> Self {
        let raw = ((generation as u64) << 32) | (idx as u64 + 1);
        match NonZeroU64::new(raw) {
            Some(raw) => Self(raw),
            None => unreachable!("low word holds idx + 1"),
        }
    }

    pub fn generation(&self) -> u32 {
        (self.0.get() >> 32) as u32
    }

    pub fn index(&self) -> u32 {
        (self.0.get() & u32::MAX as u64) as u32 - 1
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    data: Option<T>,
}

/// Slot storage with stable, generation-checked handles.
///
/// Lookups through a stale handle return `None` instead of aliasing whatever
/// now occupies the slot.
#[derive(Debug)]
pub struct SparseSet<T> {
    vec: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseSet<T> {
    pub const fn new() -> Self {
        Self {
            vec: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn push(&mut self, data: T) -> IndexSlot {
        profile_function!();
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.vec[idx as usize];
            slot.data = Some(data);
            IndexSlot::new(slot.generation, idx)
        } else {
            let idx = self.vec.len();
            self.vec.push(Slot {
                generation: 0,
                data: Some(data),
            });
            IndexSlot::new(0, idx as u32)
        }
    }

    fn slot(&self, idx: IndexSlot) -> Option<&Slot<T>> {
        self.vec
            .get(idx.index() as usize)
            .filter(|slot| slot.generation == idx.generation())
    }

    pub fn get(&self, idx: IndexSlot) -> Option<&T> {
        self.slot(idx).and_then(|slot| slot.data.as_ref())
    }

    pub fn get_mut(&mut self, idx: IndexSlot) -> Option<&mut T> {
        self.vec
            .get_mut(idx.index() as usize)
            .filter(|slot| slot.generation == idx.generation())
            .and_then(|slot| slot.data.as_mut())
    }

    pub fn contains(&self, idx: IndexSlot) -> bool {
        self.get(idx).is_some()
    }

    /// Remove the value behind `idx`, bumping the slot generation.
    ///
    /// Returns `None` for stale or unknown handles.
    pub fn remove(&mut self, idx: IndexSlot) -> Option<T> {
        profile_function!();
        let index = idx.index();
        let slot = self
            .vec
            .get_mut(index as usize)
            .filter(|slot| slot.generation == idx.generation())?;
        let data = slot.data.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        Some(data)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> SparseSetIter<'_, T> {
        SparseSetIter { set: self, idx: 0 }
    }
}

pub struct SparseSetIter<'a, T> {
    set: &'a SparseSet<T>,
    idx: usize,
}

impl<'a, T> Iterator for SparseSetIter<'a, T> {
    type Item = (IndexSlot, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.set.vec.get(self.idx) {
            self.idx += 1;
            if let Some(data) = slot.data.as_ref() {
                return Some((IndexSlot::new(slot.generation, self.idx as u32 - 1), data));
            }
        }
        None
    }
}

static_assertions::assert_eq_size!(IndexSlot, Option<IndexSlot>);
