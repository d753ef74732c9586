/// Indices reported when a drag finishes with movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortEnd {
    pub old_index: usize,
    pub new_index: usize,
}

impl SortEnd {
    /// Whether the item actually changes position.
    pub fn is_move(&self) -> bool {
        self.old_index != self.new_index
    }

    /// Apply this reorder to a slice of items: the element at `old_index` is
    /// taken out and reinserted at `new_index`.
    ///
    /// Out-of-range indices leave the slice untouched and return `false`.
    pub fn apply<T>(&self, items: &mut [T]) -> bool {
        let (old, new) = (self.old_index, self.new_index);
        if old >= items.len() || new >= items.len() {
            return false;
        }
        if old < new {
            items[old..=new].rotate_left(1);
        } else {
            items[new..=old].rotate_right(1);
        }
        true
    }
}

/// What a press/release cycle meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOutcome {
    /// Press and release without movement.
    Click { index: usize },
    /// A completed drag.
    Reorder(SortEnd),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_moves_down() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        assert!(SortEnd { old_index: 1, new_index: 3 }.apply(&mut items));
        assert_eq!(items, vec!['a', 'c', 'd', 'b', 'e']);
    }

    #[test]
    fn test_apply_moves_up() {
        let mut items = vec!['a', 'b', 'c'];
        assert!(SortEnd { old_index: 2, new_index: 0 }.apply(&mut items));
        assert_eq!(items, vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_apply_out_of_range() {
        let mut items = vec![1, 2];
        assert!(!SortEnd { old_index: 0, new_index: 2 }.apply(&mut items));
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_is_move() {
        assert!(!SortEnd { old_index: 2, new_index: 2 }.is_move());
        assert!(SortEnd { old_index: 2, new_index: 0 }.is_move());
    }
}
