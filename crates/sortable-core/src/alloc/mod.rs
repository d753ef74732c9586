//! Collection types for sortable.
//!
//! This module provides:
//! - The AHash-backed map used for side tables
//! - SparseSet storage handing out generational slot handles

pub mod sparse_set;

// Re-export optimized hash map
pub use ahash::AHashMap as HashMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("key", "value");
        assert_eq!(map.get("key"), Some(&"value"));
    }
}
