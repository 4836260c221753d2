//! Specialized collection types

pub use slotmap::{new_key_type, Key, SlotMap};

/// Handle-based map using slot map for stable references
///
/// Keys stay valid across unrelated insertions and removals, and a key whose
/// slot was freed never resolves to a newer occupant.
pub type HandleMap<K, T> = SlotMap<K, T>;

#[cfg(test)]
mod tests {
    use super::*;

    new_key_type! {
        struct TestKey;
    }

    #[test]
    fn test_stale_handle_does_not_resolve() {
        let mut map: HandleMap<TestKey, u32> = HandleMap::with_key();
        let first = map.insert(1);
        map.remove(first);
        let second = map.insert(2);

        assert!(map.get(first).is_none());
        assert_eq!(map.get(second), Some(&2));
    }
}
