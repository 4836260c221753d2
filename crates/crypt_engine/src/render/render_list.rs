//! Per-frame render list
//!
//! An ordered, append-only sequence of object handles owned by the caller.
//! Clearing keeps the allocation so the same list can be reused every frame.

use crate::scene::{Object, ObjectId, ObjectStore};

/// Ordered handles of the objects to draw this frame
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    entries: Vec<ObjectId>,
}

impl RenderList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Drop all entries, keeping capacity
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append an object
    pub fn push(&mut self, id: ObjectId) {
        self.entries.push(id);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Allocated capacity
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.entries.iter().copied()
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<ObjectId> {
        self.entries.get(index).copied()
    }

    /// Resolve entries against a store, skipping stale handles
    pub fn resolve<'a>(&'a self, store: &'a ObjectStore) -> impl Iterator<Item = &'a Object> + 'a {
        self.entries.iter().filter_map(move |id| store.get(*id))
    }
}

impl Extend<ObjectId> for RenderList {
    fn extend<I: IntoIterator<Item = ObjectId>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::factory;

    #[test]
    fn test_clear_keeps_capacity() {
        let mut store = ObjectStore::with_key();
        let id = store.insert(factory::create_box(1.0, 1.0, 1.0));

        let mut list = RenderList::with_capacity(8);
        list.push(id);
        list.push(id);
        let capacity = list.capacity();

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn test_resolve_skips_removed_objects() {
        let mut store = ObjectStore::with_key();
        let kept = store.insert(factory::create_box(1.0, 1.0, 1.0));
        let removed = store.insert(factory::create_plane(2.0, 2.0));

        let mut list = RenderList::new();
        list.push(kept);
        list.push(removed);
        store.remove(removed);

        assert_eq!(list.len(), 2);
        assert_eq!(list.resolve(&store).count(), 1);
        assert_eq!(list.get(0), Some(kept));
    }
}
