//! Dual-index item store.
//!
//! [`Catalog`] keeps every item in two indexes: a primary map keyed by the
//! unique [`ItemId`](super::ItemId) and a secondary map grouping items by
//! [`Producer`](super::Producer). Both indexes live in one struct behind a
//! single [`Mutex`], so every public operation observes and leaves them in
//! agreement.
//!
//! Each primary slot records the item's position inside its producer group.
//! Removal uses that position for a `swap_remove` and then repoints the one
//! item that was moved into the hole, which keeps it O(1) amortized.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{ItemHandle, ItemId, Producer};

/// Primary-index entry: the item plus its position in the producer group.
#[derive(Debug)]
struct Slot {
    item: ItemHandle,
    position: usize,
}

/// Both indexes, guarded together.
#[derive(Debug, Default)]
struct Indexes {
    by_id: HashMap<ItemId, Slot>,
    /// Never holds an empty group.
    by_producer: HashMap<Producer, Vec<ItemHandle>>,
}

/// Thread-safe catalog of items indexed by id and by producer.
///
/// # Concurrency
///
/// - One mutex guards both indexes for the whole of each operation.
/// - No operation performs I/O or blocks on anything but the mutex.
/// - Returned [`ItemHandle`]s are independent of the catalog and stay
///   readable after the item is removed or the catalog is dropped.
///
/// # Complexity
///
/// | Operation            | Average            |
/// |----------------------|--------------------|
/// | `add`                | O(1)               |
/// | `find_by_id`         | O(1)               |
/// | `find_by_producer`   | O(M), M = matches  |
/// | `remove_by_id`       | O(1) amortized     |
#[derive(Debug, Default)]
pub struct Catalog {
    indexes: Mutex<Indexes>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog with room for `capacity` items in the
    /// primary index.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indexes: Mutex::new(Indexes {
                by_id: HashMap::with_capacity(capacity),
                by_producer: HashMap::new(),
            }),
        }
    }

    /// Acquires the index lock.
    ///
    /// A poisoned lock is recovered: every mutation completes both index
    /// updates before it can return, so the guarded state is consistent.
    fn lock(&self) -> MutexGuard<'_, Indexes> {
        self.indexes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `item` unless an item with the same id is already present.
    ///
    /// Returns `true` if the item was inserted. A duplicate id is rejected
    /// with `false` and leaves the existing item untouched.
    pub fn add(&self, item: ItemHandle) -> bool {
        self.add_with(item, |_| {})
    }

    /// Like [`Catalog::add`], but runs `on_commit` with the inserted item
    /// before the lock is released.
    ///
    /// Commit hooks run in the same total order as the mutations themselves.
    /// `on_commit` is not called for a rejected duplicate. It must not call
    /// back into this catalog: the lock is not reentrant.
    pub fn add_with<F>(&self, item: ItemHandle, on_commit: F) -> bool
    where
        F: FnOnce(&ItemHandle),
    {
        let mut guard = self.lock();
        let Indexes { by_id, by_producer } = &mut *guard;

        let Entry::Vacant(vacant) = by_id.entry(item.id.clone()) else {
            return false;
        };
        let group = by_producer.entry(item.producer.clone()).or_default();
        let position = group.len();
        group.push(Arc::clone(&item));
        let slot = vacant.insert(Slot { item, position });
        on_commit(&slot.item);
        true
    }

    /// Returns the item with the given id, if present.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<ItemHandle> {
        self.lock()
            .by_id
            .get(id)
            .map(|slot| Arc::clone(&slot.item))
    }

    /// Returns every item of the given producer, in no particular order.
    ///
    /// The result is a snapshot taken under the lock, so it never mixes
    /// states from before and after a concurrent mutation.
    #[must_use]
    pub fn find_by_producer(&self, producer: &str) -> Vec<ItemHandle> {
        self.producer_snapshot(producer)
    }

    /// Appends every item of the given producer to `out` and returns how
    /// many were appended.
    ///
    /// The group is copied under the lock and `out` is extended after the
    /// lock is released, so `out` may itself call into the catalog.
    pub fn find_by_producer_into<E>(&self, producer: &str, out: &mut E) -> usize
    where
        E: Extend<ItemHandle>,
    {
        let snapshot = self.producer_snapshot(producer);
        let count = snapshot.len();
        out.extend(snapshot);
        count
    }

    fn producer_snapshot(&self, producer: &str) -> Vec<ItemHandle> {
        self.lock()
            .by_producer
            .get(producer)
            .map(|group| group.iter().map(Arc::clone).collect())
            .unwrap_or_default()
    }

    /// Removes the item with the given id from both indexes.
    ///
    /// Returns the number of removed items, which is either 0 or 1.
    pub fn remove_by_id(&self, id: &str) -> usize {
        usize::from(self.take_by_id(id).is_some())
    }

    /// Removes the item with the given id from both indexes and returns it.
    pub fn take_by_id(&self, id: &str) -> Option<ItemHandle> {
        self.take_by_id_with(id, |_| {})
    }

    /// Like [`Catalog::take_by_id`], but runs `on_commit` with the removed
    /// item before the lock is released.
    ///
    /// Same ordering and reentrancy rules as [`Catalog::add_with`].
    pub fn take_by_id_with<F>(&self, id: &str, on_commit: F) -> Option<ItemHandle>
    where
        F: FnOnce(&ItemHandle),
    {
        let mut guard = self.lock();
        let Indexes { by_id, by_producer } = &mut *guard;

        let slot = by_id.remove(id)?;
        let producer = slot.item.producer.as_str();
        if let Some(group) = by_producer.get_mut(producer) {
            debug_assert!(slot.position < group.len());
            if slot.position < group.len() {
                group.swap_remove(slot.position);
            }
            // The former last element now sits at `position`.
            if let Some(moved) = group.get(slot.position)
                && let Some(moved_slot) = by_id.get_mut(moved.id.as_str())
            {
                moved_slot.position = slot.position;
            }
            if group.is_empty() {
                by_producer.remove(producer);
            }
        }
        on_commit(&slot.item);
        Some(slot.item)
    }

    /// Returns `true` if an item with the given id is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.lock().by_id.contains_key(id)
    }

    /// Returns the number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().by_id.len()
    }

    /// Returns `true` if the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().by_id.is_empty()
    }

    /// Returns the number of distinct producers with at least one item.
    #[must_use]
    pub fn producer_count(&self) -> usize {
        self.lock().by_producer.len()
    }
}
