//! The ordered container behind the history.

use crate::Snapshot;
use core::mem;
use core::ops::{Index, IndexMut};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{vec_deque, VecDeque};

/// An ordered sequence of snapshots, oldest first.
///
/// Appending always inserts at the end and the store never reorders.
/// Removing the front shifts every index down by one.
/// The store does no byte accounting, that is left to its owner.
///
/// # Examples
/// ```
/// # use snapshot_history::SnapshotStore;
/// let mut store = SnapshotStore::new();
/// store.append("Cut", "a");
/// store.append("Paste", "b");
/// store.append("", "c");
/// assert_eq!(store[1].label(), "Paste");
///
/// store.remove_front();
/// assert_eq!(store[0].label(), "Paste");
/// assert_eq!(store.remove_back().unwrap().into_payload(), "c");
/// assert_eq!(store.len(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct SnapshotStore<P> {
    snapshots: VecDeque<Snapshot<P>>,
}

impl<P> SnapshotStore<P> {
    /// Returns an empty store.
    pub fn new() -> SnapshotStore<P> {
        SnapshotStore::with_capacity(0)
    }

    /// Returns an empty store with space for at least `capacity` snapshots.
    pub fn with_capacity(capacity: usize) -> SnapshotStore<P> {
        SnapshotStore {
            snapshots: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds a snapshot to the end.
    pub fn append(&mut self, label: impl Into<String>, payload: P) {
        self.push(Snapshot::new(label, payload));
    }

    /// Adds an already built snapshot to the end.
    pub fn push(&mut self, snapshot: Snapshot<P>) {
        self.snapshots.push_back(snapshot);
    }

    /// Removes and returns the oldest snapshot, or `None` if the store is empty.
    pub fn remove_front(&mut self) -> Option<Snapshot<P>> {
        self.snapshots.pop_front()
    }

    /// Removes and returns the newest snapshot, or `None` if the store is empty.
    pub fn remove_back(&mut self) -> Option<Snapshot<P>> {
        self.snapshots.pop_back()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot<P>> {
        self.snapshots.get(index)
    }

    /// Returns a mutable reference to the snapshot at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Snapshot<P>> {
        self.snapshots.get_mut(index)
    }

    /// Replaces the snapshot at `index` and returns the old one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, snapshot: Snapshot<P>) -> Snapshot<P> {
        mem::replace(&mut self.snapshots[index], snapshot)
    }

    /// Returns the number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if the store holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns an iterator over the snapshots, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Snapshot<P>> {
        self.snapshots.iter()
    }

    /// Removes every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Reserves capacity for at least `additional` more snapshots.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.snapshots.reserve(additional);
    }

    /// Returns the capacity of the store.
    pub fn capacity(&self) -> usize {
        self.snapshots.capacity()
    }

    /// Shrinks the capacity of the store as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.snapshots.shrink_to_fit();
    }

    /// Returns the snapshots as a pair of slices, oldest first.
    #[cfg(feature = "chrono")]
    pub(crate) fn as_slices(&self) -> (&[Snapshot<P>], &[Snapshot<P>]) {
        self.snapshots.as_slices()
    }
}

impl<P> Default for SnapshotStore<P> {
    fn default() -> Self {
        SnapshotStore::new()
    }
}

impl<P> Index<usize> for SnapshotStore<P> {
    type Output = Snapshot<P>;

    fn index(&self, index: usize) -> &Snapshot<P> {
        &self.snapshots[index]
    }
}

impl<P> IndexMut<usize> for SnapshotStore<P> {
    fn index_mut(&mut self, index: usize) -> &mut Snapshot<P> {
        &mut self.snapshots[index]
    }
}

impl<'a, P> IntoIterator for &'a SnapshotStore<P> {
    type Item = &'a Snapshot<P>;
    type IntoIter = vec_deque::Iter<'a, Snapshot<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
