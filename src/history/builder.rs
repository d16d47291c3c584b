use super::DEFAULT_MAX_BYTES;
use crate::socket::Socket;
use crate::{Footprint, SnapshotStore, UndoHistory};
use core::marker::PhantomData;

/// Builder for an [`UndoHistory`].
///
/// # Examples
/// ```
/// # use snapshot_history::{Footprint, Signal, UndoHistory};
/// let mut history = UndoHistory::builder()
///     .max_bytes(64 * 1_048_576)
///     .footprint(Footprint::exact())
///     .capacity(100)
///     .connect(|signal: Signal| { dbg!(signal); })
///     .build();
/// # history.push_undo("Cut", String::new());
/// ```
#[derive(Debug)]
pub struct Builder<P, S = ()> {
    capacity: usize,
    max_bytes: usize,
    footprint: Footprint,
    saved: bool,
    socket: Socket<S>,
    pd: PhantomData<P>,
}

impl<P> Builder<P> {
    /// Returns a builder for a history.
    pub fn new() -> Builder<P> {
        Builder {
            capacity: 0,
            max_bytes: DEFAULT_MAX_BYTES,
            footprint: Footprint::default(),
            saved: true,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}

impl<P, S> Builder<P, S> {
    /// Sets the capacity for the history.
    pub fn capacity(mut self, capacity: usize) -> Builder<P, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the memory budget in bytes.
    ///
    /// The oldest snapshots are evicted once the budget is reached,
    /// but at least two snapshots are always kept.
    pub fn max_bytes(mut self, max_bytes: usize) -> Builder<P, S> {
        self.max_bytes = max_bytes;
        self
    }

    /// Sets how many bytes each payload is accounted for.
    pub fn footprint(mut self, footprint: Footprint) -> Builder<P, S> {
        self.footprint = footprint;
        self
    }

    /// Sets if the document is initially in a saved state.
    /// By default the document is in a saved state.
    pub fn saved(mut self, saved: bool) -> Builder<P, S> {
        self.saved = saved;
        self
    }

    /// Connects the slot.
    pub fn connect<T>(self, slot: T) -> Builder<P, T> {
        Builder {
            capacity: self.capacity,
            max_bytes: self.max_bytes,
            footprint: self.footprint,
            saved: self.saved,
            socket: Socket::new(slot),
            pd: PhantomData,
        }
    }

    /// Builds the history.
    pub fn build(self) -> UndoHistory<P, S> {
        UndoHistory {
            store: SnapshotStore::with_capacity(self.capacity),
            cursor: 0,
            max_bytes: self.max_bytes,
            used_bytes: 0,
            footprint: self.footprint,
            saved: self.saved.then_some(0),
            socket: self.socket,
        }
    }
}

impl<P> Default for Builder<P> {
    fn default() -> Self {
        Builder::new()
    }
}
