//! A linear history of snapshots.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::socket::Socket;
use crate::{Footprint, Payload, Signal, Slot, Snapshot, SnapshotStore, State};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The default memory budget of a history, 16 MiB.
pub const DEFAULT_MAX_BYTES: usize = 16 * 1_048_576;

/// A linear history of snapshots with a memory budget.
///
/// The cursor points into the stored snapshots and ranges from `0` to
/// `len` inclusive. When it equals `len` the history is at its leading
/// edge: the live document is newer than every snapshot and there is
/// nothing to redo.
///
/// The snapshot at index `i` holds the document as it was before the
/// operation named by its label was made. Callers push the state they are
/// about to change, then change it.
///
/// # Examples
/// ```
/// # use snapshot_history::UndoHistory;
/// let mut history = UndoHistory::new(1024);
/// history.push_undo("Cut", "a");
/// history.push_undo("Paste", "b");
///
/// assert_eq!(history.undo("c"), Some(&"b"));
/// assert_eq!(history.undo("ignored"), Some(&"a"));
/// assert_eq!(history.redo_label(), "Cut");
///
/// // Pushing after an undo discards the old future.
/// history.push_undo("Delete", "d");
/// assert!(!history.can_redo());
/// assert_eq!(history.undo_label(), "Delete");
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>"))
)]
#[derive(Clone, Debug)]
pub struct UndoHistory<P, S = ()> {
    store: SnapshotStore<P>,
    cursor: usize,
    max_bytes: usize,
    used_bytes: usize,
    footprint: Footprint,
    saved: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip))]
    socket: Socket<S>,
}

/// What the signals compare against after the history has changed.
#[derive(Copy, Clone)]
struct Status {
    can_undo: bool,
    can_redo: bool,
    saved: bool,
    cursor: usize,
}

impl<P> UndoHistory<P> {
    /// Returns a new history with a budget of `max_bytes`.
    pub fn new(max_bytes: usize) -> UndoHistory<P> {
        UndoHistory::builder().max_bytes(max_bytes).build()
    }

    /// Returns a new history builder.
    pub fn builder() -> Builder<P> {
        Builder::new()
    }
}

impl<P, S> UndoHistory<P, S> {
    /// Reserves capacity for at least `additional` more snapshots.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.store.reserve(additional);
    }

    /// Returns the capacity of the history.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Shrinks the capacity of the history as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.store.shrink_to_fit();
    }

    /// Returns the number of stored snapshots.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no snapshots are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the memory budget in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Returns the number of bytes the stored snapshots are accounted for.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Returns the accounting policy.
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns `true` if the history can undo.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns `true` if the history can redo.
    pub fn can_redo(&self) -> bool {
        !self.is_next_eof()
    }

    /// Returns `true` if the cursor is at the leading edge.
    ///
    /// A cursor that has drifted past the end counts as being at the edge.
    pub fn is_eof(&self) -> bool {
        self.cursor.min(self.store.len()) == self.store.len()
    }

    /// Returns `true` if the cursor is at, or one before, the leading edge.
    pub fn is_next_eof(&self) -> bool {
        self.cursor.saturating_add(1) >= self.store.len()
    }

    /// Returns `true` if the document is in a saved state, `false` otherwise.
    pub fn is_saved(&self) -> bool {
        self.saved == Some(self.cursor)
    }

    /// Returns the position of the cursor.
    pub fn current(&self) -> usize {
        self.cursor
    }

    /// Returns the label of the operation the next [`undo`](UndoHistory::undo)
    /// takes back, or an empty string if there is none.
    pub fn undo_label(&self) -> &str {
        if self.cursor > 0 && self.store.len() >= self.cursor {
            self.store[self.cursor - 1].label()
        } else {
            ""
        }
    }

    /// Returns the label of the operation the next [`redo`](UndoHistory::redo)
    /// replays, or an empty string if there is none.
    pub fn redo_label(&self) -> &str {
        if self.is_next_eof() {
            ""
        } else {
            self.store[self.cursor].label()
        }
    }

    /// Returns the label of the snapshot at `index`, or an empty string
    /// if `index` is out of bounds.
    pub fn label(&self, index: usize) -> &str {
        self.store.get(index).map_or("", Snapshot::label)
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot<P>> {
        self.store.get(index)
    }

    /// Returns an iterator over the snapshots, oldest first.
    pub fn snapshots(
        &self,
    ) -> impl DoubleEndedIterator<Item = &Snapshot<P>> + ExactSizeIterator {
        self.store.iter()
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<'_, P, S> {
        Display::from(self)
    }

    fn status(&self) -> Status {
        Status {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            saved: self.is_saved(),
            cursor: self.cursor,
        }
    }

    fn clamp_cursor(&mut self) {
        if self.cursor > self.store.len() {
            debug!(
                cursor = self.cursor,
                len = self.store.len(),
                "cursor past the leading edge, clamping"
            );
            self.cursor = self.store.len();
        }
    }
}

impl<P: Payload, S: Slot> UndoHistory<P, S> {
    /// Records that the document is about to change through `label`.
    ///
    /// Every snapshot after the cursor is discarded first, so history stays
    /// linear. At the leading edge `payload` is stored as a new snapshot.
    /// Otherwise the cursor sits on the last snapshot, which already holds
    /// the state before the change; only its label is replaced and
    /// `payload` is dropped. The cursor then advances and the oldest
    /// snapshots are evicted if the budget is exceeded.
    pub fn push_undo(&mut self, label: impl Into<String>, payload: P) {
        self.clamp_cursor();
        let status = self.status();
        while !self.is_next_eof() {
            self.truncate_back();
        }
        // A saved state in the discarded future can never be reached again.
        let cursor = self.cursor;
        self.saved = self.saved.filter(|&saved| saved <= cursor);
        if self.is_eof() {
            self.append(label.into(), payload);
        } else {
            self.store[self.cursor].set_label(label);
        }
        self.cursor += 1;
        trace!(cursor = self.cursor, len = self.store.len(), "push");
        self.check_mem_usage();
        self.emit_changes(status);
    }

    /// Moves the cursor back one step and returns the payload to restore.
    ///
    /// At the leading edge `current` is stored first, so the present state
    /// can be reached again through [`redo`](UndoHistory::redo).
    /// Returns `None` if there is nothing to undo.
    pub fn undo(&mut self, current: P) -> Option<&P> {
        self.undo_with(|| current)
    }

    /// Like [`undo`](UndoHistory::undo), but only captures the current
    /// state when it is needed.
    pub fn undo_with(&mut self, current: impl FnOnce() -> P) -> Option<&P> {
        self.clamp_cursor();
        if self.store.is_empty() || self.cursor == 0 {
            return None;
        }
        let status = self.status();
        if self.is_eof() {
            self.append(String::new(), current());
        }
        self.cursor -= 1;
        trace!(cursor = self.cursor, len = self.store.len(), "undo");
        self.emit_changes(status);
        self.store.get(self.cursor).map(Snapshot::payload)
    }

    /// Moves the cursor forward one step and returns the payload to restore.
    ///
    /// Returns `None` if there is nothing to redo.
    pub fn redo(&mut self) -> Option<&P> {
        self.clamp_cursor();
        if self.is_next_eof() {
            return None;
        }
        let status = self.status();
        self.cursor += 1;
        trace!(cursor = self.cursor, len = self.store.len(), "redo");
        self.emit_changes(status);
        self.store.get(self.cursor).map(Snapshot::payload)
    }

    /// Stores `payload` at the cursor.
    ///
    /// At the leading edge the snapshot is appended, otherwise the label and
    /// payload of the snapshot at the cursor are replaced. A replaced
    /// snapshot keeps its byte count and the time it was first recorded.
    pub fn save_into_current_slot(&mut self, label: impl Into<String>, payload: P) {
        self.clamp_cursor();
        if self.is_eof() {
            self.append(label.into(), payload);
        } else if let Some(snapshot) = self.store.get_mut(self.cursor) {
            snapshot.set_label(label);
            snapshot.set_payload(payload);
        }
    }

    /// Jumps directly to the snapshot at `index` and returns its payload.
    ///
    /// Going back from the leading edge stores `current` first, like
    /// [`undo`](UndoHistory::undo) does. Returns `None` if the cursor is
    /// already at `index` or `index` can not be reached by redoing.
    ///
    /// # Examples
    /// ```
    /// # use snapshot_history::UndoHistory;
    /// let mut history = UndoHistory::default();
    /// history.push_undo("Cut", "a");
    /// history.push_undo("Paste", "b");
    /// history.push_undo("Trim", "c");
    ///
    /// assert_eq!(history.go_to(0, "d"), Some(&"a"));
    /// assert_eq!(history.go_to(3, "ignored"), Some(&"d"));
    /// assert_eq!(history.go_to(4, "ignored"), None);
    /// ```
    pub fn go_to(&mut self, index: usize, current: P) -> Option<&P> {
        self.go_to_with(index, || current)
    }

    /// Like [`go_to`](UndoHistory::go_to), but only captures the current
    /// state when it is needed.
    pub fn go_to_with(&mut self, index: usize, current: impl FnOnce() -> P) -> Option<&P> {
        self.clamp_cursor();
        if index == self.cursor || (index > self.cursor && index >= self.store.len()) {
            return None;
        }
        let status = self.status();
        if index < self.cursor && self.is_eof() {
            self.append(String::new(), current());
        }
        self.cursor = index;
        trace!(cursor = self.cursor, len = self.store.len(), "go to");
        self.emit_changes(status);
        self.store.get(self.cursor).map(Snapshot::payload)
    }

    /// Goes back or forward to the last snapshot recorded at or before `to`.
    ///
    /// Returns `None` if every snapshot is newer than `to`,
    /// or if the cursor is already there.
    #[cfg(feature = "chrono")]
    pub fn time_travel(&mut self, to: &DateTime<Utc>, current: P) -> Option<&P> {
        let (head, tail) = self.store.as_slices();
        let found = match head.partition_point(|s| s.created_at() <= *to) {
            n if n == head.len() => n + tail.partition_point(|s| s.created_at() <= *to),
            n => n,
        };
        let index = found.checked_sub(1)?;
        self.go_to(index, current)
    }

    /// Sets the memory budget and evicts snapshots if it is exceeded.
    pub fn set_max_bytes(&mut self, max_bytes: usize) {
        let status = self.status();
        self.max_bytes = max_bytes;
        self.check_mem_usage();
        self.emit_changes(status);
    }

    /// Marks the document as currently being in a saved or unsaved state.
    pub fn set_saved(&mut self, saved: bool) {
        let was_saved = self.is_saved();
        if saved {
            self.saved = Some(self.cursor);
            self.socket.emit_if(!was_saved, || Signal::Saved(true));
        } else {
            self.saved = None;
            self.socket.emit_if(was_saved, || Signal::Saved(false));
        }
    }

    /// Removes all snapshots and moves the cursor back to the start.
    ///
    /// The history stays usable afterwards.
    pub fn clear(&mut self) {
        let status = self.status();
        self.store.clear();
        self.used_bytes = 0;
        self.saved = status.saved.then_some(0);
        self.cursor = 0;
        self.emit_changes(status);
    }

    /// Captures `target` and records that it is about to change through `label`.
    pub fn push_state<T>(&mut self, label: impl Into<String>, target: &T)
    where
        T: State<Payload = P> + ?Sized,
    {
        self.push_undo(label, target.capture());
    }

    /// Undoes one step and restores `target` from the resulting snapshot.
    ///
    /// Returns `None` if there is nothing to undo.
    ///
    /// # Errors
    /// If `target` fails to restore itself the error is returned.
    /// The cursor has moved regardless.
    pub fn undo_state<T>(&mut self, target: &mut T) -> Option<Result<(), T::Error>>
    where
        T: State<Payload = P> + ?Sized,
    {
        let payload = self.undo_with(|| target.capture())?;
        Some(target.restore(payload))
    }

    /// Redoes one step and restores `target` from the resulting snapshot.
    ///
    /// Returns `None` if there is nothing to redo.
    ///
    /// # Errors
    /// If `target` fails to restore itself the error is returned.
    /// The cursor has moved regardless.
    pub fn redo_state<T>(&mut self, target: &mut T) -> Option<Result<(), T::Error>>
    where
        T: State<Payload = P> + ?Sized,
    {
        let payload = self.redo()?;
        Some(target.restore(payload))
    }

    fn append(&mut self, label: String, payload: P) {
        self.used_bytes = self.used_bytes.saturating_add(self.footprint.of(&payload));
        self.store.append(label, payload);
    }

    fn truncate_back(&mut self) {
        if let Some(snapshot) = self.store.remove_back() {
            let freed = self.footprint.of(snapshot.payload());
            self.used_bytes = self.used_bytes.saturating_sub(freed);
            debug!(label = snapshot.label(), freed, "discarded redo snapshot");
        }
    }

    fn check_mem_usage(&mut self) {
        let mut evicted = 0;
        // The snapshot under the cursor is never evicted.
        while self.store.len() > 2 && self.used_bytes >= self.max_bytes && self.cursor > 0 {
            let Some(snapshot) = self.store.remove_front() else {
                break;
            };
            let freed = self.footprint.of(snapshot.payload());
            self.used_bytes = self.used_bytes.saturating_sub(freed);
            self.cursor -= 1;
            self.saved = self.saved.and_then(|saved| saved.checked_sub(1));
            evicted += 1;
        }
        if evicted > 0 {
            debug!(
                evicted,
                used_bytes = self.used_bytes,
                max_bytes = self.max_bytes,
                "evicted oldest snapshots"
            );
            self.socket.emit(|| Signal::Evicted(evicted));
        }
    }

    fn emit_changes(&mut self, old: Status) {
        let new = self.status();
        self.socket
            .emit_if(old.can_undo != new.can_undo, || Signal::Undo(new.can_undo));
        self.socket
            .emit_if(old.can_redo != new.can_redo, || Signal::Redo(new.can_redo));
        self.socket
            .emit_if(old.saved != new.saved, || Signal::Saved(new.saved));
        self.socket
            .emit_if(old.cursor != new.cursor, || Signal::Index(new.cursor));
    }
}

impl<P> Default for UndoHistory<P> {
    fn default() -> UndoHistory<P> {
        UndoHistory::new(DEFAULT_MAX_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Signal>>>);

    impl Recorder {
        fn slot(&self) -> impl FnMut(Signal) {
            let signals = Rc::clone(&self.0);
            move |signal| signals.borrow_mut().push(signal)
        }

        fn take(&self) -> Vec<Signal> {
            self.0.borrow_mut().drain(..).collect()
        }
    }

    fn labels<P, S>(history: &UndoHistory<P, S>) -> Vec<&str> {
        history.snapshots().map(Snapshot::label).collect()
    }

    #[test]
    fn empty() {
        let mut history = UndoHistory::<String>::new(16 * 1_048_576);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.is_eof());
        assert_eq!(history.current(), 0);
        assert_eq!(history.undo_label(), "");
        assert_eq!(history.redo_label(), "");
        assert!(history.undo(String::from("x")).is_none());
        assert!(history.redo().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn push_then_undo_redo() {
        let mut history = UndoHistory::default();
        history.push_undo("create", String::from("stateA"));
        assert_eq!(history.current(), 1);
        assert!(history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_label(), "create");

        history.push_undo("edit1", String::from("stateB"));
        assert_eq!(history.current(), 2);
        let out = history.undo(String::from("stateB_current")).cloned();
        assert_eq!(out.as_deref(), Some("stateB"));
        assert_eq!(history.current(), 1);
        assert!(history.can_redo());
        assert_eq!(history.redo_label(), "edit1");
        assert_eq!(labels(&history), ["create", "edit1", ""]);

        let out = history.redo().cloned();
        assert_eq!(out.as_deref(), Some("stateB_current"));
        assert_eq!(history.current(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn push_after_undo_relabels() {
        let mut history = UndoHistory::default();
        history.push_undo("create", String::from("stateA"));
        history.push_undo("edit1", String::from("stateB"));
        history.undo(String::from("stateB_current"));

        history.push_undo("edit2", String::from("stateC"));
        assert_eq!(history.current(), 2);
        assert!(!history.can_redo());
        assert_eq!(labels(&history), ["create", "edit2"]);
        // The slot already held the state before the change.
        assert_eq!(history.get(1).map(|s| s.payload().as_str()), Some("stateB"));
        assert!(history.snapshots().all(|s| s.payload() != "stateB_current"));
    }

    #[test]
    fn undo_not_at_edge_keeps_current() {
        let mut history = UndoHistory::default();
        history.push_undo("a", "1");
        history.push_undo("b", "2");
        assert_eq!(history.undo("3"), Some(&"2"));
        assert_eq!(history.undo("ignored"), Some(&"1"));
        assert_eq!(history.len(), 3);
        assert!(history.undo("ignored").is_none());
        assert_eq!(history.redo(), Some(&"2"));
        assert_eq!(history.redo(), Some(&"3"));
        assert!(history.redo().is_none());
    }

    #[test]
    fn byte_accounting() {
        let mut history = UndoHistory::default();
        history.push_undo("a", "1234");
        assert_eq!(history.used_bytes(), 8);
        history.push_undo("b", "12");
        assert_eq!(history.used_bytes(), 12);
        history.undo("123");
        assert_eq!(history.used_bytes(), 18);
        history.undo("ignored");
        // Discards "12" and "123".
        history.push_undo("c", "ignored");
        assert_eq!(history.used_bytes(), 8);
        history.clear();
        assert_eq!(history.used_bytes(), 0);
    }

    #[test]
    fn overwrite_keeps_byte_count() {
        let mut history = UndoHistory::default();
        history.push_undo("a", "1");
        history.push_undo("b", "2");
        history.undo("3");
        history.undo("ignored");
        let used = history.used_bytes();
        history.save_into_current_slot("z", "a much longer payload");
        assert_eq!(history.used_bytes(), used);
        assert_eq!(history.label(0), "z");
        assert_eq!(history.redo(), Some(&"2"));
    }

    #[test]
    fn overwrite_keeps_record_time() {
        let mut history = UndoHistory::default();
        history.push_undo("a", "1");
        history.push_undo("b", "2");
        history.undo("3");
        #[cfg(feature = "chrono")]
        let recorded = history.get(1).map(Snapshot::created_at);
        history.save_into_current_slot("z", "4");
        assert_eq!(history.label(1), "z");
        assert_eq!(history.get(1).map(Snapshot::payload), Some(&"4"));
        #[cfg(feature = "chrono")]
        {
            assert_eq!(history.get(1).map(Snapshot::created_at), recorded);
            let stamps = history
                .snapshots()
                .map(Snapshot::created_at)
                .collect::<Vec<_>>();
            assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(history.time_travel(&chrono::Utc::now(), "5"), Some(&"3"));
        }
    }

    #[test]
    fn save_at_edge_appends() {
        let mut history = UndoHistory::default();
        history.save_into_current_slot("", "a");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), 0);
        assert!(!history.can_redo());
        assert_eq!(history.used_bytes(), 2);
    }

    #[test]
    fn evicts_down_to_two() {
        let mut history = UndoHistory::new(10);
        let payload = "x".repeat(64);
        for i in 0..5 {
            history.push_undo(format!("op{i}"), payload.clone());
            assert!(history.can_undo());
            assert!(history.len() <= 2);
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), 2);
        assert_eq!(labels(&history), ["op3", "op4"]);
        assert_eq!(history.used_bytes(), 256);
    }

    #[test]
    fn evicts_oldest_within_budget() {
        let mut history = UndoHistory::builder()
            .max_bytes(10)
            .footprint(Footprint::exact())
            .build();
        for payload in ["aa", "bb", "cc", "dd", "ee"] {
            history.push_undo(payload, payload);
        }
        // Four snapshots would be 8 bytes, five reach the budget.
        assert_eq!(history.len(), 4);
        assert_eq!(history.used_bytes(), 8);
        assert_eq!(history.label(0), "bb");
        assert_eq!(history.current(), 4);
    }

    #[test]
    fn set_max_bytes_evicts() {
        let mut history = UndoHistory::default();
        for payload in ["a", "b", "c", "d"] {
            history.push_undo(payload, payload);
        }
        assert_eq!(history.len(), 4);
        history.set_max_bytes(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), 2);
        assert_eq!(history.max_bytes(), 1);
    }

    #[test]
    fn set_max_bytes_keeps_cursor_snapshot() {
        let recorder = Recorder::default();
        let mut history = UndoHistory::builder().connect(recorder.slot()).build();
        for payload in ["a", "b", "c", "d", "e"] {
            history.push_undo(payload, payload);
        }
        assert_eq!(history.go_to(0, "live"), Some(&"a"));
        recorder.take();

        history.set_max_bytes(0);
        assert_eq!(history.len(), 6);
        assert_eq!(history.current(), 0);
        assert!(recorder.take().is_empty());
        assert_eq!(history.redo(), Some(&"b"));
        assert_eq!(history.redo(), Some(&"c"));

        // Only the snapshots behind the cursor can go.
        history.set_max_bytes(0);
        assert_eq!(history.len(), 4);
        assert_eq!(history.current(), 0);
        assert_eq!(labels(&history), ["c", "d", "e", ""]);
        assert!(!history.can_undo());
        assert_eq!(history.redo(), Some(&"d"));
        assert_eq!(history.redo(), Some(&"e"));
        assert_eq!(history.redo(), Some(&"live"));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn clamps_drifted_cursor() {
        let mut history = UndoHistory::default();
        history.push_undo("a", "1");
        history.cursor = 7;
        assert!(history.is_eof());
        assert!(history.is_next_eof());
        assert_eq!(history.undo("2"), Some(&"1"));
        assert_eq!(history.current(), 0);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn label_lookup() {
        let mut history = UndoHistory::default();
        history.push_undo("Cut", "a");
        history.push_undo("Paste", "b");
        assert_eq!(history.label(0), "Cut");
        assert_eq!(history.label(1), "Paste");
        assert_eq!(history.label(2), "");
        assert_eq!(history.label(usize::MAX), "");
    }

    #[test]
    fn saved_state() {
        let mut history = UndoHistory::builder().saved(false).build();
        history.push_undo("a", "1");
        history.set_saved(true);
        assert!(history.is_saved());
        history.push_undo("b", "2");
        assert!(!history.is_saved());
        history.undo("3");
        assert!(history.is_saved());
        history.undo("ignored");
        assert!(!history.is_saved());
        // The saved position lies in the discarded future.
        history.push_undo("c", "4");
        assert_eq!(history.current(), 1);
        assert!(!history.is_saved());
    }

    #[test]
    fn saved_state_shifts_on_eviction() {
        let mut history = UndoHistory::builder()
            .max_bytes(6)
            .footprint(Footprint::exact())
            .build();
        history.push_undo("a", "11");
        history.push_undo("b", "22");
        history.set_saved(true);
        history.push_undo("c", "33");
        // "11" was evicted, the saved position followed it down.
        assert_eq!(history.len(), 2);
        history.undo("44");
        assert!(history.is_saved());
        history.push_undo("d", "55");
        history.push_undo("e", "66");
        history.push_undo("f", "77");
        assert_eq!(history.saved, None);
    }

    #[test]
    fn signals() {
        let recorder = Recorder::default();
        let mut history = UndoHistory::builder()
            .saved(false)
            .connect(recorder.slot())
            .build();
        history.push_undo("a", "1");
        assert_eq!(recorder.take(), [Signal::Undo(true), Signal::Index(1)]);
        history.push_undo("b", "2");
        assert_eq!(recorder.take(), [Signal::Index(2)]);
        history.undo("3");
        assert_eq!(recorder.take(), [Signal::Redo(true), Signal::Index(1)]);
        history.redo();
        assert_eq!(recorder.take(), [Signal::Redo(false), Signal::Index(2)]);
        history.set_max_bytes(0);
        assert_eq!(recorder.take(), [Signal::Evicted(1), Signal::Index(1)]);
        history.clear();
        assert_eq!(recorder.take(), [Signal::Undo(false), Signal::Index(0)]);
    }

    #[test]
    fn go_to() {
        let mut history = UndoHistory::default();
        for payload in ["a", "b", "c", "d"] {
            history.push_undo(payload, payload);
        }
        assert_eq!(history.go_to(4, "e"), None);
        assert_eq!(history.go_to(1, "e"), Some(&"b"));
        assert_eq!(history.len(), 5);
        assert_eq!(history.go_to(1, "ignored"), None);
        assert_eq!(history.go_to(4, "ignored"), Some(&"e"));
        assert_eq!(history.go_to(5, "ignored"), None);
        assert_eq!(history.go_to(0, "ignored"), Some(&"a"));
        assert_eq!(history.len(), 5);
        assert_eq!(history.redo_label(), "a");
    }

    #[test]
    fn clear_keeps_usable() {
        let mut history = UndoHistory::default();
        history.push_undo("a", "1");
        history.push_undo("b", "2");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.current(), 0);
        assert!(!history.can_undo());
        history.push_undo("c", "3");
        assert_eq!(history.undo_label(), "c");
        assert_eq!(history.undo("4"), Some(&"3"));
    }

    #[test]
    fn clear_keeps_saved() {
        let mut history = UndoHistory::default();
        assert!(history.is_saved());
        history.push_undo("a", "1");
        history.set_saved(true);
        history.clear();
        assert!(history.is_saved());
    }
}
