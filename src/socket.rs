//! Change notifications for menus and status bars that mirror the history.

use core::mem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{Sender, SyncSender};

/// An optional slot. Signals are built lazily and dropped when nothing is connected.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket(None)
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: impl FnOnce() -> Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal());
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: impl FnOnce() -> Signal) {
        if cond {
            self.emit(signal);
        }
    }
}

/// A change to the history that a user interface may want to mirror.
///
/// The history compares its state before and after every call and only
/// emits what actually changed, in the order `Undo`, `Redo`, `Saved`,
/// `Index`. `Evicted` is emitted first, by the eviction pass itself.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// The "Undo" menu item should be enabled or disabled.
    Undo(bool),
    /// The "Redo" menu item should be enabled or disabled.
    Redo(bool),
    /// The document became saved, or stopped matching the saved snapshot.
    Saved(bool),
    /// The cursor moved to a new position.
    Index(usize),
    /// This many of the oldest snapshots were dropped to get under the
    /// memory budget. Undo can no longer reach them.
    Evicted(usize),
}

/// Receives the signals of a history.
///
/// Closures, `()` and both kinds of `mpsc` senders are slots. A sender
/// lets a history owned by a worker thread drive menus on the UI thread.
/// Send errors are ignored, a dropped receiver just stops the updates.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use snapshot_history::{Signal, UndoHistory};
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut history = UndoHistory::builder().connect(sender).build();
///
/// history.push_undo("Trim", String::from("a"));
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Saved(false)));
/// assert_eq!(iter.next(), Some(Signal::Index(1)));
/// assert_eq!(iter.next(), None);
///
/// history.undo(String::from("b"));
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), Some(Signal::Saved(true)));
/// assert_eq!(iter.next(), Some(Signal::Index(0)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Called once for every signal, right after the change it describes.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
