//! **Memory-budgeted linear undo-redo history of opaque state snapshots.**
//!
//! Instead of recording reversible commands, the [`UndoHistory`] stores whole
//! serialized copies of a document. Each [`Snapshot`] pairs a payload with the
//! label of the operation that moves forward from it, so a user interface can
//! render "Undo Cut" or "Redo Paste" without knowing anything about the
//! payload format.
//!
//! # Features
//!
//! * [`UndoHistory`] provides linear undo-redo with a single cursor.
//!   Pushing after an undo discards the old future.
//! * The history keeps an approximate byte count of its payloads and evicts
//!   the oldest snapshots once the budget is reached, but never below two.
//! * The byte count of a payload is decided by a [`Footprint`] policy.
//! * [`State`] lets a document capture and restore itself, so the history
//!   can drive it directly.
//! * The document can be marked as saved and the history tracks it.
//! * Changes are reported through a [`Slot`].
//! * Configurable display formatting is provided through [`Display`].
//! * Time stamps and time travel are provided when the `chrono` feature is enabled.
//! * Serialization of the history is provided when the `serde` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use snapshot_history::UndoHistory;
//!
//! let mut history = UndoHistory::default();
//! history.push_undo("Create", String::from("empty project"));
//! history.push_undo("Add clip", String::from("one clip"));
//! assert_eq!(history.undo_label(), "Add clip");
//!
//! let restored = history.undo(String::from("two clips")).unwrap();
//! assert_eq!(restored, "one clip");
//! assert!(history.can_redo());
//!
//! let restored = history.redo().unwrap();
//! assert_eq!(restored, "two clips");
//! assert!(!history.can_redo());
//! ```

#![doc(html_root_url = "https://docs.rs/snapshot-history")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod format;
pub mod history;
mod payload;
mod snapshot;
mod socket;
mod state;
mod store;

use format::Format;

pub use history::{Builder, Display, UndoHistory, DEFAULT_MAX_BYTES};
pub use payload::{Footprint, Payload};
pub use snapshot::Snapshot;
pub use socket::{Signal, Slot};
pub use state::State;
pub use store::SnapshotStore;
