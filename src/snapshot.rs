#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::fmt::{self, Display, Formatter};
use core::mem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One saved state of the document.
///
/// The label names the operation that moves forward from this snapshot
/// to the next one. It is empty when no such operation is known yet.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Snapshot<P> {
    label: String,
    payload: P,
    #[cfg(feature = "chrono")]
    created_at: DateTime<Utc>,
}

impl<P> Snapshot<P> {
    /// Returns a new snapshot.
    pub fn new(label: impl Into<String>, payload: P) -> Snapshot<P> {
        Snapshot {
            label: label.into(),
            payload,
            #[cfg(feature = "chrono")]
            created_at: Utc::now(),
        }
    }

    /// Returns the label of the operation leading away from this snapshot.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label, keeping the payload.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Returns the payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Replaces the payload and returns the old one, keeping the label.
    pub fn set_payload(&mut self, payload: P) -> P {
        mem::replace(&mut self.payload, payload)
    }

    /// Consumes the snapshot and returns its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Returns when the snapshot was recorded.
    #[cfg(feature = "chrono")]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl<P> Display for Snapshot<P> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.label)
    }
}
