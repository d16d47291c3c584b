use std::mem;
use std::rc::Rc;
use std::sync::Arc;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opaque serialized copy of a document.
///
/// The history never looks inside a payload. It only needs its length
/// to keep track of how much memory the stored snapshots use.
///
/// # Examples
/// ```
/// # use snapshot_history::Payload;
/// struct Compressed(Vec<u8>);
///
/// impl Payload for Compressed {
///     fn byte_len(&self) -> usize {
///         self.0.len()
///     }
/// }
/// ```
pub trait Payload {
    /// Returns the length of the payload in bytes.
    fn byte_len(&self) -> usize;
}

impl Payload for str {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl Payload for [u8] {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl Payload for String {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl Payload for Vec<u8> {
    fn byte_len(&self) -> usize {
        self.len()
    }
}

impl<T: Payload + ?Sized> Payload for &T {
    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }
}

impl<T: Payload + ?Sized> Payload for Box<T> {
    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }
}

impl<T: Payload + ?Sized> Payload for Rc<T> {
    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }
}

impl<T: Payload + ?Sized> Payload for Arc<T> {
    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }
}

/// Decides how many bytes a payload is accounted for.
///
/// The default accounts every payload at twice its length, a safety margin
/// over the raw payload size that leaves room for encoding overhead.
///
/// # Examples
/// ```
/// # use snapshot_history::Footprint;
/// assert_eq!(Footprint::default().of("abcd"), 8);
/// assert_eq!(Footprint::exact().of("abcd"), 4);
/// assert_eq!(Footprint::new(3).of("abcd"), 12);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Footprint {
    factor: usize,
}

impl Footprint {
    /// Safety margin applied by the default policy.
    pub const SAFETY_MARGIN: usize = 2;
    /// Width of one payload unit.
    pub const UNIT: usize = mem::size_of::<u8>();

    /// Returns a policy that accounts payloads at `factor` times their length.
    pub const fn new(factor: usize) -> Footprint {
        Footprint { factor }
    }

    /// Returns a policy that accounts payloads at their raw length.
    pub const fn exact() -> Footprint {
        Footprint::new(Footprint::UNIT)
    }

    /// Returns the multiplier of the policy.
    pub const fn factor(self) -> usize {
        self.factor
    }

    /// Returns the number of bytes `payload` is accounted for.
    pub fn of(self, payload: &(impl Payload + ?Sized)) -> usize {
        payload.byte_len().saturating_mul(self.factor)
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Footprint::new(Footprint::SAFETY_MARGIN * Footprint::UNIT)
    }
}
