//! Object identity for Horizon Rating.
//!
//! Controls and other long-lived components carry a process-unique
//! [`ObjectId`] so that log output and debugging tools can correlate events
//! with the instance that produced them. There is no registry and no
//! parent/child ownership tree: identity is the whole contract.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh object identifiers.
static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique identifier for a component instance.
///
/// Identifiers are allocated from a monotonically increasing counter and are
/// never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate the next unique identifier.
    pub fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value, for log formatting.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Base trait for identifiable components.
pub trait Object {
    /// Get this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}
