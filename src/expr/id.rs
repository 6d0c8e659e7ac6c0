//! Leaf identity generation
//!
//! Variables and parameters draw process-unique ids from an atomic counter.
//! The default path uses a process-global allocator; tests that need
//! deterministic ids construct their own [`IdAllocator`] and pass it in.

use std::sync::atomic::{AtomicU64, Ordering};

/// Baseline for the process-global id sequence
const ID_BASELINE: u64 = 1;

/// Global allocator backing [`next_leaf_id`]
static GLOBAL_IDS: IdAllocator = IdAllocator::new(ID_BASELINE);

/// Unique identifier for a variable or parameter
///
/// Ids are strictly increasing in allocation order and never reused within
/// a process lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u64);

impl VarId {
    /// Get the raw id value
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Create from a raw value (for testing/serialization only)
    #[inline]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocator handing out strictly increasing [`VarId`]s
///
/// Thread safe; concurrent allocations never collide.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator whose first id is `baseline`
    pub const fn new(baseline: u64) -> Self {
        Self {
            next: AtomicU64::new(baseline),
        }
    }

    /// Allocate the next id
    #[inline]
    pub fn next_id(&self) -> VarId {
        VarId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(ID_BASELINE)
    }
}

/// Allocate the next id from the process-global sequence
#[inline]
pub fn next_leaf_id() -> VarId {
    GLOBAL_IDS.next_id()
}
