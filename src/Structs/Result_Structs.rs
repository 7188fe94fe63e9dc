// Result vocabulary shared by the single-threaded cores and the locked wrapper.

use thiserror::Error;

/// Why a queue operation did not complete.
///
/// Every variant is an expected, local outcome: nothing was mutated and the
/// caller decides whether to retry, fall back to a blocking variant, or drop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// Push rejected; the queue already holds its usable capacity.
    #[error("queue is full")]
    WasFull,
    /// Pop rejected; no element is stored.
    #[error("queue is empty")]
    WasEmpty,
    /// A non-blocking variant could not take the lock at this instant.
    #[error("queue lock is held by another context")]
    LockUnavailable,
    /// A timed condition-blocking pop reached its deadline with nothing to pop.
    #[error("timed out waiting for data")]
    TimedOut,
}

impl QueueError {
    /// True for outcomes that may clear up on their own without caller action
    /// (contention or a transient full/empty state).
    pub fn is_transient(&self) -> bool {
        !matches!(self, QueueError::TimedOut)
    }
}

/// Rejected byte-queue geometry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// One slot is always reserved, so fewer than two slots stores nothing.
    #[error("capacity {capacity} leaves no usable slot (need at least 2)")]
    CapacityTooSmall { capacity: usize },
    /// Elements must have a non-zero byte width.
    #[error("element size must be greater than zero")]
    ZeroElementSize,
    /// `capacity * element_size` does not fit in `usize`.
    #[error("capacity {capacity} x element size {element_size} overflows")]
    SizeOverflow { capacity: usize, element_size: usize },
    /// The backing storage is shorter than `capacity * element_size`.
    #[error("storage too small ({actual} < {required} bytes)")]
    StorageTooSmall { required: usize, actual: usize },
}
