// Snapshot of a queue's cursors, shared with C callers.

/// Point-in-time view of a queue, read under a single lock acquisition.
/// ABI-stable; all fields are native-endian `u32`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Total slot count (one more than the usable capacity).
    pub capacity: u32,
    /// Number of stored elements.
    pub size: u32,
    /// Slot index the next push writes to.
    pub front: u32,
    /// Slot index the next pop reads from.
    pub rear: u32,
}
