use std::fmt;

use crate::Core::ring::Ring;
use crate::Core::{RawRingBuffer, RingBuffer};
use crate::TSafe::SyncQueue;

// Element bytes are never printed: slots outside `rear..front` may be
// uninitialised, and contents are opaque to the queue anyway.

/// Debug function for RingBuffer
///
/// Shows geometry and cursors only.
pub fn debug_ring_buffer<T: Copy, const N: usize>(
    buffer: &RingBuffer<T, N>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_struct("RingBuffer")
        .field("elem", &std::any::type_name::<T>())
        .field("capacity", &N)
        .field("size", &buffer.size())
        .field("front", &buffer.cursors.front())
        .field("rear", &buffer.cursors.rear())
        .finish_non_exhaustive()
}

/// Debug function for RawRingBuffer
///
/// Shows geometry, cursors and the storage address.
pub fn debug_raw_ring_buffer(buffer: &RawRingBuffer<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RawRingBuffer")
        .field("storage", &format_args!("{:p}", buffer.storage.as_ptr()))
        .field("element_size", &buffer.element_size)
        .field("capacity", &buffer.cursors.capacity())
        .field("size", &buffer.cursors.occupancy())
        .field("front", &buffer.cursors.front())
        .field("rear", &buffer.cursors.rear())
        .finish()
}

/// Debug function for SyncQueue
///
/// Never blocks: prints `<locked>` if another context holds the lock.
pub fn debug_sync_queue<R: Ring + fmt::Debug>(
    queue: &SyncQueue<R>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut d = f.debug_struct("SyncQueue");
    match queue.ring.try_lock() {
        Some(ring) => d.field("ring", &*ring),
        None => d.field("ring", &format_args!("<locked>")),
    };
    d.finish_non_exhaustive()
}
