pub mod StructDebug;

use std::fmt;

use crate::Core::ring::Ring;
use crate::Core::{RawRingBuffer, RingBuffer};
use crate::TSafe::SyncQueue;

// Debug proxy implementations that call the standalone debug functions
impl<T: Copy, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        StructDebug::debug_ring_buffer(self, f)
    }
}

impl fmt::Debug for RawRingBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        StructDebug::debug_raw_ring_buffer(self, f)
    }
}

impl<R: Ring + fmt::Debug> fmt::Debug for SyncQueue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        StructDebug::debug_sync_queue(self, f)
    }
}
