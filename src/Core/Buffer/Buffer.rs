// This is the typed, inline-storage ring used as the primary queue core

use super::cursors::Cursors;
use std::mem::MaybeUninit;

/// A fixed-capacity FIFO of `Copy` values with inline storage.
///
/// `N` is the slot count. One slot is reserved to tell "empty" from "full",
/// so at most `N - 1` values are stored at once. `N < 2` fails to compile.
///
/// The storage lives inside the struct, so a queue placed in a `static`
/// needs no heap at all:
///
/// ```
/// use tsafeq::Core::RingBuffer;
/// use tsafeq::TSafe::SyncQueue;
///
/// static EVENTS: SyncQueue<RingBuffer<u32, 16>> = SyncQueue::new(RingBuffer::new());
///
/// EVENTS.push_blocking(&7).unwrap();
/// let mut out = 0;
/// EVENTS.pop_lockblocking(&mut out, false).unwrap();
/// assert_eq!(out, 7);
/// ```
///
/// ```compile_fail
/// // A single slot would be permanently "full".
/// let _ = tsafeq::RingBuffer::<u8, 1>::new();
/// ```
pub struct RingBuffer<T: Copy, const N: usize> {
    /// Slot `i` is initialised iff it lies in `rear..front` (mod `N`).
    pub(crate) slots: [MaybeUninit<T>; N],

    pub(crate) cursors: Cursors,
}
