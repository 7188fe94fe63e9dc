use super::Buffer::cursors::Cursors;
use crate::Structs::QueueError;

/// A single-threaded, fixed-capacity FIFO core.
///
/// Implementations never allocate and never block. They are not reentrant
/// and carry no synchronization of their own; [`crate::TSafe::SyncQueue`]
/// adds that on top.
pub trait Ring {
    /// What one slot holds: a sized value for typed cores, `[u8]` for byte cores.
    type Elem: ?Sized;

    /// Copy `elem` into the slot at `front`.
    ///
    /// Returns [`QueueError::WasFull`] without mutating anything when the ring
    /// already stores `capacity - 1` elements.
    fn push_from(&mut self, elem: &Self::Elem) -> Result<(), QueueError>;

    /// Copy the element at `rear` into `dest`, removing it unless `peek`.
    ///
    /// Returns [`QueueError::WasEmpty`] without touching `dest` when nothing
    /// is stored.
    fn pop_into(&mut self, dest: &mut Self::Elem, peek: bool) -> Result<(), QueueError>;

    fn cursors(&self) -> Cursors;

    #[inline]
    fn is_full(&self) -> bool {
        self.cursors().is_full()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.cursors().is_empty()
    }

    /// Number of stored elements.
    #[inline]
    fn size(&self) -> usize {
        self.cursors().occupancy()
    }

    /// Total slot count; one more than the usable capacity.
    #[inline]
    fn capacity(&self) -> usize {
        self.cursors().capacity()
    }
}
