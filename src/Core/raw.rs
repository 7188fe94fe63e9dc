// Byte-blob ring over caller-owned storage, for element types only known at runtime

use super::Buffer::cursors::Cursors;
use super::ring::Ring;
use crate::Structs::{LayoutError, QueueError};
use crate::trace::error;

/// A fixed-capacity FIFO of opaque, fixed-width byte records.
///
/// The ring never interprets element contents and never allocates: every
/// slot is `element_size` bytes inside the caller's `storage`. Prefer
/// [`RingBuffer`](super::RingBuffer) when the element type is known at
/// compile time.
pub struct RawRingBuffer<'a> {
    pub(crate) storage: &'a mut [u8],
    pub(crate) element_size: usize,
    pub(crate) cursors: Cursors,
}

impl<'a> RawRingBuffer<'a> {
    /// Bind `storage` as `capacity` slots of `element_size` bytes each.
    ///
    /// Bytes past `capacity * element_size` are left unused.
    pub fn new(
        storage: &'a mut [u8],
        capacity: usize,
        element_size: usize,
    ) -> Result<Self, LayoutError> {
        let required = required_bytes(capacity, element_size)?;
        if storage.len() < required {
            error!(required, actual = storage.len(), "backing storage too small");
            return Err(LayoutError::StorageTooSmall {
                required,
                actual: storage.len(),
            });
        }
        Ok(Self {
            storage: &mut storage[..required],
            element_size,
            cursors: Cursors::new(capacity),
        })
    }

    /// Byte width of one element.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Most elements storable at once, `capacity - 1`.
    #[inline]
    pub fn usable_capacity(&self) -> usize {
        self.cursors.usable()
    }

    pub fn clear(&mut self) {
        self.cursors.reset();
    }

    #[inline]
    fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.element_size;
        &self.storage[start..start + self.element_size]
    }

    #[inline]
    fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.element_size;
        &mut self.storage[start..start + self.element_size]
    }

    #[inline]
    fn check_width(&self, len: usize) {
        assert_eq!(
            len, self.element_size,
            "element is {} bytes but the queue was configured for {}",
            len, self.element_size
        );
    }
}

impl Ring for RawRingBuffer<'_> {
    type Elem = [u8];

    /// # Panics
    /// If `elem.len()` differs from the configured element size.
    fn push_from(&mut self, elem: &[u8]) -> Result<(), QueueError> {
        self.check_width(elem.len());
        if self.cursors.is_full() {
            return Err(QueueError::WasFull);
        }
        let front = self.cursors.front();
        self.slot_mut(front).copy_from_slice(elem);
        self.cursors.advance_front();
        Ok(())
    }

    /// # Panics
    /// If `dest.len()` differs from the configured element size.
    fn pop_into(&mut self, dest: &mut [u8], peek: bool) -> Result<(), QueueError> {
        self.check_width(dest.len());
        if self.cursors.is_empty() {
            return Err(QueueError::WasEmpty);
        }
        dest.copy_from_slice(self.slot(self.cursors.rear()));
        if !peek {
            self.cursors.advance_rear();
        }
        Ok(())
    }

    #[inline]
    fn cursors(&self) -> Cursors {
        self.cursors
    }
}

/// Storage bytes needed for `capacity` slots of `element_size` bytes.
pub(crate) fn required_bytes(capacity: usize, element_size: usize) -> Result<usize, LayoutError> {
    if capacity < 2 {
        error!(capacity, "rejecting ring with no usable slot");
        return Err(LayoutError::CapacityTooSmall { capacity });
    }
    if element_size == 0 {
        error!("rejecting zero-width elements");
        return Err(LayoutError::ZeroElementSize);
    }
    capacity
        .checked_mul(element_size)
        .ok_or(LayoutError::SizeOverflow {
            capacity,
            element_size,
        })
}
