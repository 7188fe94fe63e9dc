use std::mem::MaybeUninit;

use super::cursors::Cursors;
use super::Buffer::RingBuffer;
use crate::Core::ring::Ring;
use crate::Structs::QueueError;

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    const VALID_CAPACITY: () = assert!(N >= 2, "RingBuffer needs at least 2 slots");

    /// An empty ring. Usable in `const` and `static` initialisers.
    pub const fn new() -> Self {
        let () = Self::VALID_CAPACITY;
        Self {
            slots: [MaybeUninit::uninit(); N],
            cursors: Cursors::new(N),
        }
    }

    /// Append `value`, or return [`QueueError::WasFull`] leaving the ring untouched.
    pub fn push(&mut self, value: T) -> Result<(), QueueError> {
        if self.cursors.is_full() {
            return Err(QueueError::WasFull);
        }
        self.slots[self.cursors.front()] = MaybeUninit::new(value);
        self.cursors.advance_front();
        Ok(())
    }

    /// Remove and return the oldest value.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let value = self.peek()?;
        self.cursors.advance_rear();
        Ok(value)
    }

    /// Copy of the oldest value, left in place for a later pop.
    pub fn peek(&self) -> Result<T, QueueError> {
        if self.cursors.is_empty() {
            return Err(QueueError::WasEmpty);
        }
        // Safety: the ring is non-empty, so the slot at `rear` was written by
        // a push and has not been consumed since.
        Ok(unsafe { self.slots[self.cursors.rear()].assume_init() })
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Number of stored values.
    #[inline]
    pub fn size(&self) -> usize {
        self.cursors.occupancy()
    }

    /// Slot count `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most values storable at once, `N - 1`.
    #[inline]
    pub const fn usable_capacity(&self) -> usize {
        N - 1
    }

    /// Drop every stored value. `T: Copy`, so nothing needs destructing.
    pub fn clear(&mut self) {
        self.cursors.reset();
    }
}

impl<T: Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> Ring for RingBuffer<T, N> {
    type Elem = T;

    #[inline]
    fn push_from(&mut self, elem: &T) -> Result<(), QueueError> {
        self.push(*elem)
    }

    #[inline]
    fn pop_into(&mut self, dest: &mut T, peek: bool) -> Result<(), QueueError> {
        *dest = if peek { self.peek()? } else { self.pop()? };
        Ok(())
    }

    #[inline]
    fn cursors(&self) -> Cursors {
        self.cursors
    }
}
