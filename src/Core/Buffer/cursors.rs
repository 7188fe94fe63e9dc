// Index arithmetic shared by the typed and byte-blob cores.

/// Write/read cursors over a ring of `capacity` slots.
///
/// `front` is where the next push writes, `rear` is where the next pop reads.
/// Both stay in `0..capacity`. One slot is always left unused so that
/// `front == rear` means empty and never full; at most `capacity - 1`
/// elements are stored at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursors {
    front: usize,
    rear: usize,
    capacity: usize,
}

impl Cursors {
    /// Cursors for an empty ring. Callers guarantee `capacity >= 2`.
    pub const fn new(capacity: usize) -> Self {
        Self {
            front: 0,
            rear: 0,
            capacity,
        }
    }

    #[inline]
    pub const fn front(&self) -> usize {
        self.front
    }

    #[inline]
    pub const fn rear(&self) -> usize {
        self.rear
    }

    /// Total slot count.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum number of elements storable at once.
    #[inline]
    pub const fn usable(&self) -> usize {
        self.capacity - 1
    }

    /// Number of stored elements, `(front - rear) mod capacity`.
    #[inline]
    pub const fn occupancy(&self) -> usize {
        if self.front >= self.rear {
            self.front - self.rear
        } else {
            self.front + self.capacity - self.rear
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.occupancy() == self.usable()
    }

    /// Step `front` past a slot that was just written.
    #[inline]
    pub(crate) fn advance_front(&mut self) {
        self.front = self.next(self.front);
    }

    /// Step `rear` past a slot that was just consumed.
    #[inline]
    pub(crate) fn advance_rear(&mut self) {
        self.rear = self.next(self.rear);
    }

    /// Forget every stored element.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.front = 0;
        self.rear = 0;
    }

    #[inline]
    const fn next(&self, index: usize) -> usize {
        if index + 1 == self.capacity {
            0
        } else {
            index + 1
        }
    }
}

impl From<Cursors> for crate::Structs::QueueStats {
    fn from(c: Cursors) -> Self {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        Self {
            capacity: clamp(c.capacity()),
            size: clamp(c.occupancy()),
            front: clamp(c.front()),
            rear: clamp(c.rear()),
        }
    }
}
