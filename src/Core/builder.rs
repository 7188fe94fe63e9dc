use super::raw::{required_bytes, RawRingBuffer};
use crate::Structs::LayoutError;
use crate::trace::debug;

/// Configures the geometry of a [`RawRingBuffer`].
#[derive(Clone, Copy, Debug)]
pub struct RawRingBuilder {
    capacity: usize,
    element_size: usize,
}

impl Default for RawRingBuilder {
    fn default() -> Self {
        Self {
            capacity: 64,    // 63 usable slots
            element_size: 0, // must be set
        }
    }
}

impl RawRingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total slot count; one slot stays reserved.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_element_size(mut self, element_size: usize) -> Self {
        self.element_size = element_size;
        self
    }

    /// Size slots to hold one `T`.
    pub fn for_type<T: Copy>(self) -> Self {
        self.with_element_size(std::mem::size_of::<T>())
    }

    /// Bytes of backing storage [`build`](Self::build) will need.
    pub fn required_bytes(&self) -> Result<usize, LayoutError> {
        required_bytes(self.capacity, self.element_size)
    }

    pub fn build(self, storage: &mut [u8]) -> Result<RawRingBuffer<'_>, LayoutError> {
        debug!(
            capacity = self.capacity,
            element_size = self.element_size,
            storage = storage.len(),
            "binding byte ring"
        );
        RawRingBuffer::new(storage, self.capacity, self.element_size)
    }
}
