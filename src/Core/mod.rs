#[allow(non_snake_case)]
pub mod Buffer {
    pub mod Buffer;
    pub mod Buffer_impl;
    pub mod cursors;
    pub use Buffer::RingBuffer; // re-export for stable path
    pub use cursors::Cursors;
}

pub mod builder;
pub mod raw;
pub mod ring;

pub use builder::RawRingBuilder;
pub use raw::RawRingBuffer;
pub use ring::Ring;
pub use Buffer::{Cursors, RingBuffer};
