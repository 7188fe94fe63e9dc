// Module naming follows project convention (TSafe = thread-safe wrapper layer)
#[allow(non_snake_case)]
pub mod Core;
#[allow(non_snake_case)]
pub mod Structs;
#[allow(non_snake_case)]
pub mod TSafe;
#[allow(non_snake_case)]
pub mod Debug;

pub mod ffi;
pub mod trace;

pub use Core::{RawRingBuffer, RawRingBuilder, Ring, RingBuffer};
pub use Structs::{LayoutError, QueueError, QueueStats};
pub use TSafe::SyncQueue;
