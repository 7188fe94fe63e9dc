mod lock;
mod queue;

pub use queue::SyncQueue;
