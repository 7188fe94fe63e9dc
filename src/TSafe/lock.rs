use parking_lot::{Mutex, MutexGuard};

use crate::Structs::QueueError;
use crate::trace::trace;

/// How a wrapper operation takes the queue lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Acquire {
    /// Wait until the lock is free.
    Block,
    /// Fail with [`QueueError::LockUnavailable`] if it is held.
    Try,
}

impl Acquire {
    #[inline]
    pub(crate) fn lock<R>(self, mutex: &Mutex<R>) -> Result<MutexGuard<'_, R>, QueueError> {
        match self {
            Acquire::Block => Ok(mutex.lock()),
            Acquire::Try => mutex.try_lock().ok_or_else(|| {
                trace!("queue lock contended");
                QueueError::LockUnavailable
            }),
        }
    }
}
