// In src/TSafe/queue.rs
use std::time::{Duration, Instant};

use crossbeam_utils::CachePadded;
use parking_lot::{const_mutex, Condvar, Mutex};

use super::lock::Acquire;
use crate::Core::ring::Ring;
use crate::Structs::{QueueError, QueueStats};
use crate::trace::{debug, trace};

/// A thread-safe wrapper around one [`Ring`] core.
///
/// Every core access happens under a single mutex, held only for the
/// duration of one operation. A condition variable signalled after each push
/// lets [`pop_condblocking`](Self::pop_condblocking) sleep until data arrives.
///
/// The variants differ only in what they wait for:
///
/// | operation           | waits for lock | waits for data |
/// |---------------------|----------------|----------------|
/// | `push_blocking`     | yes            | -              |
/// | `push_nonblocking`  | no             | -              |
/// | `pop_lockblocking`  | yes            | no             |
/// | `pop_nonblocking`   | no             | no             |
/// | `pop_condblocking`  | yes            | yes            |
///
/// Elements leave in the order they were pushed. Which of several waiting
/// producers or consumers goes next is up to `parking_lot`.
pub struct SyncQueue<R> {
    pub(crate) ring: CachePadded<Mutex<R>>,

    /// Signalled after every push that reached the core.
    pub(crate) nonempty: Condvar,
}

impl<R> SyncQueue<R> {
    /// Take ownership of `ring`. Usable in `static` initialisers.
    pub const fn new(ring: R) -> Self {
        Self {
            ring: CachePadded::new(const_mutex(ring)),
            nonempty: Condvar::new(),
        }
    }

    /// Direct access to the core; exclusive borrow means no lock is needed.
    pub fn get_mut(&mut self) -> &mut R {
        self.ring.get_mut()
    }

    pub fn into_inner(self) -> R {
        CachePadded::into_inner(self.ring).into_inner()
    }
}

impl<R: Ring> SyncQueue<R> {
    /// Push, waiting for the lock if it is held.
    ///
    /// Never fails because of contention; returns [`QueueError::WasFull`]
    /// if the queue had no free slot.
    pub fn push_blocking(&self, elem: &R::Elem) -> Result<(), QueueError> {
        self.push_with(Acquire::Block, elem)
    }

    /// Push only if the lock is free right now, otherwise
    /// [`QueueError::LockUnavailable`] without touching the queue.
    pub fn push_nonblocking(&self, elem: &R::Elem) -> Result<(), QueueError> {
        self.push_with(Acquire::Try, elem)
    }

    /// Pop (or peek) into `dest`, waiting for the lock but not for data.
    ///
    /// Returns [`QueueError::WasEmpty`] straight away on an empty queue.
    pub fn pop_lockblocking(&self, dest: &mut R::Elem, peek: bool) -> Result<(), QueueError> {
        self.pop_with(Acquire::Block, dest, peek)
    }

    /// Pop (or peek) into `dest` only if the lock is free right now.
    pub fn pop_nonblocking(&self, dest: &mut R::Elem, peek: bool) -> Result<(), QueueError> {
        self.pop_with(Acquire::Try, dest, peek)
    }

    /// Pop (or peek) into `dest`, sleeping until an element is available.
    ///
    /// Never reports [`QueueError::WasEmpty`]; emptiness is re-checked after
    /// every wakeup, so spurious wakeups go back to sleep.
    pub fn pop_condblocking(&self, dest: &mut R::Elem, peek: bool) -> Result<(), QueueError> {
        let result = {
            let mut ring = self.ring.lock();
            while ring.is_empty() {
                trace!("waiting for data");
                self.nonempty.wait(&mut ring);
            }
            ring.pop_into(dest, peek)
        };
        if peek {
            // The element is still there; pass the wakeup on.
            self.nonempty.notify_one();
        }
        result
    }

    /// Like [`pop_condblocking`](Self::pop_condblocking) but gives up with
    /// [`QueueError::TimedOut`] once `timeout` has elapsed on an empty queue.
    pub fn pop_condblocking_timeout(
        &self,
        dest: &mut R::Elem,
        peek: bool,
        timeout: Duration,
    ) -> Result<(), QueueError> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.pop_condblocking(dest, peek);
        };
        let result = {
            let mut ring = self.ring.lock();
            while ring.is_empty() {
                if self.nonempty.wait_until(&mut ring, deadline).timed_out() && ring.is_empty() {
                    debug!(?timeout, "timed out waiting for data");
                    return Err(QueueError::TimedOut);
                }
            }
            ring.pop_into(dest, peek)
        };
        if peek {
            self.nonempty.notify_one();
        }
        result
    }

    /// Whether the queue held its usable capacity when the lock was taken.
    pub fn full(&self) -> bool {
        self.ring.lock().is_full()
    }

    pub fn empty(&self) -> bool {
        self.ring.lock().is_empty()
    }

    /// Stored element count as of the moment the lock was held.
    pub fn size(&self) -> usize {
        self.ring.lock().size()
    }

    /// Cursor snapshot taken under one lock acquisition.
    pub fn stats(&self) -> QueueStats {
        QueueStats::from(self.ring.lock().cursors())
    }

    /// Run `f` on the core under the lock, for multi-step updates that must
    /// appear atomic to other threads. Waiters are woken afterwards since `f`
    /// may have pushed.
    pub fn with_ring<U>(&self, f: impl FnOnce(&mut R) -> U) -> U {
        let out = {
            let mut ring = self.ring.lock();
            f(&mut ring)
        };
        self.nonempty.notify_all();
        out
    }

    fn push_with(&self, acquire: Acquire, elem: &R::Elem) -> Result<(), QueueError> {
        let result = {
            let mut ring = acquire.lock(&*self.ring)?;
            ring.push_from(elem)
        };
        // Signal with the lock released.
        self.nonempty.notify_one();
        if result.is_err() {
            debug!("push rejected: queue full");
        }
        result
    }

    fn pop_with(&self, acquire: Acquire, dest: &mut R::Elem, peek: bool) -> Result<(), QueueError> {
        let mut ring = acquire.lock(&*self.ring)?;
        ring.pop_into(dest, peek)
    }
}
