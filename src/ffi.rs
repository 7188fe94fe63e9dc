//! C ABI over a byte queue with caller-owned storage.
//!
//! Every function returns one of the `TSQQ_*` status codes unless noted.
//! A handle may be shared between threads; only [`tsqq_free`] needs
//! exclusive access.

use std::ptr;
use std::time::Duration;

use libc::c_int;

use crate::trace::error;
use crate::Core::RawRingBuffer;
use crate::Structs::{QueueError, QueueStats};
use crate::TSafe::SyncQueue;

// Status codes
pub const TSQQ_OK: c_int = 0;
pub const TSQQ_WAS_FULL: c_int = 1;
pub const TSQQ_WAS_EMPTY: c_int = 2;
pub const TSQQ_NO_LOCK: c_int = 3;
pub const TSQQ_TIMED_OUT: c_int = 4;
pub const TSQQ_ERROR_NULL_POINTER: c_int = -1;

/// Handle to a thread-safe byte queue (opaque pointer)
pub struct TsqqHandle {
    inner: SyncQueue<RawRingBuffer<'static>>,
    elem_size: usize,
}

fn status(result: Result<(), QueueError>) -> c_int {
    match result {
        Ok(()) => TSQQ_OK,
        Err(QueueError::WasFull) => TSQQ_WAS_FULL,
        Err(QueueError::WasEmpty) => TSQQ_WAS_EMPTY,
        Err(QueueError::LockUnavailable) => TSQQ_NO_LOCK,
        Err(QueueError::TimedOut) => TSQQ_TIMED_OUT,
    }
}

// -----------------------------------------------------------------------------
// Lifecycle
// -----------------------------------------------------------------------------

/// Create a queue over `storage`.
///
/// # Arguments
/// * `storage` - Backing bytes, at least `max_elems * elem_size` long.
/// * `storage_len` - Length of `storage` in bytes.
/// * `max_elems` - Slot count; one slot stays reserved.
/// * `elem_size` - Byte width of every element.
///
/// # Returns
/// * Pointer to `TsqqHandle`, or NULL on failure.
///
/// # Safety
/// `storage` must be valid for reads and writes of `storage_len` bytes, and
/// neither accessed nor freed until after [`tsqq_free`] on the returned handle.
#[no_mangle]
pub unsafe extern "C" fn tsqq_new(
    storage: *mut u8,
    storage_len: usize,
    max_elems: u32,
    elem_size: usize,
) -> *mut TsqqHandle {
    if storage.is_null() {
        error!("tsqq_new: null storage");
        return ptr::null_mut();
    }
    let bytes: &'static mut [u8] = std::slice::from_raw_parts_mut(storage, storage_len);

    match RawRingBuffer::new(bytes, max_elems as usize, elem_size) {
        Ok(ring) => Box::into_raw(Box::new(TsqqHandle {
            inner: SyncQueue::new(ring),
            elem_size,
        })),
        Err(_err) => {
            error!(%_err, "tsqq_new: rejected queue layout");
            ptr::null_mut()
        }
    }
}

/// Free a queue handle. The storage passed to [`tsqq_new`] is not touched.
///
/// # Safety
/// `handle` must come from [`tsqq_new`], not be freed already, and not be in
/// use by any other thread.
#[no_mangle]
pub unsafe extern "C" fn tsqq_free(handle: *mut TsqqHandle) {
    if !handle.is_null() {
        let _ = Box::from_raw(handle); // Dropped automatically
    }
}

// -----------------------------------------------------------------------------
// Producer API
// -----------------------------------------------------------------------------

unsafe fn push(handle: *const TsqqHandle, src: *const u8, nonblocking: bool) -> c_int {
    if handle.is_null() || src.is_null() {
        return TSQQ_ERROR_NULL_POINTER;
    }
    let handle = &*handle;
    let elem = std::slice::from_raw_parts(src, handle.elem_size);
    if nonblocking {
        status(handle.inner.push_nonblocking(elem))
    } else {
        status(handle.inner.push_blocking(elem))
    }
}

/// Push one element, waiting for the lock.
///
/// # Safety
/// `handle` must be live; `src` must point to `elem_size` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tsqq_push(handle: *const TsqqHandle, src: *const u8) -> c_int {
    push(handle, src, false)
}

/// Push one element, returning `TSQQ_NO_LOCK` instead of waiting.
///
/// # Safety
/// Same as [`tsqq_push`].
#[no_mangle]
pub unsafe extern "C" fn tsqq_push_noblock(handle: *const TsqqHandle, src: *const u8) -> c_int {
    push(handle, src, true)
}

// -----------------------------------------------------------------------------
// Consumer API
// -----------------------------------------------------------------------------

enum PopWait {
    Lock,
    Nothing,
    Data(Option<Duration>),
}

unsafe fn pop(handle: *const TsqqHandle, dst: *mut u8, peek: bool, wait: PopWait) -> c_int {
    if handle.is_null() || dst.is_null() {
        return TSQQ_ERROR_NULL_POINTER;
    }
    let handle = &*handle;
    let dest = std::slice::from_raw_parts_mut(dst, handle.elem_size);
    let result = match wait {
        PopWait::Lock => handle.inner.pop_lockblocking(dest, peek),
        PopWait::Nothing => handle.inner.pop_nonblocking(dest, peek),
        PopWait::Data(None) => handle.inner.pop_condblocking(dest, peek),
        PopWait::Data(Some(timeout)) => handle.inner.pop_condblocking_timeout(dest, peek, timeout),
    };
    status(result)
}

/// Pop (or peek) one element, waiting for the lock but not for data.
///
/// # Safety
/// `handle` must be live; `dst` must point to `elem_size` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn tsqq_pop(handle: *const TsqqHandle, dst: *mut u8, peek: bool) -> c_int {
    pop(handle, dst, peek, PopWait::Lock)
}

/// Pop (or peek) one element without waiting for anything.
///
/// # Safety
/// Same as [`tsqq_pop`].
#[no_mangle]
pub unsafe extern "C" fn tsqq_pop_noblock(
    handle: *const TsqqHandle,
    dst: *mut u8,
    peek: bool,
) -> c_int {
    pop(handle, dst, peek, PopWait::Nothing)
}

/// Pop (or peek) one element, sleeping until the queue is non-empty.
///
/// # Safety
/// Same as [`tsqq_pop`].
#[no_mangle]
pub unsafe extern "C" fn tsqq_pop_block(
    handle: *const TsqqHandle,
    dst: *mut u8,
    peek: bool,
) -> c_int {
    pop(handle, dst, peek, PopWait::Data(None))
}

/// Like [`tsqq_pop_block`] but returns `TSQQ_TIMED_OUT` after `timeout_ms`.
///
/// # Safety
/// Same as [`tsqq_pop`].
#[no_mangle]
pub unsafe extern "C" fn tsqq_pop_timeout(
    handle: *const TsqqHandle,
    dst: *mut u8,
    peek: bool,
    timeout_ms: u64,
) -> c_int {
    pop(
        handle,
        dst,
        peek,
        PopWait::Data(Some(Duration::from_millis(timeout_ms))),
    )
}

// -----------------------------------------------------------------------------
// Queries
// -----------------------------------------------------------------------------

/// `TSQQ_WAS_FULL` if the queue is at usable capacity, `TSQQ_OK` otherwise.
///
/// # Safety
/// `handle` must be live.
#[no_mangle]
pub unsafe extern "C" fn tsqq_full(handle: *const TsqqHandle) -> c_int {
    match handle.as_ref() {
        None => TSQQ_ERROR_NULL_POINTER,
        Some(h) if h.inner.full() => TSQQ_WAS_FULL,
        Some(_) => TSQQ_OK,
    }
}

/// `TSQQ_WAS_EMPTY` if nothing is stored, `TSQQ_OK` otherwise.
///
/// # Safety
/// `handle` must be live.
#[no_mangle]
pub unsafe extern "C" fn tsqq_empty(handle: *const TsqqHandle) -> c_int {
    match handle.as_ref() {
        None => TSQQ_ERROR_NULL_POINTER,
        Some(h) if h.inner.empty() => TSQQ_WAS_EMPTY,
        Some(_) => TSQQ_OK,
    }
}

/// Stored element count; 0 for a NULL handle.
///
/// # Safety
/// `handle` must be live or NULL.
#[no_mangle]
pub unsafe extern "C" fn tsqq_size(handle: *const TsqqHandle) -> u32 {
    handle
        .as_ref()
        .map_or(0, |h| u32::try_from(h.inner.size()).unwrap_or(u32::MAX))
}

/// Write a cursor snapshot to `out`.
///
/// # Safety
/// `handle` must be live; `out` must be valid for a `QueueStats` write.
#[no_mangle]
pub unsafe extern "C" fn tsqq_stats(handle: *const TsqqHandle, out: *mut QueueStats) -> c_int {
    if handle.is_null() || out.is_null() {
        return TSQQ_ERROR_NULL_POINTER;
    }
    out.write((*handle).inner.stats());
    TSQQ_OK
}
