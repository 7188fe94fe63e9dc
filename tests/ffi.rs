use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

use tsafeq::ffi::*;
use tsafeq::QueueStats;

fn word(v: u64) -> [u8; 8] {
    v.to_ne_bytes()
}

#[test]
fn c_api_round_trip() {
    let mut storage = vec![0u8; 4 * 8];
    let h = unsafe { tsqq_new(storage.as_mut_ptr(), storage.len(), 4, 8) };
    assert!(!h.is_null());

    let mut out = [0u8; 8];
    unsafe {
        assert_eq!(tsqq_empty(h), TSQQ_WAS_EMPTY);
        assert_eq!(tsqq_pop(h, out.as_mut_ptr(), false), TSQQ_WAS_EMPTY);
        assert_eq!(tsqq_pop_noblock(h, out.as_mut_ptr(), false), TSQQ_WAS_EMPTY);

        assert_eq!(tsqq_push(h, word(10).as_ptr()), TSQQ_OK);
        assert_eq!(tsqq_push_noblock(h, word(20).as_ptr()), TSQQ_OK);
        assert_eq!(tsqq_push(h, word(30).as_ptr()), TSQQ_OK);
        assert_eq!(tsqq_full(h), TSQQ_WAS_FULL);
        assert_eq!(tsqq_push(h, word(40).as_ptr()), TSQQ_WAS_FULL);
        assert_eq!(tsqq_size(h), 3);

        assert_eq!(tsqq_pop(h, out.as_mut_ptr(), true), TSQQ_OK);
        assert_eq!(out, word(10));
        assert_eq!(tsqq_size(h), 3);

        assert_eq!(tsqq_pop_block(h, out.as_mut_ptr(), false), TSQQ_OK);
        assert_eq!(out, word(10));
        assert_eq!(tsqq_pop_noblock(h, out.as_mut_ptr(), false), TSQQ_OK);
        assert_eq!(out, word(20));
        assert_eq!(tsqq_full(h), TSQQ_OK);
        assert_eq!(tsqq_empty(h), TSQQ_OK);

        let mut stats = QueueStats::default();
        assert_eq!(tsqq_stats(h, &mut stats), TSQQ_OK);
        assert_eq!(
            stats,
            QueueStats {
                capacity: 4,
                size: 1,
                front: 3,
                rear: 2
            }
        );

        assert_eq!(tsqq_pop_timeout(h, out.as_mut_ptr(), false, 5), TSQQ_OK);
        assert_eq!(out, word(30));
        assert_eq!(tsqq_pop_timeout(h, out.as_mut_ptr(), false, 5), TSQQ_TIMED_OUT);

        tsqq_free(h);
    }
}

#[test]
fn c_api_rejects_bad_arguments() {
    let mut storage = vec![0u8; 16];
    unsafe {
        assert!(tsqq_new(ptr::null_mut(), 16, 4, 4).is_null());
        assert!(tsqq_new(storage.as_mut_ptr(), storage.len(), 1, 4).is_null());
        assert!(tsqq_new(storage.as_mut_ptr(), storage.len(), 4, 8).is_null());
        assert!(tsqq_new(storage.as_mut_ptr(), storage.len(), 4, 0).is_null());

        let mut out = [0u8; 4];
        assert_eq!(tsqq_push(ptr::null(), out.as_ptr()), TSQQ_ERROR_NULL_POINTER);
        assert_eq!(tsqq_pop(ptr::null(), out.as_mut_ptr(), false), TSQQ_ERROR_NULL_POINTER);
        assert_eq!(tsqq_full(ptr::null()), TSQQ_ERROR_NULL_POINTER);
        assert_eq!(tsqq_empty(ptr::null()), TSQQ_ERROR_NULL_POINTER);
        assert_eq!(tsqq_size(ptr::null()), 0);
        assert_eq!(tsqq_stats(ptr::null(), ptr::null_mut()), TSQQ_ERROR_NULL_POINTER);

        let h = tsqq_new(storage.as_mut_ptr(), storage.len(), 4, 4);
        assert!(!h.is_null());
        assert_eq!(tsqq_push(h, ptr::null()), TSQQ_ERROR_NULL_POINTER);
        assert_eq!(tsqq_pop_block(h, ptr::null_mut(), false), TSQQ_ERROR_NULL_POINTER);
        tsqq_free(h);
        tsqq_free(ptr::null_mut());
    }
}

struct SharedHandle(*mut TsqqHandle);
unsafe impl Send for SharedHandle {}
unsafe impl Sync for SharedHandle {}

impl SharedHandle {
    fn get(&self) -> *mut TsqqHandle {
        self.0
    }
}

#[test]
fn c_api_shared_between_threads() {
    let mut storage = vec![0u8; 16 * 8];
    let h = SharedHandle(unsafe { tsqq_new(storage.as_mut_ptr(), storage.len(), 16, 8) });
    assert!(!h.get().is_null());
    let received = AtomicUsize::new(0);

    std::thread::scope(|s| {
        s.spawn(|| {
            for v in 0..500u64 {
                while unsafe { tsqq_push(h.get(), word(v).as_ptr()) } == TSQQ_WAS_FULL {
                    std::thread::yield_now();
                }
            }
        });
        s.spawn(|| {
            let mut out = [0u8; 8];
            for v in 0..500u64 {
                assert_eq!(unsafe { tsqq_pop_block(h.get(), out.as_mut_ptr(), false) }, TSQQ_OK);
                assert_eq!(u64::from_ne_bytes(out), v);
                received.fetch_add(1, Ordering::Relaxed);
            }
        });
    });

    assert_eq!(received.load(Ordering::Relaxed), 500);
    unsafe { tsqq_free(h.get()) };
}
