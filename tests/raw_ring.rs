use std::thread;

use tsafeq::{LayoutError, QueueError, RawRingBuffer, RawRingBuilder, Ring, SyncQueue};

#[allow(dead_code)]
#[derive(Clone, Copy)]
#[repr(C)]
struct Record {
    x: u32,
    y: u64,
    z: u8,
}

fn word(v: u64) -> [u8; 8] {
    v.to_le_bytes()
}

#[test]
fn builder_binds_type_width() {
    let builder = RawRingBuilder::new()
        .with_capacity(50)
        .for_type::<Record>();
    assert_eq!(
        builder.required_bytes(),
        Ok(50 * std::mem::size_of::<Record>())
    );

    let mut storage = vec![0u8; builder.required_bytes().unwrap()];
    let ring = builder.build(&mut storage).unwrap();
    assert_eq!(ring.element_size(), std::mem::size_of::<Record>());
    assert_eq!(ring.capacity(), 50);
    assert_eq!(ring.usable_capacity(), 49);
    assert!(ring.is_empty());
}

#[test]
fn rejects_bad_geometry() {
    let mut storage = vec![0u8; 64];

    assert_eq!(
        RawRingBuffer::new(&mut storage, 1, 8).unwrap_err(),
        LayoutError::CapacityTooSmall { capacity: 1 }
    );
    assert_eq!(
        RawRingBuffer::new(&mut storage, 0, 8).unwrap_err(),
        LayoutError::CapacityTooSmall { capacity: 0 }
    );
    assert_eq!(
        RawRingBuffer::new(&mut storage, 4, 0).unwrap_err(),
        LayoutError::ZeroElementSize
    );
    assert_eq!(
        RawRingBuffer::new(&mut storage, 9, 8).unwrap_err(),
        LayoutError::StorageTooSmall {
            required: 72,
            actual: 64
        }
    );
    assert!(matches!(
        RawRingBuilder::new()
            .with_capacity(usize::MAX)
            .with_element_size(2)
            .required_bytes(),
        Err(LayoutError::SizeOverflow { .. })
    ));
    // Element size must be set explicitly
    assert_eq!(
        RawRingBuilder::new().build(&mut storage).unwrap_err(),
        LayoutError::ZeroElementSize
    );
}

#[test]
fn fifo_peek_and_capacity() {
    let mut storage = vec![0u8; 4 * 8];
    let mut ring = RawRingBuffer::new(&mut storage, 4, 8).unwrap();
    let mut out = [0u8; 8];

    assert_eq!(ring.pop_into(&mut out, false), Err(QueueError::WasEmpty));

    for v in 1..=3 {
        ring.push_from(&word(v)).unwrap();
    }
    assert!(ring.is_full());
    assert_eq!(ring.push_from(&word(4)), Err(QueueError::WasFull));
    assert_eq!(ring.size(), 3);

    ring.pop_into(&mut out, true).unwrap();
    assert_eq!(out, word(1));
    ring.pop_into(&mut out, true).unwrap();
    assert_eq!(out, word(1));
    assert_eq!(ring.size(), 3);

    for v in 1..=3 {
        ring.pop_into(&mut out, false).unwrap();
        assert_eq!(out, word(v));
    }
    assert!(ring.is_empty());
}

#[test]
fn wraps_and_leaves_spare_storage_untouched() {
    let mut storage = vec![0xAAu8; 3 * 4 + 5];
    {
        let mut ring = RawRingBuffer::new(&mut storage, 3, 4).unwrap();
        let mut out = [0u8; 4];
        for v in 0..10u32 {
            ring.push_from(&v.to_le_bytes()).unwrap();
            assert_eq!(ring.size(), 1);
            ring.pop_into(&mut out, false).unwrap();
            assert_eq!(u32::from_le_bytes(out), v);
            assert_eq!(ring.size(), 0);
        }
        println!("{:?}", ring);
    }
    assert!(storage[12..].iter().all(|&b| b == 0xAA));
}

#[test]
#[should_panic(expected = "element is 4 bytes")]
fn width_mismatch_is_a_contract_violation() {
    let mut storage = vec![0u8; 32];
    let mut ring = RawRingBuffer::new(&mut storage, 4, 8).unwrap();
    let _ = ring.push_from(&[1, 2, 3, 4]);
}

#[test]
fn synchronized_byte_queue() {
    let mut storage = vec![0u8; 8 * 8];
    let q = SyncQueue::new(RawRingBuffer::new(&mut storage, 8, 8).unwrap());

    thread::scope(|s| {
        s.spawn(|| {
            for v in 0..300u64 {
                while q.push_blocking(&word(v)) == Err(QueueError::WasFull) {
                    thread::yield_now();
                }
            }
        });

        s.spawn(|| {
            let mut out = [0u8; 8];
            for v in 0..300u64 {
                q.pop_condblocking(&mut out, false).unwrap();
                assert_eq!(u64::from_le_bytes(out), v);
            }
        });
    });

    assert!(q.empty());
    let ring = q.into_inner();
    assert_eq!(ring.cursors().front(), 300 % 8);
}
