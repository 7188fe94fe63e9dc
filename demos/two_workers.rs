// In demos/two_workers.rs
//
// One thread pushes samples 0..=count into a statically allocated queue,
// sleeping a random amount between pushes; another drains it with the
// condition-blocking pop until it sees the last sample.
//
//   cargo run --example two_workers -- [count]
use std::env;
use std::thread;
use std::time::{Duration, Instant};

use tsafeq::{QueueError, RingBuffer, SyncQueue};

#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
struct Sample {
    x: u32,
    y: u64,
    z: u8,
}

impl Sample {
    fn new(i: u32) -> Self {
        Self {
            x: i,
            y: u64::from(i),
            z: i as u8,
        }
    }
}

static SAMPLES: SyncQueue<RingBuffer<Sample, 50>> = SyncQueue::new(RingBuffer::new());

fn main() {
    tsafeq::trace::init_tracing();

    let args: Vec<String> = env::args().collect();
    let count: u32 = match args.get(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("Usage: {} [count]", args[0]);
            std::process::exit(1);
        }),
        None => 200,
    };

    println!(
        "Queue: {} slots, {} usable, {} bytes per sample",
        SAMPLES.stats().capacity,
        SAMPLES.stats().capacity - 1,
        std::mem::size_of::<Sample>()
    );

    let start = Instant::now();

    let producer = thread::spawn(move || {
        let mut full_retries = 0u32;
        let mut i = 0;
        while i <= count {
            let rv = SAMPLES.push_blocking(&Sample::new(i));
            thread::sleep(Duration::from_micros(100 * fastrand::u64(0..=0xff)));
            match rv {
                Ok(()) => {
                    println!("Pushed {}", i);
                    i += 1;
                }
                Err(QueueError::WasFull) => full_retries += 1,
                Err(e) => {
                    eprintln!("Producer: unexpected {}", e);
                    break;
                }
            }
        }
        full_retries
    });

    let consumer = thread::spawn(move || {
        let mut sample = Sample::default();
        let mut received = 0u32;
        let mut in_order = true;
        loop {
            if let Err(e) = SAMPLES.pop_condblocking(&mut sample, false) {
                eprintln!("Consumer: unexpected {}", e);
                break;
            }
            println!("Popped {} (y={}, z={})", sample.x, sample.y, sample.z);
            in_order &= sample.x == received;
            received += 1;
            if sample.x == count {
                break;
            }
        }
        (received, in_order)
    });

    let full_retries = producer.join().expect("producer panicked");
    let (received, in_order) = consumer.join().expect("consumer panicked");

    println!(
        "Done: {} samples in {:.2?} ({} pushes hit a full queue)",
        received,
        start.elapsed(),
        full_retries
    );
    if in_order && received == count + 1 {
        println!("All samples received in order");
    }
}
