use std::{
    sync::{Arc, Barrier, atomic::{AtomicBool, AtomicU64, Ordering}},
    thread,
    time::{Duration, Instant},
};

use shadow_core::sys::{self, CurrentThread, yield_current_thread};

#[test]
fn single_threaded_smoke() {
    assert!(yield_current_thread());
}

#[test]
fn tight_loop() {
    let mut accepted = 0u32;
    let mut rejected = 0u32;
    for _ in 0..1_000_000 {
        if CurrentThread::yield_now() {
            accepted += 1;
        } else {
            rejected += 1;
        }
    }
    assert_eq!(accepted + rejected, 1_000_000);
    if !sys::BACKEND.can_fail() {
        assert_eq!(rejected, 0);
    }
}

#[test]
fn two_thread_handoff() {
    const ROUNDS: u64 = 10_000;
    let counter = Arc::new(AtomicU64::new(0));

    let handles: Vec<_> = (0..2).map(|_| {
        let counter = counter.clone();
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                counter.fetch_add(1, Ordering::Relaxed);
                yield_current_thread();
            }
        })
    }).collect();

    for handle in handles {
        handle.join().expect("yielding thread panicked");
    }
    assert_eq!(counter.load(Ordering::Relaxed), 2 * ROUNDS);
}

#[test]
fn high_fan_out() {
    const THREADS: usize = 64;
    const RUN_TIME: Duration = Duration::from_secs(1);

    let start = Arc::new(Barrier::new(THREADS + 1));
    let stop = Arc::new(AtomicBool::new(false));

    let handles: Vec<_> = (0..THREADS).map(|_| {
        let start = start.clone();
        let stop = stop.clone();
        thread::spawn(move || {
            start.wait();
            let mut calls = 0u64;
            while !stop.load(Ordering::Relaxed) {
                yield_current_thread();
                calls += 1;
            }
            calls
        })
    }).collect();

    start.wait();
    let begin = Instant::now();
    thread::sleep(RUN_TIME);
    stop.store(true, Ordering::Relaxed);

    let mut total = 0;
    for handle in handles {
        total += handle.join().expect("yielding thread panicked");
    }
    assert!(total > 0);
    assert!(begin.elapsed() < RUN_TIME * 30, "threads took too long to notice the stop flag");
}

#[cfg(windows)]
#[test]
fn windows_always_succeeds() {
    for _ in 0..10_000 {
        assert!(yield_current_thread());
    }
}

#[cfg(unix)]
#[test]
fn posix_succeeds_from_normal_thread() {
    let handle = thread::spawn(|| (0..10_000).all(|_| yield_current_thread()));
    assert!(handle.join().expect("yielding thread panicked"));
}

#[test]
fn yield_returns_promptly() {
    let begin = Instant::now();
    for _ in 0..1_000 {
        yield_current_thread();
    }
    // Very generous, a yield on an idle system is in the order of microseconds
    assert!(begin.elapsed() < Duration::from_secs(10));
}
