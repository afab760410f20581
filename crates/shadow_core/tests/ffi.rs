#![cfg(feature = "ffi")]

use std::thread;

use shadow_core::{ffi::__ShadowCurrentThread_Yield, sys};

#[test]
fn exported_yield_matches_rust_api() {
    let yield_fn: extern "C" fn() -> bool = __ShadowCurrentThread_Yield;
    assert!(yield_fn());
    if !sys::BACKEND.can_fail() {
        assert!((0..10_000).all(|_| yield_fn()));
    }
}

#[test]
fn exported_yield_from_other_threads() {
    let handles: Vec<_> = (0..4).map(|_| thread::spawn(|| {
        (0..1_000).filter(|_| __ShadowCurrentThread_Yield()).count()
    })).collect();

    for handle in handles {
        let accepted = handle.join().expect("yielding thread panicked");
        assert!(accepted <= 1_000);
    }
}
