//! Helpers for code that busy-waits on another thread

mod spin_wait;

pub use spin_wait::SpinWait;
