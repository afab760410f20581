// Portions of the project have been copied from parking_lot and is copyrighted by Amanieu d'Antra under the MIT license
use core::hint::spin_loop;

use crate::sys::yield_current_thread;

// Wastes some CPU time for the given number or iterations, using a hint to indicate to the CPU that we are spinning
#[inline]
fn cpu_relax(iterations: u32) {
    for _ in 0..iterations {
        spin_loop()
    }
}

/// A counter used to perform exponential backoff in spin loops
#[derive(Default, Debug)]
pub struct SpinWait {
    counter: u32,
}

impl SpinWait {
    /// Number of iterations after which [`SpinWait::spin`] gives up
    pub const SPIN_LIMIT: u32 = 10;
    /// Number of iterations that only relax the CPU, before the OS gets involved
    pub const RELAX_LIMIT: u32 = 3;

    /// Creates a new `SpinWait`
    #[inline]
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Resets a `SpinWait` to its initial state
    #[inline]
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Number of iterations spent since creation or the last reset
    #[inline]
    pub fn iterations(&self) -> u32 {
        self.counter
    }

    /// Spins until the sleep threshold has been reached.
    /// 
    /// This function returns wether the sleep threshold has been reached, at which point further spinning has diminishing returns and the thread should be parked instead.
    /// 
    /// The spin strategy will initially use a CPU-bound loop, but will fall back to yielding the CPU to the OS after a few iterations.
    /// Whether the OS accepted the yield doesn't matter here, the next iteration will just try again.
    #[inline]
    pub fn spin(&mut self) -> bool {
        if self.counter >= Self::SPIN_LIMIT {
            return false;
        }

        self.counter += 1;
        if self.counter <= Self::RELAX_LIMIT {
            cpu_relax(1 << self.counter);
        } else {
            let _ = yield_current_thread();
        }
        true
    }

    /// Spins wihtout yielding the thread to the OS.
    /// 
    /// Instead, the backoff is simply capped at a maximum value.
    /// This can be used to improve throughput in `compare_exchange` loops that have a high contention
    #[inline]
    pub fn spin_no_yield(&mut self) {
        self.counter += 1;
        if self.counter > Self::SPIN_LIMIT {
            self.counter = Self::SPIN_LIMIT;
        }
        cpu_relax(1 << self.counter);
    }
}
