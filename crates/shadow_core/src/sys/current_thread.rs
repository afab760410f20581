//! Operations on the calling thread.
//! 
//! # Yielding
//! 
//! A yield is only a hint: the scheduler is free to ignore it, and the backends don't behave the same.
//! - On POSIX targets, `sched_yield` is used. The thread is moved to the end of the run queue for its priority,
//!   the exact fairness depends on the OS and the scheduling policy.
//! - On windows, `Sleep(0)` is used. The rest of the time slice is only given to a ready thread of equal priority,
//!   if there is no such thread, the call returns immediately.
//! 
//! Code calling this should never rely on any cross-platform fairness, and should not establish any ordering between
//! threads through it: a yield is not a synchronization point.

use crate::os;

/// The thread currently executing
#[derive(Clone, Copy, Default, Debug)]
pub struct CurrentThread;

impl CurrentThread {
    /// Hint the OS scheduler that the current thread is willing to give up the rest of its time slice.
    /// 
    /// Returns `true` if the OS accepted the hint, or `false` if the OS reported a failure.
    /// Failures are passed on as-is and never retried, [`errno`](crate::sys::errno) can be checked right after the
    /// call for more info. On backends that can't fail (see [`Backend::can_fail`](crate::sys::Backend::can_fail)),
    /// this always returns `true`.
    /// 
    /// This does not allocate, lock or do any I/O, it only blocks inside of the OS while the scheduler decides what
    /// to run next. When no other thread is ready to run, it returns without a context switch.
    /// 
    /// On POSIX targets this is async-signal-safe.
    #[inline]
    pub fn yield_now() -> bool {
        os::thread::yield_now()
    }
}

/// Yield the rest of the current thread's time slice to the OS.
/// 
/// See [`CurrentThread::yield_now`].
#[inline]
pub fn yield_current_thread() -> bool {
    CurrentThread::yield_now()
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, atomic::{AtomicBool, AtomicUsize, Ordering}},
        thread,
    };

    use crate::sys::{self, Backend, CurrentThread, yield_current_thread};

    #[test]
    fn single_yield() {
        assert!(yield_current_thread());
    }

    // Sentinel that no yield primitive reports on its own
    #[cfg(unix)]
    const ERRNO_SENTINEL: i32 = libc::EINTR;

    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn set_errno(code: i32) {
        unsafe { *libc::__errno_location() = code };
    }

    #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
    fn set_errno(code: i32) {
        unsafe { *libc::__error() = code };
    }

    #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios", target_os = "freebsd"))]
    #[test]
    fn successful_yield_keeps_errno() {
        for _ in 0..100 {
            set_errno(ERRNO_SENTINEL);
            if CurrentThread::yield_now() {
                assert_eq!(sys::errno(), ERRNO_SENTINEL as u32);
            }
        }
    }

    #[cfg(windows)]
    #[test]
    fn yield_keeps_last_error() {
        use windows::Win32::Foundation::{ERROR_ACCESS_DENIED, SetLastError};

        for _ in 0..100 {
            unsafe { SetLastError(ERROR_ACCESS_DENIED) };
            assert!(CurrentThread::yield_now());
            assert_eq!(sys::errno(), ERROR_ACCESS_DENIED.0);
        }
    }

    #[test]
    fn backend_matches_target() {
        if cfg!(windows) {
            assert_eq!(sys::BACKEND, Backend::Windows);
            assert!(!sys::BACKEND.can_fail());
        } else {
            assert_eq!(sys::BACKEND, Backend::Posix);
            assert!(sys::BACKEND.can_fail());
        }
    }

    #[test]
    fn backend_display() {
        assert_eq!(Backend::Posix.to_string(), "posix");
        assert_eq!(Backend::Windows.to_string(), "windows");
    }

    #[test]
    fn infallible_backend_always_succeeds() {
        if !sys::BACKEND.can_fail() {
            for _ in 0..10_000 {
                assert!(yield_current_thread());
            }
        }
    }

    #[test]
    fn concurrent_yields() {
        let stop = Arc::new(AtomicBool::new(false));
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8).map(|_| {
            let stop = stop.clone();
            let calls = calls.clone();
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    // The result is a plain bool, the scheduler decides if we actually got switched out
                    let _ = yield_current_thread();
                    calls.fetch_add(1, Ordering::Relaxed);
                }
            })
        }).collect();

        while calls.load(Ordering::Relaxed) < 1000 {
            CurrentThread::yield_now();
        }
        stop.store(true, Ordering::Relaxed);

        for handle in handles {
            assert!(handle.join().is_ok());
        }
    }
}
