use core::fmt;

use crate::os;

pub mod current_thread;
pub use current_thread::*;


/// Get the current OS error
/// 
/// This reads the last-error channel of the calling thread (`errno` on POSIX, `GetLastError` on windows) without
/// resetting it. To get a meaningful value, call it right after the operation that failed.
pub fn errno() -> u32 {
    os::errno()
}

/// OS backend the crate was compiled against
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Backend {
    /// `sched_yield` based backend, used on all unix targets
    Posix,
    /// `Sleep(0)` based backend, used on all win32 targets
    Windows,
}

impl Backend {
    /// Check if the yield primitive of this backend has a way to report failure.
    /// 
    /// When this returns `false`, [`yield_current_thread`] always returns `true`.
    pub const fn can_fail(self) -> bool {
        match self {
            Backend::Posix => true,
            Backend::Windows => false,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Posix => f.write_str("posix"),
            Backend::Windows => f.write_str("windows"),
        }
    }
}

/// Backend selected at build time
pub const BACKEND : Backend = os::BACKEND;
