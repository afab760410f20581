use std::io;

use crate::sys::Backend;

pub mod thread;
pub mod time;

pub(crate) const BACKEND : Backend = Backend::Posix;

/// Read the calling thread's `errno`, without resetting it.
pub(crate) fn errno() -> u32 {
    io::Error::last_os_error().raw_os_error().map_or(0, |code| code as u32)
}
