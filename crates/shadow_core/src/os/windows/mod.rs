use windows::Win32::Foundation::GetLastError;

use crate::sys::Backend;

pub mod thread;
pub mod time;

pub(crate) const BACKEND : Backend = Backend::Windows;

/// Read the calling thread's last error, as the raw win32 error code.
pub(crate) fn errno() -> u32 {
    match unsafe { GetLastError() } {
        Ok(_) => 0,
        // The error is wrapped in an HRESULT (0x8007xxxx), win32 error codes only take up the low 16 bits
        Err(err) => (err.code().0 as u32) & 0xFFFF,
    }
}
