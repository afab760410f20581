use windows::Win32::System::Threading::Sleep;

/// Yield the rest of the current timeslice to the OS
/// 
/// `Sleep` has no way of reporting failure, so this always returns `true`.
#[inline]
pub(crate) fn yield_now() -> bool {
    unsafe {
        // We don't use SwitchToThread here because it doesn't consider all
        // threads in the system and the thread we are waiting for may not get
        // selected.
        Sleep(0);
    }
    true
}
