/// Ask the scheduler to run another thread of equal or higher priority before resuming the current one.
/// 
/// Returns `true` when `sched_yield` reports success, a failure is passed on as `false` without retrying.
#[inline]
pub(crate) fn yield_now() -> bool {
    // sched_yield is async-signal-safe, so this is too
    unsafe { libc::sched_yield() == 0 }
}
