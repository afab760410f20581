//! C ABI exports used by the Shadow runtime

use static_assertions::const_assert_eq;

use crate::sys;

// The runtime's boolean is a single byte holding 0 or 1, which is exactly what rust's `bool` is
const_assert_eq!(core::mem::size_of::<bool>(), 1);

/// Yield the rest of the current thread's time slice.
/// 
/// Declared by the runtime as `shadow_boolean_t __ShadowCurrentThread_Yield(void)`.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn __ShadowCurrentThread_Yield() -> bool {
    sys::yield_current_thread()
}

#[cfg(test)]
mod tests {
    #[test]
    fn exported_yield() {
        let yield_fn: extern "C" fn() -> bool = super::__ShadowCurrentThread_Yield;
        assert!(yield_fn());
    }
}
