//! Core OS abstractions for the Shadow runtime.
//!
//! The only thing the runtime needs from this crate is a portable way to hint the OS scheduler that the current thread
//! is willing to give up the rest of its time slice, see [`sys::yield_current_thread`].
//!
//! With the `ffi` feature, the same operation is exported with the C ABI as `__ShadowCurrentThread_Yield` from the `ffi` module.
//! Tests are always built with this feature enabled.

mod os;

pub mod sys;
pub mod sync;
pub mod time;

#[cfg(feature = "ffi")]
pub mod ffi;

