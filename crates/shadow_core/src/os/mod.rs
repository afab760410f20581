/// Module containing OS abstractions.
/// 
/// Direct OS implementations aren't available to the user, usable functionality/abstractions defined in the `shadow_core::sys` module.
/// Exactly one backend is compiled in, there is no runtime platform detection.

use cfg_if::cfg_if;

cfg_if!{
    if #[cfg(windows)] {
        pub mod windows;
        pub use self::windows::*;
    } else if #[cfg(unix)] {
        pub mod posix;
        pub use self::posix::*;
    } else {
        compile_error!("shadow_core has no OS backend for this target, only windows and unix targets are supported");
    }
}
