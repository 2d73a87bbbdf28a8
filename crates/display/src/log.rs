//! Logging shim.
//!
//! Forwards to `defmt` on embedded builds and to `tracing` on host builds.
//! With neither feature enabled the macros compile to nothing but still
//! borrow their arguments, so call sites don't trip unused-variable lints.
//!
//! Declared first in `lib.rs` with `#[macro_use]` so every module sees the
//! macros textually.
//!
//! Format strings must stay within the subset both backends accept: plain
//! `{}` placeholders with integer, bool or `&str` arguments.

#![allow(unused_macros)]

macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($fmt $(, $arg)*);
        #[cfg(feature = "tracing")]
        tracing::info!($fmt $(, $arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = ($(&$arg,)*);
    }};
}

macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(feature = "tracing")]
        tracing::debug!($fmt $(, $arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = ($(&$arg,)*);
    }};
}

macro_rules! warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($fmt $(, $arg)*);
        #[cfg(feature = "tracing")]
        tracing::warn!($fmt $(, $arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = ($(&$arg,)*);
    }};
}
