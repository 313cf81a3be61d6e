//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's cryptographic random byte facility.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same surface:
//!
//! - `try_sys_random` fills a buffer and reports failure as an
//!   [`Error::Entropy`](crate::Error::Entropy) carrying the number of bytes
//!   written before the failure.
//!
//! [`sys_random`] is built on top of it and treats any failure as fatal.
//! It backs every integer draw in the crate: a process that cannot obtain
//! entropy must not keep producing security-relevant values.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// # Panics
/// Panics if the OS facility reports an error. Such a failure indicates a
/// critical operating system issue and is considered unrecoverable.
pub(crate) fn sys_random(buf: &mut [u8]) {
    if let Err(err) = try_sys_random(buf) {
        panic!("{err}");
    }
}
