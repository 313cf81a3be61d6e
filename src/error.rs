//! Error types for the crate.
//!
//! Only two conditions are reported as values. Everything else is either
//! a caller error on a bounded draw (a panic, as with slice indexing) or a
//! failure of the OS entropy facility on an integer draw, which is fatal.

use std::io;

/// Errors returned by fallible operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The operating system entropy facility failed.
    ///
    /// `filled` is the number of bytes written to the caller's buffer
    /// before the failure. Those bytes are valid random output.
    #[error("OS entropy facility failed after {filled} bytes: {source}")]
    Entropy {
        filled: usize,
        #[source]
        source: io::Error,
    },

    /// Zipf parameters outside the sampler's domain (`s > 1`, `v >= 1`).
    #[error("invalid Zipf parameters: s = {s}, v = {v} (need s > 1 and v >= 1)")]
    InvalidZipf { s: f64, v: f64 },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
