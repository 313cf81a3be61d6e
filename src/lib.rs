//! Cryptographically secure random numbers behind the conventional API
//!
//! This crate offers the familiar surface of a seeded pseudo-random
//! generator (`intn`, `float64`, `perm`, `shuffle`, `norm_float64`, Zipf
//! sampling and friends) while drawing every bit from the operating
//! system's cryptographic random facility. Code written against that
//! surface becomes unpredictable by changing an import:
//!
//! ```rust
//! use cryptal_rand as random;
//!
//! let roll = random::intn(6) + 1;
//! let order = random::perm(10);
//!
//! assert!((1..=6).contains(&roll));
//! assert_eq!(order.len(), 10);
//! ```
//!
//! # Module overview
//!
//! - `os`
//!   Platform access to OS entropy (`getrandom` on Linux,
//!   `arc4random_buf` on macOS, `BCryptGenRandom` on Windows).
//!
//! - `rng`
//!   The [`Source`](rng::Source) trait and its OS-backed implementation,
//!   the [`Rand`](rng::Rand) generator, the [`Zipf`](rng::Zipf) sampler and
//!   the package-level functions re-exported below.
//!
//! # Differences from seeded generators
//!
//! - All seed functions are no-ops. Output is never reproducible.
//! - The default generator and [`OsSource`](rng::OsSource) are safe for
//!   concurrent use without locking.
//! - A failure of the OS entropy facility panics on every integer or float
//!   draw. Only [`read`] reports it as an [`Error`].

mod error;
mod os;

pub mod rng;

pub use error::{Error, Result};
pub use rng::{
    Rand, Zipf, default_rand, exp_float64, float32, float64, int, int31, int31n, int63, int63n,
    intn, new, new_source, new_zipf, norm_float64, perm, read, seed, shuffle, uint32, uint64,
};
