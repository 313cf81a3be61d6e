//! Package-level convenience functions
//!
//! Every function here forwards to a process-wide default [`Rand`] over
//! [`OsSource`]. The default is built on first use and never mutated, so
//! it is shared between threads without any locking.
//!
//! [`read`] is the exception: it fills the caller's buffer straight from
//! the operating system and reports failure as an error instead of
//! panicking.

use std::sync::OnceLock;

use crate::error::Result;
use crate::os::try_sys_random;
use crate::rng::generator::Rand;
use crate::rng::source::OsSource;

static DEFAULT: OnceLock<Rand> = OnceLock::new();

/// Returns the process-wide default generator.
pub fn default_rand() -> &'static Rand {
    DEFAULT.get_or_init(|| Rand::new(OsSource::new()))
}

/// Returns a new generator backed by the operating system.
pub fn new() -> Rand {
    Rand::new(OsSource::new())
}

/// Returns a new cryptographically secure source.
///
/// Unlike conventional seeded sources, the returned value is safe for
/// concurrent use by multiple threads.
pub fn new_source() -> OsSource {
    OsSource::new()
}

/// Fills `buf` with random bytes read directly from the operating system.
///
/// Returns `buf.len()` on success.
///
/// # Errors
/// Returns [`Error::Entropy`](crate::Error::Entropy) if the OS facility
/// fails; its `filled` field holds the number of bytes written first.
pub fn read(buf: &mut [u8]) -> Result<usize> {
    try_sys_random(buf)?;
    Ok(buf.len())
}

/// Does nothing. The default generator cannot be seeded.
pub fn seed(seed: u64) {
    default_rand().seed(seed);
}

/// See [`Rand::exp_float64`].
pub fn exp_float64() -> f64 {
    default_rand().exp_float64()
}

/// See [`Rand::float32`].
pub fn float32() -> f32 {
    default_rand().float32()
}

/// See [`Rand::float64`].
pub fn float64() -> f64 {
    default_rand().float64()
}

/// See [`Rand::int`].
pub fn int() -> usize {
    default_rand().int()
}

/// See [`Rand::int31`].
pub fn int31() -> i32 {
    default_rand().int31()
}

/// See [`Rand::int31n`].
pub fn int31n(n: i32) -> i32 {
    default_rand().int31n(n)
}

/// See [`Rand::int63`].
pub fn int63() -> i64 {
    default_rand().int63()
}

/// See [`Rand::int63n`].
pub fn int63n(n: i64) -> i64 {
    default_rand().int63n(n)
}

/// See [`Rand::intn`].
pub fn intn(n: usize) -> usize {
    default_rand().intn(n)
}

/// See [`Rand::norm_float64`].
pub fn norm_float64() -> f64 {
    default_rand().norm_float64()
}

/// See [`Rand::perm`].
pub fn perm(n: usize) -> Vec<usize> {
    default_rand().perm(n)
}

/// See [`Rand::shuffle`].
pub fn shuffle<F>(n: usize, swap: F)
where
    F: FnMut(usize, usize),
{
    default_rand().shuffle(n, swap);
}

/// See [`Rand::uint32`].
pub fn uint32() -> u32 {
    default_rand().uint32()
}

/// See [`Rand::uint64`].
pub fn uint64() -> u64 {
    default_rand().uint64()
}
