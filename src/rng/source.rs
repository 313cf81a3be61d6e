//! Entropy sources
//!
//! A [`Source`] is the narrow interface the rest of the crate draws from:
//! uniform 63-bit and 64-bit integers and a seeding hook. Everything in
//! [`Rand`](crate::rng::Rand) is written once against this trait.
//!
//! [`OsSource`] is the only source shipped with the crate. It holds no
//! state: every call is an independent read from the operating system, so
//! a single value can be shared freely between threads.

use rand_core::{CryptoRng, RngCore};

use crate::os::{sys_random, try_sys_random};

/// A supplier of uniformly distributed integers.
///
/// Implementations must be usable through a shared reference. Sources with
/// internal state are responsible for their own synchronization.
pub trait Source {
    /// Returns a value uniformly distributed over `[0, 2^63 - 1)`.
    fn int63(&self) -> i64;

    /// Returns a value uniformly distributed over the full `u64` range.
    fn uint64(&self) -> u64;

    /// Seeds the source.
    ///
    /// Cryptographic sources are non-deterministic and ignore the seed,
    /// which is what the default implementation does.
    fn seed(&self, _seed: u64) {}
}

impl<S: Source + ?Sized> Source for &S {
    fn int63(&self) -> i64 {
        (**self).int63()
    }

    fn uint64(&self) -> u64 {
        (**self).uint64()
    }

    fn seed(&self, seed: u64) {
        (**self).seed(seed)
    }
}

/// Cryptographically secure source backed by the operating system.
///
/// Unlike conventional seeded generators, an `OsSource` is safe for
/// concurrent use by multiple threads without any locking.
///
/// # Panics
/// Every method panics if the operating system entropy facility fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OsSource;

impl OsSource {
    /// Creates a new OS-backed source.
    pub const fn new() -> Self {
        OsSource
    }
}

impl Source for OsSource {
    fn int63(&self) -> i64 {
        loop {
            let mut buf = [0u8; 8];
            sys_random(&mut buf);

            if let Some(value) = decode_int63(buf) {
                return value;
            }

            tracing::trace!("int63 drew the excluded maximum, retrying");
        }
    }

    fn uint64(&self) -> u64 {
        let mut buf = [0u8; 8];
        sys_random(&mut buf);

        u64::from_le_bytes(buf)
    }

    /// Ignored: output is always drawn from the operating system.
    fn seed(&self, _seed: u64) {
        tracing::trace!("seed ignored by OS source");
    }
}

/// Clears the sign bit of a big-endian draw and rejects `i64::MAX`.
///
/// The maximum is excluded so the output range stays half-open, matching
/// what range-bounded callers of the conventional API expect.
#[inline]
fn decode_int63(mut buf: [u8; 8]) -> Option<i64> {
    buf[0] &= 0x7f;
    let x = u64::from_be_bytes(buf);

    (x < i64::MAX as u64).then_some(x as i64)
}

impl RngCore for OsSource {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        sys_random(&mut buf);

        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        self.uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        sys_random(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        try_sys_random(dest).map_err(rand_core::Error::new)
    }
}

impl CryptoRng for OsSource {}
