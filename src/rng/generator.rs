//! Generator handle
//!
//! [`Rand`] exposes the conventional random number API (uniform and bounded
//! integers, floats, normal and exponential deviates, permutations and
//! shuffles) on top of any [`Source`].
//!
//! The generator contains no sampling logic of its own beyond width and
//! sign conventions. Bounded integers, floats and the shape distributions
//! are produced by the `rand` and `rand_distr` samplers, driven through a
//! [`SourceRng`] view of the source. Those samplers are unbiased as long as
//! the underlying integers are, which is the source's contract.

use rand::Rng;
use rand::distributions::Standard;
use rand_core::{CryptoRng, RngCore};
use rand_distr::{Exp1, StandardNormal};

use crate::rng::source::{OsSource, Source};

/// A random number generator bound to a [`Source`].
///
/// All methods take `&self`. With the default [`OsSource`] the generator
/// holds no state at all and can be shared between threads as is.
///
/// # Example
///
/// ```rust
/// use cryptal_rand::rng::{OsSource, Rand};
///
/// let r = Rand::new(OsSource);
/// let die = r.intn(6) + 1;
/// assert!((1..=6).contains(&die));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Rand<S: Source = OsSource> {
    src: S,
}

impl<S: Source> Rand<S> {
    /// Creates a generator drawing from `src`.
    pub const fn new(src: S) -> Self {
        Self { src }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.src
    }

    /// Returns a [`RngCore`] view of this generator.
    ///
    /// This makes every `rand` distribution usable with any source.
    pub fn rng(&self) -> SourceRng<'_, S> {
        SourceRng(&self.src)
    }

    /// Forwards the seed to the source.
    ///
    /// With [`OsSource`] this is a no-op: output is never reproducible.
    pub fn seed(&self, seed: u64) {
        self.src.seed(seed);
    }

    /// Returns a non-negative 63-bit integer, never `i64::MAX`.
    pub fn int63(&self) -> i64 {
        self.src.int63()
    }

    /// Returns a uniformly distributed 64-bit integer.
    pub fn uint64(&self) -> u64 {
        self.src.uint64()
    }

    /// Returns a uniformly distributed 32-bit integer.
    pub fn uint32(&self) -> u32 {
        (self.src.uint64() >> 32) as u32
    }

    /// Returns a non-negative 31-bit integer.
    pub fn int31(&self) -> i32 {
        (self.src.int63() >> 32) as i32
    }

    /// Returns a non-negative integer no larger than `isize::MAX`.
    pub fn int(&self) -> usize {
        (self.src.int63() as u64 as usize) & (isize::MAX as usize)
    }

    /// Returns a value uniformly distributed over `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n <= 0`.
    pub fn int63n(&self, n: i64) -> i64 {
        assert!(n > 0, "invalid argument to int63n: {n}");
        self.rng().gen_range(0..n)
    }

    /// Returns a value uniformly distributed over `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n <= 0`.
    pub fn int31n(&self, n: i32) -> i32 {
        assert!(n > 0, "invalid argument to int31n: {n}");
        self.rng().gen_range(0..n)
    }

    /// Returns a value uniformly distributed over `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn intn(&self, n: usize) -> usize {
        assert!(n > 0, "invalid argument to intn: {n}");
        self.rng().gen_range(0..n)
    }

    /// Returns a value uniformly distributed over `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn uint64n(&self, n: u64) -> u64 {
        assert!(n > 0, "invalid argument to uint64n: {n}");
        self.rng().gen_range(0..n)
    }

    /// Returns a value uniformly distributed over `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn uint32n(&self, n: u32) -> u32 {
        assert!(n > 0, "invalid argument to uint32n: {n}");
        self.rng().gen_range(0..n)
    }

    /// Returns a value uniformly distributed over `[0, 1)`.
    ///
    /// Built from 53 random bits, so every multiple of 2^-53 in range is
    /// equally likely and `1.0` is never produced.
    pub fn float64(&self) -> f64 {
        self.rng().sample(Standard)
    }

    /// Returns a value uniformly distributed over `[0, 1)`.
    ///
    /// Built from 24 random bits.
    pub fn float32(&self) -> f32 {
        self.rng().sample(Standard)
    }

    /// Returns a standard normal deviate (mean 0, standard deviation 1).
    pub fn norm_float64(&self) -> f64 {
        self.rng().sample(StandardNormal)
    }

    /// Returns a standard exponential deviate (rate 1).
    pub fn exp_float64(&self) -> f64 {
        self.rng().sample(Exp1)
    }

    /// Returns a uniformly random permutation of `0..n`.
    pub fn perm(&self, n: usize) -> Vec<usize> {
        let mut m = vec![0; n];

        // Inside-out Fisher-Yates: place i at a random slot among the
        // first i + 1, moving the previous occupant to the end.
        for i in 0..n {
            let j = self.intn(i + 1);
            m[i] = m[j];
            m[j] = i;
        }

        m
    }

    /// Shuffles `n` elements through the caller's `swap` callback.
    ///
    /// `swap` is only ever called with two distinct indices below `n`.
    pub fn shuffle<F>(&self, n: usize, mut swap: F)
    where
        F: FnMut(usize, usize),
    {
        for i in (1..n).rev() {
            let j = self.intn(i + 1);
            if i != j {
                swap(i, j);
            }
        }
    }

    /// Shuffles a slice in place.
    pub fn shuffle_slice<T>(&self, items: &mut [T]) {
        self.shuffle(items.len(), |i, j| items.swap(i, j));
    }

    /// Fills `buf` with random bytes drawn through the source.
    ///
    /// Bytes are taken from successive [`uint64`](Self::uint64) draws in
    /// little-endian order. Use [`read`](crate::read) to read directly from
    /// the operating system instead.
    pub fn fill_bytes(&self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.src.uint64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// A [`RngCore`] adapter over a borrowed [`Source`].
///
/// Obtained from [`Rand::rng`]. 32-bit draws take the high half of a
/// 64-bit draw.
pub struct SourceRng<'a, S: Source + ?Sized>(&'a S);

impl<S: Source + ?Sized> RngCore for SourceRng<'_, S> {
    fn next_u32(&mut self) -> u32 {
        (self.0.uint64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0.uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for SourceRng<'_, OsSource> {}
