//! Zipf-distributed draws
//!
//! [`Zipf`] samples integers `k` in `[0, imax]` with probability
//! proportional to `(v + k)^(-s)`, using the rejection-inversion method of
//! Hörmann and Derflinger ("Rejection-inversion to generate variates from
//! monotone discrete distributions", 1996).
//!
//! All parameters are computed once in [`Zipf::new`]. Each draw costs one
//! uniform float on average and rarely more than two.

use rand_distr::Distribution;

use crate::error::{Error, Result};
use crate::rng::generator::Rand;
use crate::rng::source::{OsSource, Source};

/// An immutable Zipf sampler bound to a generator.
#[derive(Clone, Copy, Debug)]
pub struct Zipf<'a, S: Source = OsSource> {
    rand: &'a Rand<S>,
    imax: u64,
    v: f64,
    q: f64,
    accept_threshold: f64,
    one_minus_q: f64,
    one_minus_q_inv: f64,
    hxm: f64,
    hx0_minus_hxm: f64,
}

impl<'a, S: Source> Zipf<'a, S> {
    /// Creates a sampler over `[0, imax]` with skew `s` and offset `v`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidZipf`] unless `s > 1` and `v >= 1`, both
    /// finite.
    pub fn new(rand: &'a Rand<S>, s: f64, v: f64, imax: u64) -> Result<Self> {
        if !(s.is_finite() && v.is_finite() && s > 1.0 && v >= 1.0) {
            tracing::warn!(s, v, imax, "rejected Zipf parameters");
            return Err(Error::InvalidZipf { s, v });
        }

        let mut z = Self {
            rand,
            imax,
            v,
            q: s,
            accept_threshold: 0.0,
            one_minus_q: 1.0 - s,
            one_minus_q_inv: 1.0 / (1.0 - s),
            hxm: 0.0,
            hx0_minus_hxm: 0.0,
        };

        z.hxm = z.h(imax as f64 + 0.5);
        z.hx0_minus_hxm = z.h(0.5) - (v.ln() * -s).exp() - z.hxm;
        z.accept_threshold = 1.0 - z.h_inv(z.h(1.5) - (-s * (v + 1.0).ln()).exp());

        tracing::debug!(s, v, imax, "Zipf sampler constructed");

        Ok(z)
    }

    /// Largest value the sampler can return.
    pub fn imax(&self) -> u64 {
        self.imax
    }

    /// Draws a value from the bound generator.
    pub fn uint64(&self) -> u64 {
        self.draw(|| self.rand.float64())
    }

    fn h(&self, x: f64) -> f64 {
        (self.one_minus_q * (self.v + x).ln()).exp() * self.one_minus_q_inv
    }

    fn h_inv(&self, x: f64) -> f64 {
        (self.one_minus_q_inv * (self.one_minus_q * x).ln()).exp() - self.v
    }

    fn draw<F>(&self, mut uniform: F) -> u64
    where
        F: FnMut() -> f64,
    {
        loop {
            let ur = self.hxm + uniform() * self.hx0_minus_hxm;
            let x = self.h_inv(ur);
            let k = (x + 0.5).floor();

            // imax above 2^53 is not exact as f64 and may round up.
            if k - x <= self.accept_threshold {
                return (k as u64).min(self.imax);
            }

            if ur >= self.h(k + 0.5) - (-(k + self.v).ln() * self.q).exp() {
                return (k as u64).min(self.imax);
            }
        }
    }
}

/// Samples with the parameters of this sampler but the caller's RNG.
impl<S: Source> Distribution<u64> for Zipf<'_, S> {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        self.draw(|| rng.sample(rand::distributions::Standard))
    }
}

/// Creates a Zipf sampler bound to `rand`.
///
/// See [`Zipf::new`].
pub fn new_zipf<S: Source>(rand: &Rand<S>, s: f64, v: f64, imax: u64) -> Result<Zipf<'_, S>> {
    Zipf::new(rand, s, v, imax)
}

