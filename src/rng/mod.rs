//! Random number generation module
//!
//! This module provides a cryptographically secure implementation of the
//! conventional random number API: the same operations a seeded
//! pseudo-random generator offers, but with every bit drawn from the
//! operating system.
//!
//! It is organised in two layers:
//! - [`Source`] and [`OsSource`]: unbiased 63-bit and 64-bit integers read
//!   from the OS entropy facility
//! - [`Rand`], [`Zipf`] and the package-level functions re-exported at the
//!   crate root: the typed numeric API composed on top of a source
//!
//! Seeding is accepted everywhere for interface compatibility and ignored.

mod generator;
mod global;
mod source;
mod zipf;

pub use generator::{Rand, SourceRng};
pub use global::{
    default_rand, exp_float64, float32, float64, int, int31, int31n, int63, int63n, intn, new,
    new_source, norm_float64, perm, read, seed, shuffle, uint32, uint64,
};
pub use source::{OsSource, Source};
pub use zipf::{Zipf, new_zipf};
