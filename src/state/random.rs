//! Random sources for the spin controller.
//!
//! Production spins draw from `rand`; tests inject a fixed source so the
//! outcome of a spin can be asserted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Inclusive range of winning numbers.
///
pub const NUMBER_RANGE: RangeInclusive<u8> = 0..=99;

/// Inclusive range of full revolutions per spin.
///
pub const REVOLUTION_RANGE: RangeInclusive<f64> = 5.0..=8.0;

/// Supplies the two random draws a spin needs.
///
pub trait SpinSource: Send {
    /// Draw the winning number, uniformly from `NUMBER_RANGE`.
    fn draw_number(&mut self) -> u8;

    /// Draw the revolution count, uniformly from `REVOLUTION_RANGE`.
    fn draw_revolutions(&mut self) -> f64;
}

/// Spin source backed by any `rand` generator.
///
pub struct RngSource<R: Rng + Send> {
    rng: R,
}

impl<R: Rng + Send> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed.
    ///
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    ///
    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> SpinSource for RngSource<R> {
    fn draw_number(&mut self) -> u8 {
        self.rng.gen_range(NUMBER_RANGE)
    }

    fn draw_revolutions(&mut self) -> f64 {
        self.rng.gen_range(REVOLUTION_RANGE)
    }
}

/// Source that always returns the same draws.
///
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    pub number: u8,
    pub revolutions: f64,
}

#[cfg(test)]
impl FixedSource {
    pub fn new(number: u8, revolutions: f64) -> Self {
        FixedSource {
            number,
            revolutions,
        }
    }
}

#[cfg(test)]
impl SpinSource for FixedSource {
    fn draw_number(&mut self) -> u8 {
        self.number
    }

    fn draw_revolutions(&mut self) -> f64 {
        self.revolutions
    }
}
