//! Random-walk primitives for synthetic metrics
//!
//! A metric drifts by a bounded random step each tick and is clamped to its
//! range. Rare incident spikes add a large one-off burst on top.

use rand::Rng;

/// Margin kept from each bound when a metric is seeded
const SEED_MARGIN: f64 = 5.0;

/// Smallest extra amount an incident spike adds
const SPIKE_FLOOR: f64 = 10.0;

/// Bounded random-walk parameters for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Largest change in either direction per tick
    pub step: f64,
    pub lo: f64,
    pub hi: f64,
}

impl Drift {
    pub const fn new(step: f64, lo: f64, hi: f64) -> Self {
        Self { step, lo, hi }
    }

    /// Next value for the metric, rounded to one decimal
    ///
    /// Without a previous value the metric is seeded uniformly inside
    /// `[lo + 5, hi - 5]`.
    pub fn next<R: Rng + ?Sized>(&self, rng: &mut R, prev: Option<f64>) -> f64 {
        let value = match prev {
            None => rng.gen_range(self.lo + SEED_MARGIN..=self.hi - SEED_MARGIN),
            Some(prev) => {
                let change = rng.gen_range(-self.step..=self.step);
                clamp(prev + change, self.lo, self.hi)
            }
        };
        round_to(value, 1)
    }
}

/// Low-probability burst applied after drift
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spike {
    pub probability: f64,
    /// Largest extra amount a spike adds
    pub magnitude: f64,
    /// Upper clamp applied after the spike roll, fired or not
    pub ceiling: f64,
}

impl Spike {
    pub const fn new(probability: f64, magnitude: f64, ceiling: f64) -> Self {
        Self {
            probability,
            magnitude,
            ceiling,
        }
    }

    pub fn apply<R: Rng + ?Sized>(&self, rng: &mut R, value: f64) -> f64 {
        let extra = if rng.gen_bool(self.probability) {
            rng.gen_range(SPIKE_FLOOR..=self.magnitude)
        } else {
            0.0
        };
        clamp(value + extra, 0.0, self.ceiling)
    }
}

pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
