//! Synthetic metric generation
//!
//! This module simulates cloud-provider metrics. Each provider keeps its own
//! remembered snapshot so successive calls drift smoothly instead of jumping
//! around, with occasional incident spikes and correlated load.

mod drift;
mod synthetic;


pub use drift::{clamp, round_to, Drift, Spike};
pub use synthetic::{profile, SyntheticGenerator};

use crate::models::{MetricSnapshot, Provider};

/// Source of metric snapshots for the dashboard
pub trait MetricSource: Send + Sync {
    /// Produce the next snapshot for a provider
    fn generate(&self, provider: Provider) -> MetricSnapshot;
}
