//! Stateful synthetic generator
//!
//! Remembers the last snapshot per provider and evolves it on every call.
//! Each provider has its own lock and RNG, so concurrent requests for the
//! same provider are serialized while different providers never contend.

use super::drift::{clamp, round_to, Drift, Spike};
use super::MetricSource;
use crate::models::{MetricSnapshot, Provider, WorkloadMetrics};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Drift, spike and coupling parameters for every simulated metric
pub mod profile {
    use super::{Drift, Spike};

    pub const CPU: Drift = Drift::new(6.0, 5.0, 98.0);
    pub const MEM: Drift = Drift::new(5.0, 5.0, 95.0);
    pub const DISK: Drift = Drift::new(4.0, 5.0, 95.0);
    pub const NETWORK: Drift = Drift::new(5.0, 3.0, 95.0);

    pub const CPU_SPIKE: Spike = Spike::new(0.05, 40.0, 90.0);
    pub const MEM_SPIKE: Spike = Spike::new(0.03, 40.0, 80.0);
    pub const NETWORK_SPIKE: Spike = Spike::new(0.04, 40.0, 100.0);

    /// CPU level above which memory and disk get dragged up too
    pub const HOT_CPU: f64 = 80.0;

    pub const AWS_DB_LATENCY: Drift = Drift::new(12.0, 15.0, 380.0);
    pub const AWS_REQUESTS: Drift = Drift::new(180.0, 80.0, 2400.0);
    pub const AWS_BUSY_REQUESTS: f64 = 2000.0;

    pub const AZURE_REQUEST_RATE: Drift = Drift::new(35.0, 10.0, 520.0);
    pub const AZURE_FAILURE_RATE: Drift = Drift::new(1.2, 0.0, 12.0);
    pub const AZURE_BUSY_REQUEST_RATE: f64 = 400.0;

    pub const GCP_QPS: Drift = Drift::new(250.0, 20.0, 3500.0);
    pub const GCP_LATENCY: Drift = Drift::new(15.0, 5.0, 480.0);
    pub const GCP_BUSY_QPS: f64 = 2500.0;
}

/// Remembered state and randomness for one provider
struct ProviderSlot {
    remembered: Option<MetricSnapshot>,
    rng: StdRng,
}

/// Generator of drifting, mildly realistic provider metrics
pub struct SyntheticGenerator {
    slots: [Mutex<ProviderSlot>; 3],
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rngs(|_| StdRng::from_entropy())
    }

    /// Create a reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rngs(|i| StdRng::seed_from_u64(seed.wrapping_add(i as u64)))
    }

    fn from_rngs(mut make_rng: impl FnMut(usize) -> StdRng) -> Self {
        Self {
            slots: std::array::from_fn(|i| {
                Mutex::new(ProviderSlot {
                    remembered: None,
                    rng: make_rng(i),
                })
            }),
        }
    }

    fn slot(&self, provider: Provider) -> MutexGuard<'_, ProviderSlot> {
        // Slot data is plain values, a panicked holder cannot leave it torn
        self.slots[provider.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the remembered (unclamped) state for a provider
    pub fn remembered(&self, provider: Provider) -> Option<MetricSnapshot> {
        self.slot(provider).remembered.clone()
    }
}

impl MetricSource for SyntheticGenerator {
    fn generate(&self, provider: Provider) -> MetricSnapshot {
        let mut slot = self.slot(provider);
        let ProviderSlot { remembered, rng } = &mut *slot;

        let now = chrono::Utc::now().timestamp();
        let next = evolve(rng, provider, remembered.as_ref(), now);
        let snapshot = finalize(&next);
        *remembered = Some(next);

        debug!(
            provider = %provider,
            cpu = snapshot.cpu,
            mem = snapshot.mem,
            disk = snapshot.disk,
            network = snapshot.network,
            "Generated metric snapshot"
        );

        snapshot
    }
}

/// Advance one provider's metrics by a single tick
pub(super) fn evolve<R: Rng + ?Sized>(
    rng: &mut R,
    provider: Provider,
    prev: Option<&MetricSnapshot>,
    timestamp: i64,
) -> MetricSnapshot {
    let mut cpu = profile::CPU.next(rng, prev.map(|s| s.cpu));
    let mut mem = profile::MEM.next(rng, prev.map(|s| s.mem));
    let mut disk = profile::DISK.next(rng, prev.map(|s| s.disk));
    let network = profile::NETWORK.next(rng, prev.map(|s| s.network));

    cpu = profile::CPU_SPIKE.apply(rng, cpu);
    mem = profile::MEM_SPIKE.apply(rng, mem);
    let network = profile::NETWORK_SPIKE.apply(rng, network);

    if cpu > profile::HOT_CPU {
        mem += rng.gen_range(2.0..=6.0);
        disk += rng.gen_range(1.0..=4.0);
    }

    let prev_workload = prev.map(|s| &s.workload);

    let workload = match provider {
        Provider::Aws => {
            let (prev_latency, prev_requests) = match prev_workload {
                Some(WorkloadMetrics::Aws {
                    db_latency,
                    requests,
                }) => (Some(*db_latency), Some(*requests as f64)),
                _ => (None, None),
            };

            let mut db_latency = profile::AWS_DB_LATENCY.next(rng, prev_latency);
            let requests = profile::AWS_REQUESTS.next(rng, prev_requests) as u64;

            if requests as f64 > profile::AWS_BUSY_REQUESTS {
                db_latency += rng.gen_range(10.0..=40.0);
                cpu += rng.gen_range(3.0..=8.0);
            }

            WorkloadMetrics::Aws {
                db_latency,
                requests,
            }
        }
        Provider::Azure => {
            let (prev_rate, prev_failures) = match prev_workload {
                Some(WorkloadMetrics::Azure {
                    request_rate,
                    failure_rate,
                }) => (Some(*request_rate), Some(*failure_rate)),
                _ => (None, None),
            };

            let request_rate = profile::AZURE_REQUEST_RATE.next(rng, prev_rate);
            let mut failure_rate =
                round_to(profile::AZURE_FAILURE_RATE.next(rng, prev_failures), 2);

            if request_rate > profile::AZURE_BUSY_REQUEST_RATE {
                failure_rate += rng.gen_range(0.5..=2.0);
                cpu += rng.gen_range(4.0..=8.0);
            }

            WorkloadMetrics::Azure {
                request_rate,
                failure_rate,
            }
        }
        Provider::Gcp => {
            let (prev_qps, prev_latency) = match prev_workload {
                Some(WorkloadMetrics::Gcp { qps, latency }) => {
                    (Some(*qps as f64), Some(*latency))
                }
                _ => (None, None),
            };

            let qps = profile::GCP_QPS.next(rng, prev_qps) as u64;
            let mut latency = profile::GCP_LATENCY.next(rng, prev_latency);

            if qps as f64 > profile::GCP_BUSY_QPS {
                latency += rng.gen_range(15.0..=50.0);
                cpu += rng.gen_range(2.0..=7.0);
            }

            WorkloadMetrics::Gcp { qps, latency }
        }
    };

    MetricSnapshot {
        provider,
        timestamp,
        cpu,
        mem,
        disk,
        network,
        workload,
    }
}

/// Output copy with the percentage metrics pulled back into [0, 100]
pub(super) fn finalize(state: &MetricSnapshot) -> MetricSnapshot {
    MetricSnapshot {
        cpu: clamp(state.cpu, 0.0, 100.0),
        mem: clamp(state.mem, 0.0, 100.0),
        disk: clamp(state.disk, 0.0, 100.0),
        network: clamp(state.network, 0.0, 100.0),
        ..state.clone()
    }
}
