//! Threshold rules for cloud tuning advice
//!
//! This module provides:
//! - Per-provider threshold tables (AWS, Azure, GCP)
//! - Compound rules over pairs of metrics
//! - Severity aggregation into a normal/warning/critical status

mod advisory;
mod aws;
mod azure;
mod evaluator;
mod gcp;
mod rulebook;

pub use advisory::{Advisory, Severity, Status};
pub use evaluator::{evaluate, evaluate_named, Evaluation, INVALID_PROVIDER};
pub use rulebook::{CompoundRule, Rulebook, ThresholdRule};
