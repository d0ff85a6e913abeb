//! Core library for the cloud tuning dashboard
//!
//! This crate provides:
//! - Synthetic, drifting cloud-provider metrics (AWS, Azure, GCP)
//! - Threshold rules turning metric snapshots into tuning advice
//! - Prometheus self-metrics and structured logging

pub mod generator;
pub mod models;
pub mod observability;
pub mod rules;

pub use generator::{MetricSource, SyntheticGenerator};
pub use models::*;
pub use observability::{DashboardMetrics, EvaluationSource, StructuredLogger};
pub use rules::{evaluate, evaluate_named, Advisory, Evaluation, Severity, Status};
