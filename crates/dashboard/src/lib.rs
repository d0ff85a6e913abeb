//! Tuning dashboard HTTP service
//!
//! Serves the dashboard page, synthetic metrics with tuning advice,
//! manual evaluation and liveness endpoints.

pub mod api;
pub mod config;
pub mod error;
pub mod manual;
