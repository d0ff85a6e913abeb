//! CLI command implementations

pub mod evaluate;
pub mod metrics;
pub mod simulate;
