//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to its long URL
//! - [`LinkStats`] - Process-lifetime counters

pub mod link;
pub mod stats;

pub use link::Link;
pub use stats::LinkStats;
