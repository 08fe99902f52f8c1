//! DTOs for service statistics.

use serde::Serialize;

use crate::domain::entities::LinkStats;

/// Process-lifetime counters.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_urls_shortened: u64,
    pub total_redirects: u64,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            total_urls_shortened: stats.total_shortened,
            total_redirects: stats.total_redirects,
        }
    }
}
