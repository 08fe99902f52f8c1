//! Aggregate counters for the shortener.

/// Snapshot of the process-lifetime counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Distinct long URLs that received a new short code.
    pub total_shortened: u64,
    /// Successful lookups of an existing short code.
    pub total_redirects: u64,
}
