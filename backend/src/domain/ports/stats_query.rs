//! Driving port for aggregate statistics.

use async_trait::async_trait;

use crate::domain::{Error, Stats};

/// Read-only port returning user and task totals.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsQuery: Send + Sync {
    /// Current totals.
    async fn stats(&self) -> Result<Stats, Error>;
}
