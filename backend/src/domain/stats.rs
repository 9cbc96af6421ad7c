//! Aggregate counts over users and tasks.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Task, TaskStatus};

/// User totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserStats {
    /// Number of stored users.
    pub total: usize,
}

/// Task totals, overall and per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Number of stored tasks.
    pub total: usize,
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Tasks in [`TaskStatus::Completed`].
    pub completed: usize,
}

impl TaskStats {
    /// Count tasks in a single pass.
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status() {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            stats
        })
    }
}

/// Snapshot returned by `GET /api/stats`.
///
/// ```json
/// {"users":{"total":3},"tasks":{"total":3,"pending":1,"inProgress":1,"completed":1}}
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Stats {
    /// User totals.
    pub users: UserStats,
    /// Task totals.
    pub tasks: TaskStats,
}
