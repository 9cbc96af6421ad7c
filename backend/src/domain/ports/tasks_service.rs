//! Driving port for task queries and mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewTask, Task, TaskFilter, TaskId, TaskPatch};

/// Use-case port consumed by the tasks HTTP handlers.
///
/// Implementations enforce that a task's owner exists whenever the owner is
/// written, reporting an unknown owner as
/// [`crate::domain::ErrorCode::InvalidRequest`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TasksService: Send + Sync {
    /// Tasks admitted by `filter`.
    async fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, Error>;

    /// One task; [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get_task(&self, id: TaskId) -> Result<Task, Error>;

    /// Store a task after checking its owner exists.
    async fn create_task(&self, task: NewTask) -> Result<Task, Error>;

    /// Merge `patch` into an existing task.
    ///
    /// A missing task is reported before an unknown owner.
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Task, Error>;
}
