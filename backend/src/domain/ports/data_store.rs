//! Driven port for the authoritative user and task collections.
//!
//! Implementations serialise every call: no two operations, reads included,
//! may observe each other half-applied. Returned values are owned copies, so
//! callers never see mutations made after the call returns.
//!
//! The store performs no validation. Cross-entity rules (a task's owner must
//! exist) are the caller's job, and missing records are reported as `None`
//! rather than as errors.

use crate::domain::{NewTask, NewUser, Stats, Task, TaskFilter, TaskId, TaskPatch, User, UserId};

/// Port over the in-memory user and task collections.
#[cfg_attr(test, mockall::automock)]
pub trait DataStore: Send + Sync {
    /// All users in insertion order.
    fn list_users(&self) -> Vec<User>;

    /// The user with `id`, if any.
    fn find_user(&self, id: UserId) -> Option<User>;

    /// Tasks admitted by `filter`, in insertion order.
    fn list_tasks(&self, filter: &TaskFilter) -> Vec<Task>;

    /// Totals computed from one consistent view of both collections.
    fn stats(&self) -> Stats;

    /// Append a user with id `max(existing) + 1` (1 when empty).
    fn add_user(&self, user: NewUser) -> User;

    /// Append a task with id `max(existing) + 1` (1 when empty).
    fn add_task(&self, task: NewTask) -> Task;

    /// The task with `id`, if any.
    fn find_task(&self, id: TaskId) -> Option<Task>;

    /// Apply `patch` to the task with `id` in place; `None` when absent.
    fn update_task(&self, id: TaskId, patch: TaskPatch) -> Option<Task>;
}
