//! Task data model and partial updates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::UserId;

/// Validation errors raised while building task values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskValidationError {
    /// Title was empty once trimmed.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Status literal outside the closed set.
    #[error("status must be one of pending, in-progress, completed; got {value:?}")]
    UnknownStatus {
        /// Rejected input.
        value: String,
    },
}

/// Store-assigned task identifier, sequenced independently of user ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress state of a task.
///
/// Serialised as `"pending"`, `"in-progress"` or `"completed"`; any other
/// literal fails deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Every status, in display order.
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Wire literal for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskValidationError;

    /// Exact, case-sensitive match against the wire literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TaskValidationError::UnknownStatus {
                value: s.to_owned(),
            })
    }
}

/// Task title, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Trim and validate the supplied title.
    ///
    /// # Examples
    /// ```
    /// use taskboard::domain::{TaskTitle, TaskValidationError};
    ///
    /// assert_eq!(TaskTitle::new("  Ship it ").unwrap().as_ref(), "Ship it");
    /// assert_eq!(TaskTitle::new("   "), Err(TaskValidationError::EmptyTitle));
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated fields for a task that has not been stored yet.
///
/// The owning user is not checked here; that requires the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: TaskTitle,
    /// Initial status.
    pub status: TaskStatus,
    /// Owning user.
    pub user_id: UserId,
}

/// Partial update for a task. `None` leaves the stored field untouched.
///
/// # Examples
/// ```
/// use taskboard::domain::{TaskPatch, TaskStatus};
///
/// let patch = TaskPatch::default().with_status(TaskStatus::Completed);
/// assert!(patch.title.is_none());
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement owner.
    pub user_id: Option<UserId>,
}

impl TaskPatch {
    /// Set the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the replacement owner.
    #[must_use]
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none() && self.user_id.is_none()
    }
}

/// Stored task.
///
/// ## Invariants
/// - `id` is unique among tasks.
/// - `user_id` referenced an existing user when the task was last written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[schema(value_type = u64, example = 1)]
    id: TaskId,
    #[schema(value_type = String, example = "Implement authentication")]
    title: TaskTitle,
    status: TaskStatus,
    #[schema(value_type = u64, example = 1)]
    user_id: UserId,
}

impl Task {
    /// Attach a store-assigned id to validated fields.
    pub fn new(id: TaskId, task: NewTask) -> Self {
        let NewTask {
            title,
            status,
            user_id,
        } = task;
        Self {
            id,
            title,
            status,
            user_id,
        }
    }

    /// Return a copy with the patch's supplied fields applied.
    ///
    /// # Examples
    /// ```
    /// use taskboard::domain::{NewTask, Task, TaskId, TaskPatch, TaskStatus, TaskTitle, UserId};
    ///
    /// let task = Task::new(
    ///     TaskId::new(1),
    ///     NewTask {
    ///         title: TaskTitle::new("Write docs").unwrap(),
    ///         status: TaskStatus::Pending,
    ///         user_id: UserId::new(2),
    ///     },
    /// );
    /// let done = task.patched(TaskPatch::default().with_status(TaskStatus::Completed));
    /// assert_eq!(done.status(), TaskStatus::Completed);
    /// assert_eq!(done.title().as_ref(), "Write docs");
    /// assert_eq!(done.user_id(), UserId::new(2));
    /// ```
    #[must_use]
    pub fn patched(&self, patch: TaskPatch) -> Self {
        let TaskPatch {
            title,
            status,
            user_id,
        } = patch;
        Self {
            id: self.id,
            title: title.unwrap_or_else(|| self.title.clone()),
            status: status.unwrap_or(self.status),
            user_id: user_id.unwrap_or(self.user_id),
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Task title.
    pub fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Current status.
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Owning user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

#[cfg(test)]
mod tests;
