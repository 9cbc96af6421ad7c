//! Filters applied when listing tasks.
//!
//! Filters arrive as optional query-string text. An absent or empty value
//! matches every task for that dimension. A value that cannot be interpreted
//! (an unknown status literal, a user id that is not an integer) matches no
//! task at all rather than being rejected.

use super::{Task, TaskStatus, UserId};

/// Matching rule for a single filter dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Criterion<T> {
    /// Matches every value.
    #[default]
    Any,
    /// Matches values equal to the wrapped one.
    Only(T),
    /// Matches nothing; the supplied text could not be interpreted.
    Nothing,
}

impl<T: PartialEq> Criterion<T> {
    fn admits(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => expected == value,
            Self::Nothing => false,
        }
    }
}

/// Conjunction of a status criterion and an owner criterion.
///
/// # Examples
/// ```
/// use taskboard::domain::{Criterion, TaskFilter, TaskStatus};
///
/// let filter = TaskFilter::from_query(Some("pending"), Some("abc"));
/// assert_eq!(filter.status(), Criterion::Only(TaskStatus::Pending));
/// assert_eq!(filter.user_id(), Criterion::Nothing);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Criterion<TaskStatus>,
    user_id: Criterion<UserId>,
}

impl TaskFilter {
    /// Filter admitting every task.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from raw query-string values.
    pub fn from_query(status: Option<&str>, user_id: Option<&str>) -> Self {
        Self {
            status: parse_status(status),
            user_id: parse_user_id(user_id),
        }
    }

    /// Restrict to one status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Criterion::Only(status);
        self
    }

    /// Restrict to one owner.
    #[must_use]
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Criterion::Only(user_id);
        self
    }

    /// Status criterion.
    pub fn status(&self) -> Criterion<TaskStatus> {
        self.status
    }

    /// Owner criterion.
    pub fn user_id(&self) -> Criterion<UserId> {
        self.user_id
    }

    /// True when the task satisfies both criteria.
    pub fn matches(&self, task: &Task) -> bool {
        self.status.admits(&task.status()) && self.user_id.admits(&task.user_id())
    }
}

fn parse_status(raw: Option<&str>) -> Criterion<TaskStatus> {
    match raw {
        None | Some("") => Criterion::Any,
        Some(value) => value
            .parse()
            .map(Criterion::Only)
            .unwrap_or(Criterion::Nothing),
    }
}

fn parse_user_id(raw: Option<&str>) -> Criterion<UserId> {
    match raw {
        None | Some("") => Criterion::Any,
        // Surrounding whitespace is tolerated, like a lenient integer parse.
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(|id| Criterion::Only(UserId::new(id)))
            .unwrap_or(Criterion::Nothing),
    }
}
