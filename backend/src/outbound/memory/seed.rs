//! Records every fresh seeded store starts with.

use crate::domain::{
    NewTask, NewUser, Task, TaskId, TaskStatus, TaskTitle, TaskValidationError, User, UserId,
    UserValidationError,
};

const USERS: [(&str, &str, &str); 3] = [
    ("John Doe", "john@example.com", "developer"),
    ("Jane Smith", "jane@example.com", "designer"),
    ("Bob Johnson", "bob@example.com", "manager"),
];

const TASKS: [(&str, TaskStatus, u64); 3] = [
    ("Implement authentication", TaskStatus::Pending, 1),
    ("Design user interface", TaskStatus::InProgress, 2),
    ("Review code changes", TaskStatus::Completed, 3),
];

/// Seed users with ids 1..=3.
pub(super) fn users() -> Result<Vec<User>, UserValidationError> {
    (1_u64..)
        .zip(USERS)
        .map(|(id, (name, email, role))| {
            NewUser::try_from_strings(name, email, role).map(|user| User::new(UserId::new(id), user))
        })
        .collect()
}

/// Seed tasks with ids 1..=3, one per status.
pub(super) fn tasks() -> Result<Vec<Task>, TaskValidationError> {
    (1_u64..)
        .zip(TASKS)
        .map(|(id, (title, status, user_id))| {
            TaskTitle::new(title).map(|title| {
                Task::new(
                    TaskId::new(id),
                    NewTask {
                        title,
                        status,
                        user_id: UserId::new(user_id),
                    },
                )
            })
        })
        .collect()
}
