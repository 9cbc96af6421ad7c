//! Mutex-guarded user and task collections.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::ports::DataStore;
use crate::domain::{
    Error, NewTask, NewUser, Stats, Task, TaskFilter, TaskId, TaskPatch, TaskStats, User, UserId,
    UserStats,
};

use super::seed;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    tasks: Vec<Task>,
}

impl Collections {
    fn next_user_id(&self) -> UserId {
        let max = self.users.iter().map(|user| user.id().get()).max();
        UserId::new(max.unwrap_or(0) + 1)
    }

    fn next_task_id(&self) -> TaskId {
        let max = self.tasks.iter().map(|task| task.id().get()).max();
        TaskId::new(max.unwrap_or(0) + 1)
    }

    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}

/// [`DataStore`] keeping both collections in one [`Mutex`].
///
/// Every operation, read or write, holds the lock for its whole duration and
/// works on the locked [`Collections`] directly, so no operation ever takes
/// the lock twice. Results are cloned out before the guard drops.
///
/// # Examples
/// ```
/// use taskboard::domain::ports::DataStore;
/// use taskboard::outbound::memory::InMemoryDataStore;
///
/// let store = InMemoryDataStore::seeded().expect("seed data is valid");
/// assert_eq!(store.list_users().len(), 3);
/// assert_eq!(store.stats().tasks.pending, 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDataStore {
    state: Mutex<Collections>,
}

impl InMemoryDataStore {
    /// Store with no users and no tasks; the first ids assigned are 1.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store holding the three seed users and three seed tasks.
    ///
    /// # Errors
    /// Returns an internal error if the built-in seed records fail
    /// validation.
    pub fn seeded() -> Result<Self, Error> {
        let users = seed::users()
            .map_err(|err| Error::internal(format!("invalid seed user: {err}")))?;
        let tasks = seed::tasks()
            .map_err(|err| Error::internal(format!("invalid seed task: {err}")))?;
        Ok(Self {
            state: Mutex::new(Collections { users, tasks }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // Each critical section either applies fully or not at all, so a
        // panic elsewhere cannot leave the collections inconsistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DataStore for InMemoryDataStore {
    fn list_users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    fn find_user(&self, id: UserId) -> Option<User> {
        self.lock().user(id).cloned()
    }

    fn list_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        self.lock()
            .tasks
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    fn stats(&self) -> Stats {
        let state = self.lock();
        Stats {
            users: UserStats {
                total: state.users.len(),
            },
            tasks: TaskStats::tally(&state.tasks),
        }
    }

    fn add_user(&self, user: NewUser) -> User {
        let mut state = self.lock();
        let created = User::new(state.next_user_id(), user);
        state.users.push(created.clone());
        debug!(user_id = %created.id(), users = state.users.len(), "user appended");
        created
    }

    fn add_task(&self, task: NewTask) -> Task {
        let mut state = self.lock();
        let created = Task::new(state.next_task_id(), task);
        state.tasks.push(created.clone());
        debug!(task_id = %created.id(), tasks = state.tasks.len(), "task appended");
        created
    }

    fn find_task(&self, id: TaskId) -> Option<Task> {
        self.lock().tasks.iter().find(|task| task.id() == id).cloned()
    }

    fn update_task(&self, id: TaskId, patch: TaskPatch) -> Option<Task> {
        let mut state = self.lock();
        let slot = state.task_mut(id)?;
        *slot = slot.patched(patch);
        debug!(task_id = %id, "task replaced");
        Some(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskStatus, TaskTitle};
    use rstest::{fixture, rstest};

    #[fixture]
    fn seeded() -> InMemoryDataStore {
        InMemoryDataStore::seeded().expect("seed data is valid")
    }

    fn new_user(name: &str) -> NewUser {
        NewUser::try_from_strings(name, "someone@example.com", "tester").expect("valid user")
    }

    fn new_task(title: &str, status: TaskStatus, user: u64) -> NewTask {
        NewTask {
            title: TaskTitle::new(title).expect("valid title"),
            status,
            user_id: UserId::new(user),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|task| task.id().get()).collect()
    }

    #[rstest]
    fn seeded_store_reports_expected_stats(seeded: InMemoryDataStore) {
        let stats = seeded.stats();
        assert_eq!(stats.users, UserStats { total: 3 });
        assert_eq!(
            stats.tasks,
            TaskStats {
                total: 3,
                pending: 1,
                in_progress: 1,
                completed: 1,
            }
        );
    }

    #[rstest]
    fn seeded_users_keep_insertion_order(seeded: InMemoryDataStore) {
        let names: Vec<String> = seeded
            .list_users()
            .iter()
            .map(|user| user.name().to_string())
            .collect();
        assert_eq!(names, ["John Doe", "Jane Smith", "Bob Johnson"]);
    }

    #[rstest]
    fn add_user_assigns_max_plus_one(seeded: InMemoryDataStore) {
        let first = seeded.add_user(new_user("Ada"));
        let second = seeded.add_user(new_user("Grace"));
        assert_eq!(first.id(), UserId::new(4));
        assert_eq!(second.id(), UserId::new(5));
        assert_eq!(seeded.find_user(UserId::new(5)), Some(second));
    }

    #[rstest]
    fn empty_store_starts_both_sequences_at_one() {
        let store = InMemoryDataStore::empty();
        assert!(store.list_users().is_empty());
        assert_eq!(store.add_user(new_user("Ada")).id(), UserId::new(1));
        let task = store.add_task(new_task("First", TaskStatus::Pending, 1));
        assert_eq!(task.id(), TaskId::new(1));
    }

    #[rstest]
    fn task_ids_are_independent_of_user_ids(seeded: InMemoryDataStore) {
        seeded.add_user(new_user("Ada"));
        seeded.add_user(new_user("Grace"));
        let task = seeded.add_task(new_task("Write docs", TaskStatus::Pending, 1));
        assert_eq!(task.id(), TaskId::new(4));
    }

    #[rstest]
    fn listings_are_copies(seeded: InMemoryDataStore) {
        let users = seeded.list_users();
        let tasks = seeded.list_tasks(&TaskFilter::all());

        seeded.add_user(new_user("Ada"));
        seeded.add_task(new_task("Write docs", TaskStatus::Pending, 1));
        seeded.update_task(
            TaskId::new(1),
            TaskPatch::default().with_status(TaskStatus::Completed),
        );

        assert_eq!(users.len(), 3);
        assert_eq!(ids(&tasks), [1, 2, 3]);
        assert_eq!(tasks[0].status(), TaskStatus::Pending);
    }

    #[rstest]
    #[case(TaskFilter::from_query(Some("pending"), None), vec![1])]
    #[case(TaskFilter::from_query(None, Some("2")), vec![2])]
    #[case(TaskFilter::from_query(None, Some("abc")), vec![])]
    #[case(TaskFilter::from_query(Some("unknown"), None), vec![])]
    #[case(TaskFilter::from_query(Some(""), Some("")), vec![1, 2, 3])]
    #[case(TaskFilter::from_query(Some("completed"), Some("3")), vec![3])]
    #[case(TaskFilter::from_query(Some("completed"), Some("1")), vec![])]
    fn list_tasks_applies_filters(
        seeded: InMemoryDataStore,
        #[case] filter: TaskFilter,
        #[case] expected: Vec<u64>,
    ) {
        assert_eq!(ids(&seeded.list_tasks(&filter)), expected);
    }

    #[rstest]
    fn update_with_empty_patch_returns_task_unchanged(seeded: InMemoryDataStore) {
        let before = seeded.find_task(TaskId::new(2)).expect("seed task");
        let after = seeded
            .update_task(TaskId::new(2), TaskPatch::default())
            .expect("task exists");
        assert_eq!(after, before);
    }

    #[rstest]
    fn update_replaces_in_place(seeded: InMemoryDataStore) {
        let updated = seeded
            .update_task(
                TaskId::new(1),
                TaskPatch::default().with_status(TaskStatus::InProgress),
            )
            .expect("task exists");

        assert_eq!(updated.title().as_ref(), "Implement authentication");
        assert_eq!(updated.user_id(), UserId::new(1));
        assert_eq!(seeded.find_task(TaskId::new(1)), Some(updated));
        assert_eq!(ids(&seeded.list_tasks(&TaskFilter::all())), [1, 2, 3]);
        assert_eq!(seeded.stats().tasks.in_progress, 2);
    }

    #[rstest]
    fn update_of_missing_task_is_none(seeded: InMemoryDataStore) {
        assert!(seeded
            .update_task(TaskId::new(42), TaskPatch::default())
            .is_none());
    }

    #[rstest]
    fn store_accepts_unknown_owner_without_validation() {
        let store = InMemoryDataStore::empty();
        let task = store.add_task(new_task("Orphan", TaskStatus::Pending, 77));
        assert_eq!(task.user_id(), UserId::new(77));
    }
}
