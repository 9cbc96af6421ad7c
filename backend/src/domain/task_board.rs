//! Task board use-cases.
//!
//! `TaskBoardService` implements the driving ports over a [`DataStore`]. It
//! owns the rules the store deliberately leaves out: absent records become
//! `not_found` errors and a task's owner must exist whenever it is written.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use super::ports::{DataStore, StatsQuery, TasksService, UsersService};
use super::{Error, NewTask, NewUser, Stats, Task, TaskFilter, TaskId, TaskPatch, User, UserId};

/// Domain service backing the users, tasks and stats endpoints.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use taskboard::domain::TaskBoardService;
/// use taskboard::outbound::memory::InMemoryDataStore;
///
/// let store = InMemoryDataStore::empty();
/// let service = TaskBoardService::new(Arc::new(store));
/// # let _ = service;
/// ```
#[derive(Clone)]
pub struct TaskBoardService {
    store: Arc<dyn DataStore>,
}

impl TaskBoardService {
    /// Wrap a store.
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    fn require_owner(&self, user_id: UserId) -> Result<(), Error> {
        if self.store.find_user(user_id).is_some() {
            return Ok(());
        }
        Err(unknown_owner_error(user_id))
    }
}

fn unknown_owner_error(user_id: UserId) -> Error {
    Error::invalid_request(format!("user {user_id} does not exist")).with_details(json!({
        "field": "userId",
        "code": "unknown_user",
        "value": user_id.get(),
    }))
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found")).with_details(json!({ "id": id.get() }))
}

fn task_not_found(id: TaskId) -> Error {
    Error::not_found(format!("task {id} not found")).with_details(json!({ "id": id.get() }))
}

#[async_trait]
impl UsersService for TaskBoardService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(self.store.list_users())
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.store.find_user(id).ok_or_else(|| user_not_found(id))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let created = self.store.add_user(user);
        info!(user_id = %created.id(), "user created");
        Ok(created)
    }
}

#[async_trait]
impl TasksService for TaskBoardService {
    async fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, Error> {
        let tasks = self.store.list_tasks(&filter);
        debug!(?filter, count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, Error> {
        self.store.find_task(id).ok_or_else(|| task_not_found(id))
    }

    async fn create_task(&self, task: NewTask) -> Result<Task, Error> {
        self.require_owner(task.user_id)?;
        let created = self.store.add_task(task);
        info!(
            task_id = %created.id(),
            user_id = %created.user_id(),
            status = %created.status(),
            "task created"
        );
        Ok(created)
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Task, Error> {
        if self.store.find_task(id).is_none() {
            return Err(task_not_found(id));
        }
        if let Some(user_id) = patch.user_id {
            self.require_owner(user_id)?;
        }
        // Users and tasks are never deleted, so both checks still hold here.
        let updated = self
            .store
            .update_task(id, patch)
            .ok_or_else(|| task_not_found(id))?;
        info!(
            task_id = %updated.id(),
            user_id = %updated.user_id(),
            status = %updated.status(),
            "task updated"
        );
        Ok(updated)
    }
}

#[async_trait]
impl StatsQuery for TaskBoardService {
    async fn stats(&self) -> Result<Stats, Error> {
        Ok(self.store.stats())
    }
}
