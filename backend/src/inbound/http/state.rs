//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::TaskBoardService;
use crate::domain::ports::{StatsQuery, TasksService, UsersService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersService>,
    pub tasks: Arc<dyn TasksService>,
    pub stats: Arc<dyn StatsQuery>,
}

impl HttpState {
    /// Construct state from individual ports.
    pub fn new(
        users: Arc<dyn UsersService>,
        tasks: Arc<dyn TasksService>,
        stats: Arc<dyn StatsQuery>,
    ) -> Self {
        Self {
            users,
            tasks,
            stats,
        }
    }

    /// Route every port to one [`TaskBoardService`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use taskboard::domain::TaskBoardService;
    /// use taskboard::inbound::http::state::HttpState;
    /// use taskboard::outbound::memory::InMemoryDataStore;
    ///
    /// let service = TaskBoardService::new(Arc::new(InMemoryDataStore::empty()));
    /// let state = HttpState::from_service(service);
    /// let _users = state.users.clone();
    /// ```
    pub fn from_service(service: TaskBoardService) -> Self {
        let service = Arc::new(service);
        Self::new(service.clone(), service.clone(), service)
    }
}
