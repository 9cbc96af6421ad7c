//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::TaskBoardService;
use crate::domain::ports::{MockStatsQuery, MockTasksService, MockUsersService};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::routes;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryDataStore;

/// State backed by a freshly seeded in-memory store.
pub fn seeded_state() -> HttpState {
    let store = InMemoryDataStore::seeded().expect("seed data is valid");
    HttpState::from_service(TaskBoardService::new(Arc::new(store)))
}

/// State built from mocks; ports left at `None` get a mock with no
/// expectations, so any call to them fails the test.
pub fn mocked_state(
    users: Option<MockUsersService>,
    tasks: Option<MockTasksService>,
    stats: Option<MockStatsQuery>,
) -> HttpState {
    HttpState::new(
        Arc::new(users.unwrap_or_default()),
        Arc::new(tasks.unwrap_or_default()),
        Arc::new(stats.unwrap_or_default()),
    )
}

/// App with the full route table wired to `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(HealthState::new()))
        .configure(routes::configure)
}
