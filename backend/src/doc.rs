//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI document for the REST API. It registers
//! every handler under [`crate::inbound::http`] and the domain and DTO types
//! they exchange. Swagger UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Stats, Task, TaskStats, TaskStatus, User, UserStats};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::tasks::{CreateTaskRequest, TasksResponse, UpdateTaskRequest};
use crate::inbound::http::users::{CreateUserRequest, UsersResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        description = "In-memory users and tasks with aggregate statistics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::get_task,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::stats::get_stats,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        Task,
        TaskStatus,
        Stats,
        UserStats,
        TaskStats,
        HealthStatus,
        UsersResponse,
        TasksResponse,
        CreateUserRequest,
        CreateTaskRequest,
        UpdateTaskRequest,
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "tasks", description = "Operations related to tasks"),
        (name = "stats", description = "Aggregate counts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
