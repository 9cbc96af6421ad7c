//! Tasks API handlers.
//!
//! ```text
//! GET  /api/tasks?status=pending&userId=1
//! GET  /api/tasks/{id}
//! POST /api/tasks      {"title":"Write docs","status":"pending","userId":1}
//! PUT  /api/tasks/{id} {"status":"completed"}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Error, NewTask, Task, TaskFilter, TaskId, TaskPatch, TaskStatus, TaskTitle, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{STATUS, TITLE, USER_ID, require, task_validation_error};

/// Query string accepted by `GET /api/tasks`.
///
/// Values are kept as raw text: an empty value disables that filter and a
/// value that cannot be interpreted yields an empty listing.
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TaskQuery {
    /// One of `pending`, `in-progress`, `completed`.
    pub status: Option<String>,
    /// Owning user id.
    pub user_id: Option<String>,
}

impl From<&TaskQuery> for TaskFilter {
    fn from(query: &TaskQuery) -> Self {
        TaskFilter::from_query(query.status.as_deref(), query.user_id.as_deref())
    }
}

/// Request body for `POST /api/tasks`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[schema(example = "Write docs")]
    pub title: Option<String>,
    #[schema(example = "pending")]
    pub status: Option<String>,
    #[schema(example = 1)]
    pub user_id: Option<u64>,
}

impl TryFrom<CreateTaskRequest> for NewTask {
    type Error = Error;

    fn try_from(value: CreateTaskRequest) -> Result<Self, Self::Error> {
        let title = require(value.title, TITLE)?;
        let status = require(value.status, STATUS)?;
        let user_id = require(value.user_id, USER_ID)?;
        Ok(Self {
            title: TaskTitle::new(title).map_err(task_validation_error)?,
            status: status
                .parse::<TaskStatus>()
                .map_err(task_validation_error)?,
            user_id: UserId::new(user_id),
        })
    }
}

/// Request body for `PUT /api/tasks/{id}`; absent or `null` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[schema(example = "Write better docs")]
    pub title: Option<String>,
    #[schema(example = "completed")]
    pub status: Option<String>,
    #[schema(example = 2)]
    pub user_id: Option<u64>,
}

impl TryFrom<UpdateTaskRequest> for TaskPatch {
    type Error = Error;

    fn try_from(value: UpdateTaskRequest) -> Result<Self, Self::Error> {
        let title = value
            .title
            .map(TaskTitle::new)
            .transpose()
            .map_err(task_validation_error)?;
        let status = value
            .status
            .map(|raw| raw.parse::<TaskStatus>())
            .transpose()
            .map_err(task_validation_error)?;
        Ok(Self {
            title,
            status,
            user_id: value.user_id.map(UserId::new),
        })
    }
}

/// Response body for `GET /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
    /// Number of entries in `tasks`.
    pub count: usize,
}

/// List tasks, optionally filtered by status and owner.
#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskQuery),
    responses(
        (status = 200, description = "Matching tasks", body = TasksResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(
    state: web::Data<HttpState>,
    query: web::Query<TaskQuery>,
) -> ApiResult<web::Json<TasksResponse>> {
    let tasks = state.tasks.list_tasks(TaskFilter::from(&*query)).await?;
    Ok(web::Json(TasksResponse {
        count: tasks.len(),
        tasks,
    }))
}

/// Fetch one task by id.
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = u64, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "Task", body = Task),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such task", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "getTask"
)]
#[get("/tasks/{id}")]
pub async fn get_task(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Task>> {
    let task = state.tasks.get_task(TaskId::new(path.into_inner())).await?;
    Ok(web::Json(task))
}

/// Create a task owned by an existing user.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Invalid request or unknown owner", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTaskRequest>,
) -> ApiResult<HttpResponse> {
    let task = NewTask::try_from(payload.into_inner())?;
    let created = state.tasks.create_task(task).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Merge the supplied fields into an existing task.
///
/// A missing task is reported as 404 even when the body is also invalid.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id" = u64, Path, description = "Task identifier")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = Task),
        (status = 400, description = "Invalid request or unknown owner", body = Error),
        (status = 404, description = "No such task", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
#[put("/tasks/{id}")]
pub async fn update_task(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateTaskRequest>,
) -> ApiResult<web::Json<Task>> {
    let id = TaskId::new(path.into_inner());
    let patch = match TaskPatch::try_from(payload.into_inner()) {
        Ok(patch) => patch,
        Err(invalid) => {
            // A missing task outranks the body error.
            state.tasks.get_task(id).await?;
            return Err(invalid);
        }
    };
    let updated = state.tasks.update_task(id, patch).await?;
    Ok(web::Json(updated))
}
