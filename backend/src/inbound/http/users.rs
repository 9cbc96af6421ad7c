//! Users API handlers.
//!
//! ```text
//! GET  /api/users
//! GET  /api/users/{id}
//! POST /api/users {"name":"Ada","email":"ada@example.com","role":"developer"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{EmailAddress, Error, NewUser, Role, User, UserId, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{EMAIL, NAME, ROLE, require, user_validation_error};

/// Request body for `POST /api/users`.
///
/// Fields are optional at the wire level so a missing field is reported as
/// `missing_field` rather than as an unreadable body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "developer")]
    pub role: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let name = require(value.name, NAME)?;
        let email = require(value.email, EMAIL)?;
        let role = require(value.role, ROLE)?;
        Ok(Self {
            name: UserName::new(&name).map_err(|err| user_validation_error(err, &name))?,
            email: EmailAddress::new(&email).map_err(|err| user_validation_error(err, &email))?,
            role: Role::new(&role).map_err(|err| user_validation_error(err, &role))?,
        })
    }
}

/// Response body for `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
    /// Number of entries in `users`.
    pub count: usize,
}

/// List every user in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use taskboard::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.users.list_users().await?;
    debug!(count = users.len(), "users listed");
    Ok(web::Json(UsersResponse {
        count: users.len(),
        users,
    }))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such user", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    let user = state.users.get_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user from a validated request body.
///
/// Fields are trimmed before storing. The email must look like
/// `local-part@domain.tld`.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = NewUser::try_from(payload.into_inner())?;
    let created = state.users.create_user(user).await?;
    Ok(HttpResponse::Created().json(created))
}
