//! Stats API handler.
//!
//! ```text
//! GET /api/stats
//! ```

use actix_web::{get, web};

use crate::domain::{Error, Stats};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Aggregate user and task counts taken in one consistent snapshot.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Counts", body = Stats),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["stats"],
    operation_id = "getStats"
)]
#[get("/stats")]
pub async fn get_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<Stats>> {
    Ok(web::Json(state.stats.stats().await?))
}
