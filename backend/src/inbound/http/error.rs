//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Extractor failures (bad JSON, bad path ids) are routed through the
//! same envelope via the handlers registered in [`super::routes`].

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Body sent to the client. Internal failures keep their trace id but lose
/// their message and details.
fn client_payload(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    error!(message = error.message(), details = ?error.details(), "internal failure");
    let generic = Error::internal("Internal server error");
    match error.trace_id() {
        Some(id) => generic.with_trace_id(id),
        None => generic,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(client_payload(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error surfaced in handler");
        Error::internal("Internal server error")
    }
}

/// Map a rejected JSON body (syntax, wrong types, unknown status literal)
/// onto an `invalid_request` envelope.
pub(crate) fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "rejected request body");
    let reason = err.to_string();
    Error::invalid_request(format!("invalid request body: {reason}"))
        .with_details(json!({ "code": "invalid_body", "reason": reason }))
        .into()
}

/// Map an unparseable path segment (for example `/api/tasks/abc`) onto an
/// `invalid_request` envelope.
pub(crate) fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let value = req
        .match_info()
        .get("id")
        .map(str::to_owned)
        .unwrap_or_default();
    Error::invalid_request(format!("invalid path parameter: {err}"))
        .with_details(json!({ "field": "id", "code": "invalid_path", "value": value }))
        .into()
}
