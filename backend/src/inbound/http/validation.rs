//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs keep every field optional so a missing field is reported with
//! the same envelope as a blank one, rather than as an opaque body error.

use serde_json::json;

use crate::domain::{Error, TaskValidationError, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyName,
    EmptyEmail,
    InvalidEmail,
    EmptyRole,
    EmptyTitle,
    InvalidStatus,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyName => "empty_name",
            ErrorCode::EmptyEmail => "empty_email",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::EmptyRole => "empty_role",
            ErrorCode::EmptyTitle => "empty_title",
            ErrorCode::InvalidStatus => "invalid_status",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const ROLE: FieldName = FieldName::new("role");
pub(crate) const TITLE: FieldName = FieldName::new("title");
pub(crate) const STATUS: FieldName = FieldName::new("status");
pub(crate) const USER_ID: FieldName = FieldName::new("userId");

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

/// Unwrap an optional DTO field, reporting its absence.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Map a user value-object failure onto the field that caused it.
///
/// `value` is echoed back only for malformed emails; blank values carry no
/// useful information.
pub(crate) fn user_validation_error(err: UserValidationError, value: &str) -> Error {
    let message = err.to_string();
    match err {
        UserValidationError::EmptyName => {
            ValidationError::new(NAME.as_str(), message).with_code(ErrorCode::EmptyName)
        }
        UserValidationError::EmptyEmail => {
            ValidationError::new(EMAIL.as_str(), message).with_code(ErrorCode::EmptyEmail)
        }
        UserValidationError::InvalidEmail => ValidationError::new(EMAIL.as_str(), message)
            .with_value(ErrorCode::InvalidEmail, value),
        UserValidationError::EmptyRole => {
            ValidationError::new(ROLE.as_str(), message).with_code(ErrorCode::EmptyRole)
        }
    }
}

/// Map a task value-object failure onto the field that caused it.
pub(crate) fn task_validation_error(err: TaskValidationError) -> Error {
    let message = err.to_string();
    match err {
        TaskValidationError::EmptyTitle => {
            ValidationError::new(TITLE.as_str(), message).with_code(ErrorCode::EmptyTitle)
        }
        TaskValidationError::UnknownStatus { value } => {
            ValidationError::new(STATUS.as_str(), message)
                .with_value(ErrorCode::InvalidStatus, value)
        }
    }
}
