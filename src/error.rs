//! Error types for the REST API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::services::trading_service::OrderError;
use crate::services::{FieldErrors, ServiceError};

/// Store error messages are cut down before they reach a response body.
const STORE_ERROR_LIMIT: usize = 200;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Error code.
    pub code: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or out-of-range request fields.
    #[error("{0}")]
    Validation(String),

    /// Business-rule rejection; the rejected order record was already appended.
    #[error("{0}")]
    Rejected(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Store failure or any other unexpected condition.
    #[error("{0}")]
    Database(String),
}

impl ApiError {
    /// Wraps a store failure, truncating the driver's message.
    pub fn database(err: impl ToString) -> Self {
        let msg: String = err.to_string().chars().take(STORE_ERROR_LIMIT).collect();
        ApiError::Database(msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION"),
            ApiError::Rejected(_) => (StatusCode::BAD_REQUEST, "ORDER_REJECTED"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE"),
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errs: FieldErrors) -> Self {
        // Sorted so the message is stable regardless of map order.
        let mut parts: Vec<String> = errs
            .into_iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        parts.sort();
        ApiError::Validation(parts.join(" "))
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Invalid(errs) => errs.into(),
            ServiceError::Db(msg) => ApiError::database(msg),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Invalid(errs) => errs.into(),
            OrderError::Rejected(reason) => ApiError::Rejected(reason.to_string()),
            OrderError::Db(msg) => ApiError::database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn long_store_errors_are_truncated() {
        let long = "x".repeat(1000);
        let ApiError::Database(msg) = ApiError::database(long) else {
            panic!("expected a database error");
        };
        assert_eq!(msg.len(), STORE_ERROR_LIMIT);
    }

    #[test]
    fn field_errors_join_in_field_order() {
        let mut errs: FieldErrors = HashMap::new();
        errs.insert("b".into(), "second.".into());
        errs.insert("a".into(), "first.".into());

        let ApiError::Validation(msg) = ApiError::from(errs) else {
            panic!("expected a validation error");
        };
        assert_eq!(msg, "a: first. b: second.");
    }
}
