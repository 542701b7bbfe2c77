//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type; it wraps
//! domain-specific errors and implements `IntoResponse` so handlers can return it directly.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FieldErrorDto, ValidationErrorDto},
    server::{
        error::{auth::AuthError, config::ConfigError, internal::InternalError},
        service::validation::FieldError,
    },
};

/// Top-level application error type.
///
/// Aggregates every failure a handler can produce. Validation and status errors are raised
/// locally before the store is touched; `NotFound` and `DuplicateKey` come from the store
/// and pass through unchanged; `StoreUnavailable` is surfaced as-is without retries.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Identity gate rejection.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal state such as an unknown status value read back from the store.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// The record store failed for infrastructural reasons.
    ///
    /// Results in 500 Internal Server Error with details logged server-side. Constructed
    /// through `From<DbErr>`, which routes unique-constraint violations to `DuplicateKey`.
    #[error(transparent)]
    StoreUnavailable(DbErr),

    /// Socket or other I/O failure while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Payload rejected by the validation layer.
    ///
    /// Results in 400 Bad Request listing every offending field.
    #[error("Validation failed for {} field(s)", .0.len())]
    ValidationFailed(Vec<FieldError>),

    /// Request status outside the lifecycle vocabulary.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid or missing status: {0}")]
    InvalidStatus(String),

    /// Referenced id has no matching record.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint was violated by the store.
    ///
    /// Results in 409 Conflict; the driver detail is only logged.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::DuplicateKey(detail),
            _ => AppError::StoreUnavailable(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `ValidationFailed` (with field list) and `InvalidStatus`
/// - 401 Unauthorized - `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `DuplicateKey`
/// - 500 Internal Server Error - everything else, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    errors: errors
                        .into_iter()
                        .map(|e| FieldErrorDto {
                            field: e.field,
                            message: e.message,
                        })
                        .collect(),
                }),
            )
                .into_response(),
            Self::InvalidStatus(value) => {
                tracing::debug!("Rejected status value '{}'", value);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Invalid or missing status".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DuplicateKey(detail) => {
                tracing::debug!("Unique constraint violation: {}", detail);
                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "A record with the same unique value already exists".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
