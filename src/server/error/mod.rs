//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod constraint;
pub mod validation;
pub mod write;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::error::{
        config::ConfigError, constraint::ConstraintError, validation::ValidationError,
        write::WriteRejection,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Validation and constraint failures are
/// raised by services without knowing which endpoint called them; controllers turn
/// them into a `Rejected` variant with `into_create_rejection` or
/// `into_update_rejection` so the status code matches the kind of write.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side
    /// unless a controller converted it into a write rejection first.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Field validator refused a value.
    ///
    /// Results in 400 Bad Request when not converted by the controller.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A write referenced a row that does not exist.
    ///
    /// Results in 400 Bad Request when not converted by the controller.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// Create or update refused on the write path.
    ///
    /// Delegates to `WriteRejection::into_response()` (406 or 405).
    #[error(transparent)]
    Rejected(#[from] WriteRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the message in an `error` field.
    #[error("{0}")]
    NotFound(String),

    /// Resource not found on a delete endpoint.
    ///
    /// Results in 404 Not Found with the message in a `message` field.
    #[error("{0}")]
    NothingToDelete(String),
}

impl AppError {
    /// Turns a failed create into a 406 rejection carrying the failure's message.
    ///
    /// Validation, constraint and database errors are all refusals of the write;
    /// any other variant is returned unchanged.
    pub fn into_create_rejection(self) -> Self {
        match self.rejection_message() {
            Ok(msg) => {
                tracing::debug!("Create rejected: {}", msg);
                Self::Rejected(WriteRejection::Create(msg))
            }
            Err(err) => err,
        }
    }

    /// Turns a failed update into a 405 rejection carrying the failure's message.
    pub fn into_update_rejection(self) -> Self {
        match self.rejection_message() {
            Ok(msg) => {
                tracing::debug!("Update rejected: {}", msg);
                Self::Rejected(WriteRejection::Update(msg))
            }
            Err(err) => err,
        }
    }

    fn rejection_message(self) -> Result<String, Self> {
        match self {
            Self::Validation(err) => Ok(err.to_string()),
            Self::Constraint(err) => Ok(err.to_string()),
            Self::DbErr(err) => Ok(err.to_string()),
            err => Err(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For unconverted `Validation` / `Constraint` variants
/// - 404 Not Found - For `NotFound` and `NothingToDelete`
/// - 405 / 406 - For `Rejected`, delegated to `WriteRejection::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Rejected(err) => err.into_response(),
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::Constraint(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NothingToDelete(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageDto { message: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
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
