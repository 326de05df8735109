use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A create or update that was refused after reaching the write path.
///
/// Carries the message of whatever caused the refusal (validator, missing
/// reference or database error). The status code depends on which kind of
/// write was refused.
#[derive(Error, Debug)]
pub enum WriteRejection {
    /// Refused create. Results in 406 Not Acceptable.
    #[error("{0}")]
    Create(String),

    /// Refused partial update. Results in 405 Method Not Allowed.
    #[error("{0}")]
    Update(String),
}

/// Converts write rejections into HTTP responses.
///
/// # Returns
/// - 406 Not Acceptable - For `Create`
/// - 405 Method Not Allowed - For `Update`
impl IntoResponse for WriteRejection {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Create(msg) => (StatusCode::NOT_ACCEPTABLE, msg),
            Self::Update(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
