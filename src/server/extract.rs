//! Request extractors shared by the write handlers.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::{Map, Value};

use crate::server::error::validation::ValidationError;

/// A JSON request body whose fields are assigned one by one.
///
/// Extraction never fails: a body that is not JSON, or is JSON but not an
/// object, is kept as a `ValidationError` and only raised when the service
/// reads the fields. Endpoints that look a row up first therefore still answer
/// 404 for a missing id, and write failures go through the same rejection
/// mapping as validator failures.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonObject(Result<Map<String, Value>, ValidationError>);

impl JsonObject {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(Ok(fields)),
            _ => Self(Err(ValidationError::NotAnObject)),
        }
    }

    /// The body's fields in the order the client sent them.
    pub fn fields(&self) -> Result<&Map<String, Value>, ValidationError> {
        self.0.as_ref().map_err(Clone::clone)
    }
}

impl<S: Send + Sync> FromRequest<S> for JsonObject {
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self::from_value(value)),
            Err(rejection) => {
                tracing::debug!("Unreadable request body: {}", rejection.body_text());
                Ok(Self(Err(ValidationError::MalformedBody(
                    rejection.body_text(),
                ))))
            }
        }
    }
}
