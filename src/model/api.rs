use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by most failing requests.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body returned by delete endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
