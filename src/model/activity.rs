use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Activity without its signups, as listed by `GET /activities` and nested
/// under a signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivitySummaryDto {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
}
