use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::signup::SignupDto;

/// Camper without its signups, as listed by `GET /campers` and nested under a
/// signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperSummaryDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Camper with its signups; each signup carries its activity but not the camper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CamperDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub signups: Vec<SignupDto>,
}

/// Body of `POST /campers`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCamperDto {
    pub name: String,
    /// Must be between 8 and 18.
    pub age: i32,
}

/// Body of `PATCH /campers/{id}`; omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCamperDto {
    pub name: Option<String>,
    /// Must be between 8 and 18.
    pub age: Option<i32>,
}
