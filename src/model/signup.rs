use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{activity::ActivitySummaryDto, camper::CamperSummaryDto};

/// Signup with whichever side of the join its parent did not already expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    #[serde(default)]
    pub camper: Option<CamperSummaryDto>,
    #[serde(default)]
    pub activity: Option<ActivitySummaryDto>,
}

/// Body of `POST /signups`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSignupDto {
    /// Hour of the day, between 0 and 23.
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}
