use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        activity::ActivitySummaryDto,
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        model::graph::EntityGraph,
        serialize::{to_list, SerializeRules},
        service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// List all activities without their signups.
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "All activities", body = Vec<ActivitySummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::new(&state.db).get_all().await?;

    let body = to_list(
        &activities,
        &EntityGraph::new(),
        &SerializeRules::exclude(["signups"]),
    );

    Ok((StatusCode::OK, Json(body)))
}

/// Delete an activity.
///
/// Every signup for the activity is deleted with it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Activity id
///
/// # Returns
/// - `204 No Content` - Activity and its signups deleted
/// - `404 Not Found` - No activity with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "Activity id")
    ),
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 404, description = "Activity not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Non-numeric ids cannot name an activity.
    let Path(id) = id.map_err(|_| activity_not_found())?;

    if !ActivityService::new(&state.db).delete(id).await? {
        return Err(activity_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

fn activity_not_found() -> AppError {
    AppError::NothingToDelete("Activity not found".to_string())
}
