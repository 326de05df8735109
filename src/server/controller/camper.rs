use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::{
    model::{
        api::ErrorDto,
        camper::{CamperDto, CamperSummaryDto, CreateCamperDto, UpdateCamperDto},
    },
    server::{
        error::AppError,
        extract::JsonObject,
        model::graph::EntityGraph,
        serialize::{to_list, SerializeRules},
        service::camper::CamperService,
        state::AppState,
    },
};

/// Tag for grouping camper endpoints in OpenAPI documentation
pub static CAMPER_TAG: &str = "camper";

/// List all campers.
///
/// Campers are returned without their signups.
///
/// # Returns
/// - `200 OK` - Array of campers ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers",
    tag = CAMPER_TAG,
    responses(
        (status = 200, description = "All campers", body = Vec<CamperSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let campers = CamperService::new(&state.db).get_all().await?;

    let body = to_list(
        &campers,
        &EntityGraph::new(),
        &SerializeRules::exclude(["signups"]),
    );

    Ok((StatusCode::OK, Json(body)))
}

/// Get a camper with its signups.
///
/// Each signup carries its activity; the camper is not repeated inside its
/// own signups.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Camper id
///
/// # Returns
/// - `200 OK` - The camper
/// - `404 Not Found` - No camper with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper id")
    ),
    responses(
        (status = 200, description = "The camper with its signups", body = CamperDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camper_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|_| camper_not_found())?;

    let camper = CamperService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(camper_not_found)?;

    Ok((StatusCode::OK, Json(camper.to_dict(&SerializeRules::new()))))
}

/// Create a camper.
///
/// The body may only contain `name` and `age`; both are required and the age
/// must lie between 8 and 18.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Camper fields
///
/// # Returns
/// - `201 Created` - The created camper
/// - `406 Not Acceptable` - Missing, unknown or invalid field, or the insert failed
#[utoipa::path(
    post,
    path = "/campers",
    tag = CAMPER_TAG,
    request_body = CreateCamperDto,
    responses(
        (status = 201, description = "Successfully created camper", body = CamperDto),
        (status = 406, description = "Camper refused", body = ErrorDto)
    ),
)]
pub async fn create_camper(
    State(state): State<AppState>,
    payload: JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let camper = CamperService::new(&state.db)
        .create(&payload)
        .await
        .map_err(AppError::into_create_rejection)?;

    Ok((
        StatusCode::CREATED,
        Json(camper.to_dict(&SerializeRules::new())),
    ))
}

/// Update some fields of a camper.
///
/// Fields left out of the body keep their value. If any supplied field is
/// refused nothing is written.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Camper id
/// - `payload` - Fields to change
///
/// # Returns
/// - `202 Accepted` - The updated camper
/// - `404 Not Found` - No camper with that id
/// - `405 Method Not Allowed` - A supplied field was refused
#[utoipa::path(
    patch,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper id")
    ),
    request_body = UpdateCamperDto,
    responses(
        (status = 202, description = "Successfully updated camper", body = CamperDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 405, description = "Update refused", body = ErrorDto)
    ),
)]
pub async fn update_camper(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|_| camper_not_found())?;

    let camper = CamperService::new(&state.db)
        .update(id, &payload)
        .await
        .map_err(AppError::into_update_rejection)?
        .ok_or_else(camper_not_found)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(camper.to_dict(&SerializeRules::new())),
    ))
}

/// Answer for an id that does not name a camper, including ids that are not
/// numbers at all.
fn camper_not_found() -> AppError {
    AppError::NotFound("Camper not found".to_string())
}
