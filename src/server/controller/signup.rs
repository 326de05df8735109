use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        signup::{CreateSignupDto, SignupDto},
    },
    server::{
        error::AppError, extract::JsonObject, serialize::SerializeRules,
        service::signup::SignupService, state::AppState,
    },
};

/// Tag for grouping signup endpoints in OpenAPI documentation
pub static SIGNUP_TAG: &str = "signup";

/// Sign a camper up for an activity.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - `time`, `camper_id` and `activity_id`
///
/// # Returns
/// - `201 Created` - The signup with its camper and activity
/// - `406 Not Acceptable` - Invalid time, unknown camper or activity, or the insert failed
#[utoipa::path(
    post,
    path = "/signups",
    tag = SIGNUP_TAG,
    request_body = CreateSignupDto,
    responses(
        (status = 201, description = "Successfully created signup", body = SignupDto),
        (status = 406, description = "Signup refused", body = ErrorDto)
    ),
)]
pub async fn create_signup(
    State(state): State<AppState>,
    payload: JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let signup = SignupService::new(&state.db)
        .create(&payload)
        .await
        .map_err(AppError::into_create_rejection)?;

    Ok((
        StatusCode::CREATED,
        Json(signup.to_dict(&SerializeRules::new())),
    ))
}
