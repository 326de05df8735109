use axum::http::StatusCode;

/// Tag for grouping service endpoints in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// Liveness endpoint answering with an empty body.
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Server is up")
    ),
)]
pub async fn home() -> StatusCode {
    StatusCode::OK
}
