use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{activity, camper, home, signup},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "camper", description = "Campers and their signups"),
    (name = "activity", description = "Activities offered at camp"),
    (name = "signup", description = "Campers signed up for activities"),
    (name = "home", description = "Service status")
))]
pub struct ApiDoc;

/// Builds the API routes and serves their OpenAPI document at
/// `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(home::home))
        .routes(routes!(camper::get_campers, camper::create_camper))
        .routes(routes!(camper::get_camper_by_id, camper::update_camper))
        .routes(routes!(activity::get_activities))
        .routes(routes!(activity::delete_activity))
        .routes(routes!(signup::create_signup))
        .split_for_parts();

    router.route(
        "/api-docs/openapi.json",
        get(move || std::future::ready(Json(api.clone()))),
    )
}
