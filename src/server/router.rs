//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa path definition, and the
//! collected document is served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in one `routes!` call so their method routers
/// are merged. The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive its state and the session layer.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Piste", description = "Ski resort catalog API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Health check"),
        (name = controller::resort::RESORT_TAG, description = "Resort catalog API routes"),
        (name = controller::trail::TRAIL_TAG, description = "Trail catalog API routes"),
        (name = controller::lift::LIFT_TAG, description = "Lift catalog API routes"),
        (name = controller::auth::AUTH_TAG, description = "Authentication and profile API routes"),
        (name = controller::user::USER_TAG, description = "Favorite and wishlist API routes"),
        (name = controller::review::REVIEW_TAG, description = "Resort review API routes"),
        (name = controller::weather::WEATHER_TAG, description = "Weather observation API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        // Resorts
        .routes(routes!(
            controller::resort::list_resorts,
            controller::resort::create_resort
        ))
        .routes(routes!(controller::resort::search_resorts))
        .routes(routes!(controller::resort::list_countries))
        .routes(routes!(controller::resort::get_resort))
        .routes(routes!(controller::resort::get_resort_trails))
        .routes(routes!(controller::resort::get_resort_lifts))
        .routes(routes!(controller::resort::get_resort_stats))
        // Trails
        .routes(routes!(controller::trail::list_trails))
        .routes(routes!(controller::trail::search_trails))
        .routes(routes!(controller::trail::get_difficulty_stats))
        .routes(routes!(controller::trail::get_trail_status_stats))
        .routes(routes!(controller::trail::get_trail))
        // Lifts
        .routes(routes!(controller::lift::list_lifts))
        .routes(routes!(controller::lift::search_lifts))
        .routes(routes!(controller::lift::get_aerialway_stats))
        .routes(routes!(controller::lift::get_lift_status_stats))
        .routes(routes!(controller::lift::get_lift))
        // Auth
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_me, controller::auth::update_me))
        // Saved resorts
        .routes(routes!(controller::user::get_favorites))
        .routes(routes!(
            controller::user::add_favorite,
            controller::user::remove_favorite
        ))
        .routes(routes!(controller::user::get_wishlist))
        .routes(routes!(
            controller::user::add_to_wishlist,
            controller::user::remove_from_wishlist
        ))
        // Reviews
        .routes(routes!(
            controller::review::list_reviews,
            controller::review::create_review
        ))
        .routes(routes!(controller::review::get_review_stats))
        .routes(routes!(controller::review::vote_review))
        .routes(routes!(controller::review::flag_review))
        .routes(routes!(controller::review::delete_review))
        // Weather
        .routes(routes!(
            controller::weather::get_current_weather,
            controller::weather::record_weather
        ))
        .routes(routes!(controller::weather::get_weather_history))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
