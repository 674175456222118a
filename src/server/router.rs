//! Route table for the Star Wars API.
//!
//! Mounts the ten user, people, planet and favorite endpoints, the `GET /` sitemap built
//! from their OpenAPI paths, and Swagger UI. Trailing slashes are trimmed before API
//! routing so `/planets/` and `/planets` match the same handler.

use axum::{routing::get, Router};
use tower::Layer;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::{openapi, OpenApi};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::SitemapDto,
    server::{controller, model::app::AppState},
};

/// Builds the API router and the OpenAPI document describing it.
///
/// # Registered Endpoints
/// - `GET /users` - List users
/// - `GET /users/favorites` - List favorites of the user in the request body
/// - `GET /people` - List people
/// - `GET /people/{people_id}` - Get a person
/// - `GET /planets` - List planets
/// - `GET /planets/{planet_id}` - Get a planet
/// - `POST /favorite/planet/{planet_id}/{user_id}` - Favorite a planet
/// - `POST /favorite/people/{people_id}/{user_id}` - Favorite a person
/// - `DELETE /favorite/planet/{planet_id}` - Unfavorite a planet
/// - `DELETE /favorite/people/{people_id}` - Unfavorite a person
/// - `GET /` - Sitemap listing the paths above
///
/// Requests matching no route receive a 404 JSON body.
pub fn routes() -> (Router<AppState>, openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Star Wars API", description = "Star Wars people, planets and user favorites"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::people::PEOPLE_TAG, description = "People API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::people::get_people))
        .routes(routes!(controller::people::get_people_by_id))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet_by_id))
        .routes(routes!(controller::favorite::add_planet_favorite))
        .routes(routes!(controller::favorite::add_people_favorite))
        .routes(routes!(controller::favorite::delete_planet_favorite))
        .routes(routes!(controller::favorite::delete_people_favorite))
        .split_for_parts();

    let sitemap = SitemapDto::from_openapi(&api);

    let routes = routes
        .route(
            "/",
            get(move || controller::sitemap::sitemap(sitemap.clone())),
        )
        .fallback(controller::not_found);

    (routes, api)
}

/// Builds the complete application for the given state.
///
/// Swagger UI is served at `/api/docs` with the OpenAPI document at
/// `/api/docs/openapi.json`. Every other request has its trailing slash stripped before
/// reaching the API routes, so `/people/` and `/people` hit the same handler. Swagger UI
/// is routed first since it redirects `/api/docs` to `/api/docs/` itself.
///
/// # Example
/// ```ignore
/// let app = app(AppState::from(db));
/// axum::serve(listener, app).await?;
/// ```
pub fn app(state: AppState) -> Router {
    let (routes, api) = routes();

    let api_service = NormalizePathLayer::trim_trailing_slash().layer(routes.with_state(state));

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback_service(api_service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
