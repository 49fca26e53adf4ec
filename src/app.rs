use crate::api_doc::ApiDoc;
use crate::handlers::{cloud_handler, health_handler, home_handler};
use crate::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router once at startup.
///
/// Three fixed routes; anything else falls through to axum's default 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HOME, get(home_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::CLOUD, get(cloud_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
