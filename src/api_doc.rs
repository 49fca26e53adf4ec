use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{CloudResponse, HealthResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "multicloud-web API",
        version = "1.0.0",
        description = "A minimal web service reporting which cloud it is deployed on"
    ),
    paths(
        handlers::home::home_handler,
        handlers::health::health_handler,
        handlers::cloud::cloud_handler
    ),
    components(
        schemas(
            HealthResponse,
            CloudResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "home", description = "Home page"),
        (name = "health", description = "Health check operations"),
        (name = "cloud", description = "Cloud environment reporting")
    )
)]
pub struct ApiDoc;
