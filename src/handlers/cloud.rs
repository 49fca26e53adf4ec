use crate::env::{CLOUD_NAME, CLOUD_NAME_DEFAULT};
use crate::models::CloudResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /cloud handler - Report which cloud the service is deployed on
///
/// Resolves the `CLOUD_NAME` environment variable fresh on every request,
/// falling back to "unknown" when it is unset. Never fails.
#[utoipa::path(
    get,
    path = routes::CLOUD,
    responses(
        (status = 200, description = "Cloud name resolved", body = CloudResponse)
    ),
    tag = "cloud"
)]
pub async fn cloud_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<CloudResponse>) {
    let cloud = state.env.resolve(CLOUD_NAME, CLOUD_NAME_DEFAULT);

    tracing::debug!("Resolved cloud name: {}", cloud);
    (StatusCode::OK, Json(CloudResponse { cloud }))
}
