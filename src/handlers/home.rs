use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Html};

const INDEX_TEMPLATE: &str = "index.html";

/// GET / handler - Render the home page
///
/// Reads `index.html` from the configured template directory on every
/// request, so the page can be edited without restarting the service.
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Rendered home page", body = String, content_type = "text/html"),
        (status = 500, description = "Template missing or unreadable", body = ErrorResponse)
    ),
    tag = "home"
)]
pub async fn home_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let path = state.config.template_dir.join(INDEX_TEMPLATE);

    let page = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| ApiError::TemplateNotFound(path.clone(), err))?;

    tracing::debug!("Rendered home page from {}", path.display());
    Ok(Html(page))
}
