use serde::{Deserialize, Serialize};

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for the cloud echo endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CloudResponse {
    pub cloud: String,
}
