use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::error::Result;
use crate::services::BootstrapReport;

use super::extract::require_init_secret;
use super::AppState;

pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap
) -> Result<Json<serde_json::Value>> {
    require_init_secret(&headers, &state.init_db_secret)?;

    let created = state.bootstrap_service.create_admin().await?;
    Ok(Json(serde_json::json!({ "created": created })))
}

pub async fn init_database(
    State(state): State<AppState>,
    headers: HeaderMap
) -> Result<Json<BootstrapReport>> {
    require_init_secret(&headers, &state.init_db_secret)?;

    let report = state.bootstrap_service.init_database().await?;
    Ok(Json(report))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
