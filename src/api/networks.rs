use axum::extract::{ Path, Query, State };
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::entity;
use crate::error::Result;
use crate::services::PairWithNetworks;

use super::extract::{ AdminUser, AuthUser };
use super::AppState;

#[derive(Deserialize)]
pub struct CreateNetworkRequest {
    pub name: String,
    pub display_name: String,
}

#[derive(Deserialize)]
pub struct UpdateNetworkRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreatePairRequest {
    pub from_network_id: Uuid,
    pub to_network_id: Uuid,
    #[serde(default)]
    pub profit_percent: Option<Decimal>,
}

#[derive(Deserialize)]
pub struct UpdatePairRequest {
    #[serde(default)]
    pub profit_percent: Option<Decimal>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub active_only: Option<bool>,
}

pub async fn list_networks(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>
) -> Result<Json<Vec<entity::network::Model>>> {
    let networks = state.network_service.list(query.active_only.unwrap_or(false)).await?;
    Ok(Json(networks))
}

pub async fn create_network(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(request): Json<CreateNetworkRequest>
) -> Result<Json<entity::network::Model>> {
    let network = state.network_service.create(request.name, request.display_name).await?;
    Ok(Json(network))
}

pub async fn update_network(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateNetworkRequest>
) -> Result<Json<entity::network::Model>> {
    let network = state.network_service
        .update(id, request.display_name, request.is_active).await?;
    Ok(Json(network))
}

pub async fn delete_network(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<serde_json::Value>> {
    state.network_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// User-facing arbitrage routes: active pairs only.
pub async fn list_active_pairs(
    _user: AuthUser,
    State(state): State<AppState>
) -> Result<Json<Vec<PairWithNetworks>>> {
    let pairs = state.network_service.list_pairs(true).await?;
    Ok(Json(pairs))
}

pub async fn list_pairs(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>
) -> Result<Json<Vec<PairWithNetworks>>> {
    let pairs = state.network_service.list_pairs(query.active_only.unwrap_or(false)).await?;
    Ok(Json(pairs))
}

pub async fn create_pair(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(request): Json<CreatePairRequest>
) -> Result<Json<entity::network_pair::Model>> {
    let pair = state.network_service
        .create_pair(
            request.from_network_id,
            request.to_network_id,
            request.profit_percent.unwrap_or(Decimal::ZERO)
        ).await?;
    Ok(Json(pair))
}

pub async fn update_pair(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePairRequest>
) -> Result<Json<entity::network_pair::Model>> {
    let pair = state.network_service
        .update_pair(id, request.profit_percent, request.is_active).await?;
    Ok(Json(pair))
}

pub async fn delete_pair(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<serde_json::Value>> {
    state.network_service.delete_pair(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
