use axum::extract::{ Path, State };
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::entity;
use crate::enums::ReceiveStatus;
use crate::error::Result;

use super::extract::{ AdminUser, AuthUser };
use super::AppState;

#[derive(Deserialize)]
pub struct CreateReceiveRequest {
    pub wallet_id: Uuid,
    pub amount: Decimal,
}

#[derive(Deserialize)]
pub struct UpdateReceiveRequest {
    pub status: ReceiveStatus,
    /// Overrides the requested amount when the actual transfer differs.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

pub async fn create_my_request(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateReceiveRequest>
) -> Result<Json<entity::receive_request::Model>> {
    let created = state.receive_service
        .create_for_user(user.id, request.wallet_id, request.amount).await?;

    Ok(Json(created))
}

pub async fn list_my_requests(
    AuthUser(user): AuthUser,
    State(state): State<AppState>
) -> Result<Json<Vec<entity::receive_request::Model>>> {
    let requests = state.receive_service.list_for_user(user.id).await?;
    Ok(Json(requests))
}

pub async fn list_requests(
    _admin: AdminUser,
    State(state): State<AppState>
) -> Result<Json<Vec<entity::receive_request::Model>>> {
    let requests = state.receive_service.list_all().await?;
    Ok(Json(requests))
}

pub async fn update_request(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReceiveRequest>
) -> Result<Json<entity::receive_request::Model>> {
    let updated = state.receive_service.update(id, request.status, request.amount).await?;
    Ok(Json(updated))
}
