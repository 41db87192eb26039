use axum::extract::{ Path, State };
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::entity;
use crate::enums::DepositStatus;
use crate::error::{ AppError, Result };

use super::extract::{ AdminUser, AuthUser };
use super::AppState;

#[derive(Deserialize)]
pub struct CreateDepositRequest {
    pub amount: Decimal,
    pub from_network: String,
    pub to_network: String,
}

#[derive(Deserialize)]
pub struct UserActionRequest {
    pub action: String,
}

#[derive(Deserialize)]
pub struct AdminUpdateRequest {
    #[serde(default)]
    pub status: Option<DepositStatus>,
    #[serde(default)]
    pub admin_wallet_address: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

pub async fn create_my_request(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateDepositRequest>
) -> Result<Json<entity::deposit_request::Model>> {
    let created = state.deposit_service
        .create_for_user(user.id, request.amount, request.from_network, request.to_network)
        .await?;

    Ok(Json(created))
}

pub async fn list_my_requests(
    AuthUser(user): AuthUser,
    State(state): State<AppState>
) -> Result<Json<Vec<entity::deposit_request::Model>>> {
    let requests = state.deposit_service.list_for_user(user.id).await?;
    Ok(Json(requests))
}

/// `{"action": "paid"}` after the user has sent the transfer.
pub async fn update_my_request(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UserActionRequest>
) -> Result<Json<entity::deposit_request::Model>> {
    if request.action != "paid" {
        return Err(AppError::InvalidInput(format!("Unknown action: {}", request.action)));
    }

    let updated = state.deposit_service.mark_paid(user.id, id).await?;
    Ok(Json(updated))
}

pub async fn list_requests(
    _admin: AdminUser,
    State(state): State<AppState>
) -> Result<Json<Vec<entity::deposit_request::Model>>> {
    let requests = state.deposit_service.list_all().await?;
    Ok(Json(requests))
}

pub async fn update_request(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AdminUpdateRequest>
) -> Result<Json<entity::deposit_request::Model>> {
    let updated = state.deposit_service
        .update(id, request.status, request.admin_wallet_address, request.amount).await?;

    Ok(Json(updated))
}
