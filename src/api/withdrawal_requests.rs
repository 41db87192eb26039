use axum::extract::{ Path, State };
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::entity;
use crate::enums::WithdrawalStatus;
use crate::error::{ AppError, Result };
use crate::services::WithdrawalWithEarnings;

use super::extract::{ AdminUser, AuthUser };
use super::AppState;

#[derive(Deserialize)]
pub struct CreateWithdrawalRequest {
    pub wallet_id: Uuid,
    pub amount: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    Approve,
    UpdatePayment,
    Complete,
    Reject,
}

#[derive(Deserialize)]
pub struct AdminUpdateRequest {
    pub action: AdminAction,
    #[serde(default)]
    pub paid_amount: Option<Decimal>,
    #[serde(default)]
    pub profit: Option<Decimal>,
    #[serde(default)]
    pub admin_notes: Option<String>,
}

pub async fn create_my_request(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateWithdrawalRequest>
) -> Result<Json<entity::withdrawal_request::Model>> {
    let created = state.withdrawal_service
        .create_for_user(user.id, request.wallet_id, request.amount).await?;

    Ok(Json(created))
}

pub async fn list_my_requests(
    AuthUser(user): AuthUser,
    State(state): State<AppState>
) -> Result<Json<Vec<WithdrawalWithEarnings>>> {
    let requests = state.withdrawal_service.list_for_user(user.id).await?;
    Ok(Json(requests))
}

pub async fn get_my_request(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<WithdrawalWithEarnings>> {
    let request = state.withdrawal_service.get_for_user(user.id, id).await?;
    Ok(Json(request))
}

pub async fn list_requests(
    _admin: AdminUser,
    State(state): State<AppState>
) -> Result<Json<Vec<WithdrawalWithEarnings>>> {
    let requests = state.withdrawal_service.list_all().await?;
    Ok(Json(requests))
}

pub async fn update_request(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AdminUpdateRequest>
) -> Result<Json<entity::withdrawal_request::Model>> {
    let updated = match request.action {
        AdminAction::Approve => {
            state.withdrawal_service.update_status(id, WithdrawalStatus::InWork).await?
        }
        AdminAction::UpdatePayment => {
            let paid = request.paid_amount.ok_or_else(|| {
                AppError::InvalidInput("paid_amount is required".to_string())
            })?;
            state.withdrawal_service
                .record_payment(id, paid, request.profit, request.admin_notes).await?
        }
        AdminAction::Complete => {
            state.withdrawal_service.update_status(id, WithdrawalStatus::Completed).await?
        }
        AdminAction::Reject => {
            state.withdrawal_service.update_status(id, WithdrawalStatus::Rejected).await?
        }
    };

    Ok(Json(updated))
}
