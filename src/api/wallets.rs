use axum::extract::{ Path, Query, State };
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::{ entity, NewWallet };
use crate::enums::{ WalletStatus, WalletType };
use crate::error::{ AppError, Result };
use crate::services::WalletListing;

use super::extract::{ AdminUser, AuthUser };
use super::AppState;

#[derive(Deserialize)]
pub struct DeleteWalletQuery {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct CreateWalletRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub address: Option<String>,
    pub network: String,
    pub wallet_type: WalletType,
    #[serde(default)]
    pub status: Option<WalletStatus>,
    #[serde(default)]
    pub min_amount: Option<Decimal>,
    #[serde(default)]
    pub max_amount: Option<Decimal>,
    #[serde(default)]
    pub daily_limit: Option<Decimal>,
    #[serde(default)]
    pub monthly_limit: Option<Decimal>,
}

#[derive(Deserialize)]
pub struct UpdateWalletRequest {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<WalletStatus>,
    /// Signed balance correction; positive credits, negative debits.
    #[serde(default)]
    pub adjust_balance: Option<Decimal>,
}

pub async fn list_my_wallets(
    AuthUser(user): AuthUser,
    State(state): State<AppState>
) -> Result<Json<WalletListing>> {
    let listing = state.wallet_service.list_for_user(user.id).await?;
    Ok(Json(listing))
}

pub async fn delete_my_wallet(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Query(query): Query<DeleteWalletQuery>
) -> Result<Json<serde_json::Value>> {
    state.wallet_service.delete_for_user(user.id, query.id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn list_my_wallet_transactions(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<Vec<entity::wallet_transaction::Model>>> {
    let transactions = state.wallet_service.transactions_for_user(user.id, id).await?;
    Ok(Json(transactions))
}

pub async fn list_wallets(
    _admin: AdminUser,
    State(state): State<AppState>
) -> Result<Json<Vec<entity::wallet::Model>>> {
    let wallets = state.wallet_service.list_all().await?;
    Ok(Json(wallets))
}

pub async fn create_wallet(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(request): Json<CreateWalletRequest>
) -> Result<Json<entity::wallet::Model>> {
    let wallet = state.wallet_service.create(NewWallet {
        user_id: request.user_id,
        address: request.address,
        network: request.network.trim().to_uppercase(),
        wallet_type: request.wallet_type,
        status: request.status.unwrap_or(WalletStatus::Active),
        min_amount: request.min_amount,
        max_amount: request.max_amount,
        daily_limit: request.daily_limit,
        monthly_limit: request.monthly_limit,
    }).await?;

    Ok(Json(wallet))
}

pub async fn update_wallet(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWalletRequest>
) -> Result<Json<entity::wallet::Model>> {
    if request.address.is_none() && request.status.is_none() && request.adjust_balance.is_none() {
        return Err(AppError::InvalidInput("Nothing to update".to_string()));
    }

    let mut wallet = state.wallet_service.update(id, request.address, request.status).await?;

    if let Some(delta) = request.adjust_balance {
        wallet = state.wallet_service.adjust_balance(id, delta).await?;
    }

    Ok(Json(wallet))
}

pub async fn delete_wallet(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<serde_json::Value>> {
    state.wallet_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
