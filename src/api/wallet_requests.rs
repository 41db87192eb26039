use axum::extract::{ Path, Query, State };
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::entity;
use crate::enums::{ WalletRequestStatus, WalletType };
use crate::error::{ AppError, Result };
use crate::services::{ CreateWalletRequest, CreatedWalletRequest };

use super::extract::{ AdminUser, AuthUser };
use super::AppState;

#[derive(Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub address: Option<String>,
    pub network: String,
    pub wallet_type: WalletType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub min_amount: Option<Decimal>,
    #[serde(default)]
    pub max_amount: Option<Decimal>,
    #[serde(default)]
    pub daily_limit: Option<Decimal>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

#[derive(Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub status: Option<WalletRequestStatus>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveAction {
    Approve,
    Reject,
}

#[derive(Deserialize)]
pub struct ResolveRequest {
    pub action: ResolveAction,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(serde::Serialize)]
pub struct ResolvedResponse {
    pub request: entity::wallet_request::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<entity::wallet::Model>,
}

pub async fn create_my_request(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateRequest>
) -> Result<Json<CreatedWalletRequest>> {
    let created = state.wallet_request_service.create_for_user(user.id, CreateWalletRequest {
        address: request.address,
        network: request.network,
        wallet_type: request.wallet_type,
        description: request.description,
        min_amount: request.min_amount,
        max_amount: request.max_amount,
        daily_limit: request.daily_limit,
        amount: request.amount,
    }).await?;

    Ok(Json(created))
}

pub async fn list_my_requests(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>
) -> Result<Json<Vec<entity::wallet_request::Model>>> {
    let requests = state.wallet_request_service.list_for_user(user.id, query.status).await?;
    Ok(Json(requests))
}

pub async fn list_requests(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>
) -> Result<Json<Vec<entity::wallet_request::Model>>> {
    let requests = state.wallet_request_service.list_all(query.status).await?;
    Ok(Json(requests))
}

pub async fn resolve_request(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ResolveRequest>
) -> Result<Json<ResolvedResponse>> {
    match request.action {
        ResolveAction::Approve => {
            let (request, wallet) = state.wallet_request_service
                .approve(id, request.address).await?;
            Ok(Json(ResolvedResponse { request, wallet: Some(wallet) }))
        }
        ResolveAction::Reject => {
            if request.address.is_some() {
                return Err(
                    AppError::InvalidInput("An address cannot be set on rejection".to_string())
                );
            }
            let request = state.wallet_request_service.reject(id).await?;
            Ok(Json(ResolvedResponse { request, wallet: None }))
        }
    }
}
