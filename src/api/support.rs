use axum::extract::{ Path, State };
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::entity;
use crate::enums::TicketStatus;
use crate::error::Result;

use super::extract::{ AdminUser, AuthUser };
use super::AppState;

#[derive(Deserialize)]
pub struct CreateTicketRequest {
    pub title: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct ReplyRequest {
    pub response: String,
    #[serde(default)]
    pub status: Option<TicketStatus>,
}

pub async fn create_my_ticket(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateTicketRequest>
) -> Result<Json<entity::support_ticket::Model>> {
    let ticket = state.support_service
        .create_for_user(user.id, request.title, request.message).await?;

    Ok(Json(ticket))
}

pub async fn list_my_tickets(
    AuthUser(user): AuthUser,
    State(state): State<AppState>
) -> Result<Json<Vec<entity::support_ticket::Model>>> {
    let tickets = state.support_service.list_for_user(user.id).await?;
    Ok(Json(tickets))
}

pub async fn get_my_ticket(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>
) -> Result<Json<entity::support_ticket::Model>> {
    let ticket = state.support_service.get_for_user(user.id, id).await?;
    Ok(Json(ticket))
}

pub async fn list_tickets(
    _admin: AdminUser,
    State(state): State<AppState>
) -> Result<Json<Vec<entity::support_ticket::Model>>> {
    let tickets = state.support_service.list_all().await?;
    Ok(Json(tickets))
}

pub async fn reply_to_ticket(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReplyRequest>
) -> Result<Json<entity::support_ticket::Model>> {
    let ticket = state.support_service.reply(id, request.response, request.status).await?;
    Ok(Json(ticket))
}
