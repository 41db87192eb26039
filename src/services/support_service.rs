use std::sync::Arc;

use uuid::Uuid;

use crate::db::{ entity, SupportRepository };
use crate::enums::TicketStatus;
use crate::error::{ AppError, Result };

pub struct SupportService {
    support: Arc<SupportRepository>,
}

impl SupportService {
    pub fn new(support: Arc<SupportRepository>) -> Self {
        Self { support }
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        title: String,
        message: String
    ) -> Result<entity::support_ticket::Model> {
        let title = title.trim().to_string();
        let message = message.trim().to_string();
        if title.is_empty() {
            return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
        }
        if message.is_empty() {
            return Err(AppError::InvalidInput("Message cannot be empty".to_string()));
        }

        self.support.create(user_id, title, message).await
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid
    ) -> Result<Vec<entity::support_ticket::Model>> {
        self.support.find_by_user(user_id).await
    }

    pub async fn get_for_user(
        &self,
        user_id: Uuid,
        ticket_id: Uuid
    ) -> Result<entity::support_ticket::Model> {
        let ticket = self.support.find_by_id(ticket_id).await?;
        if ticket.user_id != user_id {
            return Err(AppError::NotFound("Support ticket"));
        }
        Ok(ticket)
    }

    pub async fn list_all(&self) -> Result<Vec<entity::support_ticket::Model>> {
        self.support.find_all().await
    }

    /// Admin reply: the response is appended to the ticket thread and
    /// the status moves on, to in_progress unless told otherwise.
    pub async fn reply(
        &self,
        ticket_id: Uuid,
        response: String,
        status: Option<TicketStatus>
    ) -> Result<entity::support_ticket::Model> {
        let response = response.trim().to_string();
        if response.is_empty() {
            return Err(AppError::InvalidInput("Response cannot be empty".to_string()));
        }

        let ticket = self.support.find_by_id(ticket_id).await?;
        let message = format!("{}\n\n--- Admin reply ---\n{}", ticket.message, response);
        let status = status.unwrap_or(TicketStatus::InProgress);

        self.support.update(ticket, message, status).await
    }
}
