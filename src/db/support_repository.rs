use chrono::Utc;
use sea_orm::{ entity::prelude::*, DatabaseConnection, QueryOrder, Set };
use uuid::Uuid;

use crate::enums::TicketStatus;
use crate::error::{ AppError, Result };
use crate::db::entity;

pub struct SupportRepository {
    db: DatabaseConnection,
}

impl SupportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        title: String,
        message: String
    ) -> Result<entity::support_ticket::Model> {
        let now = Utc::now();
        let ticket = entity::support_ticket::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            title: Set(title),
            message: Set(message),
            status: Set(TicketStatus::Open.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let ticket = ticket.insert(&self.db).await?;
        Ok(ticket)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<entity::support_ticket::Model> {
        entity::support_ticket::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("Support ticket"))
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<entity::support_ticket::Model>> {
        let tickets = entity::support_ticket::Entity
            ::find()
            .filter(entity::support_ticket::Column::UserId.eq(user_id))
            .order_by_desc(entity::support_ticket::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(tickets)
    }

    pub async fn find_all(&self) -> Result<Vec<entity::support_ticket::Model>> {
        let tickets = entity::support_ticket::Entity
            ::find()
            .order_by_desc(entity::support_ticket::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(tickets)
    }

    pub async fn update(
        &self,
        ticket: entity::support_ticket::Model,
        message: String,
        status: TicketStatus
    ) -> Result<entity::support_ticket::Model> {
        let mut model: entity::support_ticket::ActiveModel = ticket.into();
        model.message = Set(message);
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now());

        let ticket = model.update(&self.db).await?;
        Ok(ticket)
    }
}
