use chrono::{ Duration, Utc };
use sea_orm::{ entity::prelude::*, DatabaseConnection, QueryOrder, Set };
use uuid::Uuid;

use crate::enums::{ Role, UserStatus };
use crate::error::{ AppError, Result };
use crate::db::entity;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a not-yet-registered user carrying an admin-issued invite token.
    pub async fn create_invited(
        &self,
        invite_token: String,
        role: Role,
        insurance_deposit_amount: Option<Decimal>,
        referral_code_used: Option<String>
    ) -> Result<entity::user::Model> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(None),
            password_hash: Set(None),
            invite_token: Set(invite_token),
            role: Set(role.as_str().to_string()),
            status: Set(UserStatus::Pending.as_str().to_string()),
            balance: Set(Decimal::ZERO),
            insurance_deposit_amount: Set(insurance_deposit_amount),
            insurance_deposit_paid: Set(Decimal::ZERO),
            referral_code_used: Set(referral_code_used),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let user = user.insert(&self.db).await?;
        Ok(user)
    }

    /// Create a fully registered user in one step (bootstrap admin).
    pub async fn create_registered(
        &self,
        email: String,
        password_hash: String,
        invite_token: String,
        role: Role
    ) -> Result<entity::user::Model> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(Some(email)),
            password_hash: Set(Some(password_hash)),
            invite_token: Set(invite_token),
            role: Set(role.as_str().to_string()),
            status: Set(UserStatus::Active.as_str().to_string()),
            balance: Set(Decimal::ZERO),
            insurance_deposit_amount: Set(None),
            insurance_deposit_paid: Set(Decimal::ZERO),
            referral_code_used: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let user = user.insert(&self.db).await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<entity::user::Model> {
        entity::user::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("User"))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>> {
        let user = entity::user::Entity
            ::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db).await?;

        Ok(user)
    }

    pub async fn find_by_invite_token(&self, token: &str) -> Result<Option<entity::user::Model>> {
        let user = entity::user::Entity
            ::find()
            .filter(entity::user::Column::InviteToken.eq(token))
            .one(&self.db).await?;

        Ok(user)
    }

    pub async fn find_any_admin(&self) -> Result<Option<entity::user::Model>> {
        let admin = entity::user::Entity
            ::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .one(&self.db).await?;

        Ok(admin)
    }

    pub async fn find_all(&self) -> Result<Vec<entity::user::Model>> {
        let users = entity::user::Entity
            ::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(users)
    }

    /// Turn a PENDING invited user into an ACTIVE registered one.
    pub async fn activate(
        &self,
        user: entity::user::Model,
        email: String,
        password_hash: String
    ) -> Result<entity::user::Model> {
        let mut model: entity::user::ActiveModel = user.into();
        model.email = Set(Some(email));
        model.password_hash = Set(Some(password_hash));
        model.status = Set(UserStatus::Active.as_str().to_string());
        model.updated_at = Set(Utc::now());

        let user = model.update(&self.db).await?;
        Ok(user)
    }

    pub async fn update_status(
        &self,
        user: entity::user::Model,
        status: UserStatus
    ) -> Result<entity::user::Model> {
        let mut model: entity::user::ActiveModel = user.into();
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now());

        let user = model.update(&self.db).await?;
        Ok(user)
    }

    pub async fn update_insurance_amount(
        &self,
        user: entity::user::Model,
        amount: Option<Decimal>
    ) -> Result<entity::user::Model> {
        let mut model: entity::user::ActiveModel = user.into();
        model.insurance_deposit_amount = Set(amount);
        model.updated_at = Set(Utc::now());

        let user = model.update(&self.db).await?;
        Ok(user)
    }

    // ─── Sessions ────────────────────────────────────────────────────

    pub async fn create_session(
        &self,
        user_id: Uuid,
        token_hash: String,
        ttl_hours: i64
    ) -> Result<entity::session::Model> {
        let now = Utc::now();
        let session = entity::session::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token_hash: Set(token_hash),
            expires_at: Set(now + Duration::hours(ttl_hours)),
            created_at: Set(now),
        };

        let session = session.insert(&self.db).await?;
        Ok(session)
    }

    /// Resolve a session token hash to its user; expired sessions do not count.
    pub async fn find_user_by_session(
        &self,
        token_hash: &str
    ) -> Result<Option<entity::user::Model>> {
        let session = entity::session::Entity
            ::find()
            .filter(entity::session::Column::TokenHash.eq(token_hash))
            .filter(entity::session::Column::ExpiresAt.gt(Utc::now()))
            .one(&self.db).await?;

        let Some(session) = session else {
            return Ok(None);
        };

        let user = entity::user::Entity::find_by_id(session.user_id).one(&self.db).await?;
        Ok(user)
    }

    pub async fn delete_session(&self, token_hash: &str) -> Result<()> {
        entity::session::Entity
            ::delete_many()
            .filter(entity::session::Column::TokenHash.eq(token_hash))
            .exec(&self.db).await?;

        Ok(())
    }
}
