use chrono::Utc;
use sea_orm::{ entity::prelude::*, DatabaseConnection, QueryOrder, Set, TransactionTrait };
use uuid::Uuid;

use crate::enums::DepositStatus;
use crate::error::{ AppError, Result };
use crate::db::entity;

pub struct DepositRequestRepository {
    db: DatabaseConnection,
}

impl DepositRequestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        amount: Decimal,
        from_network: String,
        to_network: String,
        admin_wallet_address: Option<String>
    ) -> Result<entity::deposit_request::Model> {
        let now = Utc::now();
        let request = entity::deposit_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            amount: Set(amount),
            from_network: Set(from_network),
            to_network: Set(to_network),
            admin_wallet_address: Set(admin_wallet_address),
            status: Set(DepositStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let request = request.insert(&self.db).await?;
        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<entity::deposit_request::Model> {
        entity::deposit_request::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("Deposit request"))
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid
    ) -> Result<Vec<entity::deposit_request::Model>> {
        let requests = entity::deposit_request::Entity
            ::find()
            .filter(entity::deposit_request::Column::UserId.eq(user_id))
            .order_by_desc(entity::deposit_request::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(requests)
    }

    pub async fn find_all(&self) -> Result<Vec<entity::deposit_request::Model>> {
        let requests = entity::deposit_request::Entity
            ::find()
            .order_by_desc(entity::deposit_request::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(requests)
    }

    pub async fn update_status(
        &self,
        request: entity::deposit_request::Model,
        status: DepositStatus
    ) -> Result<entity::deposit_request::Model> {
        let mut model: entity::deposit_request::ActiveModel = request.into();
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now());

        let request = model.update(&self.db).await?;
        Ok(request)
    }

    /// Mark a deposit COMPLETED and credit its amount to the user's
    /// paid-in insurance total, in one transaction. The conditional
    /// update only fires while the request is still open, so a request
    /// can be completed (and credited) at most once.
    pub async fn complete(&self, request_id: Uuid) -> Result<entity::deposit_request::Model> {
        let txn = self.db.begin().await?;

        let open = [DepositStatus::Pending.as_str(), DepositStatus::Processing.as_str()];
        let result = entity::deposit_request::Entity
            ::update_many()
            .col_expr(
                entity::deposit_request::Column::Status,
                sea_orm::sea_query::Expr::value(DepositStatus::Completed.as_str())
            )
            .col_expr(
                entity::deposit_request::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now())
            )
            .filter(entity::deposit_request::Column::Id.eq(request_id))
            .filter(entity::deposit_request::Column::Status.is_in(open))
            .exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(AppError::Conflict("Deposit request already resolved".to_string()));
        }

        let request = entity::deposit_request::Entity
            ::find_by_id(request_id)
            .one(&txn).await?
            .ok_or(AppError::NotFound("Deposit request"))?;

        let user = entity::user::Entity
            ::find_by_id(request.user_id)
            .one(&txn).await?
            .ok_or(AppError::NotFound("User"))?;

        let paid = user.insurance_deposit_paid + request.amount;
        let mut user_model: entity::user::ActiveModel = user.into();
        user_model.insurance_deposit_paid = Set(paid);
        user_model.updated_at = Set(Utc::now());
        user_model.update(&txn).await?;

        txn.commit().await?;
        Ok(request)
    }

    /// Admin assigns (or corrects) the receiving wallet and the amount.
    pub async fn assign(
        &self,
        request: entity::deposit_request::Model,
        admin_wallet_address: Option<String>,
        amount: Option<Decimal>
    ) -> Result<entity::deposit_request::Model> {
        let mut model: entity::deposit_request::ActiveModel = request.into();
        if let Some(address) = admin_wallet_address {
            model.admin_wallet_address = Set(Some(address));
        }
        if let Some(amount) = amount {
            model.amount = Set(amount);
        }
        model.updated_at = Set(Utc::now());

        let request = model.update(&self.db).await?;
        Ok(request)
    }
}
