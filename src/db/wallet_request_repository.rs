use chrono::Utc;
use sea_orm::{ entity::prelude::*, DatabaseConnection, QueryOrder, Set };
use uuid::Uuid;

use crate::enums::{ WalletRequestStatus, WalletType };
use crate::error::{ AppError, Result };
use crate::db::entity;

pub struct NewWalletRequest {
    pub user_id: Uuid,
    pub address: Option<String>,
    pub network: String,
    pub wallet_type: WalletType,
    pub description: Option<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub daily_limit: Option<Decimal>,
}

pub struct WalletRequestRepository {
    db: DatabaseConnection,
}

impl WalletRequestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewWalletRequest) -> Result<entity::wallet_request::Model> {
        let now = Utc::now();
        let request = entity::wallet_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.user_id),
            address: Set(new.address),
            network: Set(new.network),
            wallet_type: Set(new.wallet_type.as_str().to_string()),
            description: Set(new.description),
            min_amount: Set(new.min_amount),
            max_amount: Set(new.max_amount),
            daily_limit: Set(new.daily_limit),
            status: Set(WalletRequestStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let request = request.insert(&self.db).await?;
        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<entity::wallet_request::Model> {
        entity::wallet_request::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("Wallet request"))
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        status: Option<WalletRequestStatus>
    ) -> Result<Vec<entity::wallet_request::Model>> {
        let mut query = entity::wallet_request::Entity
            ::find()
            .filter(entity::wallet_request::Column::UserId.eq(user_id));

        if let Some(status) = status {
            query = query.filter(entity::wallet_request::Column::Status.eq(status.as_str()));
        }

        let requests = query
            .order_by_desc(entity::wallet_request::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(requests)
    }

    pub async fn find_all(
        &self,
        status: Option<WalletRequestStatus>
    ) -> Result<Vec<entity::wallet_request::Model>> {
        let mut query = entity::wallet_request::Entity::find();

        if let Some(status) = status {
            query = query.filter(entity::wallet_request::Column::Status.eq(status.as_str()));
        }

        let requests = query
            .order_by_desc(entity::wallet_request::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(requests)
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<u64> {
        use sea_orm::PaginatorTrait;

        let count = entity::wallet_request::Entity
            ::find()
            .filter(entity::wallet_request::Column::UserId.eq(user_id))
            .count(&self.db).await?;

        Ok(count)
    }

    pub async fn find_pending_by_address_for_user(
        &self,
        user_id: Uuid,
        address: &str
    ) -> Result<Option<entity::wallet_request::Model>> {
        let request = entity::wallet_request::Entity
            ::find()
            .filter(entity::wallet_request::Column::UserId.eq(user_id))
            .filter(entity::wallet_request::Column::Address.eq(address))
            .filter(
                entity::wallet_request::Column::Status.eq(WalletRequestStatus::Pending.as_str())
            )
            .one(&self.db).await?;

        Ok(request)
    }

    /// Latest APPROVED request for a user/network/type; used to derive a
    /// wallet's limits when the wallet row itself carries none.
    pub async fn find_latest_approved(
        &self,
        user_id: Uuid,
        network: &str,
        wallet_type: WalletType
    ) -> Result<Option<entity::wallet_request::Model>> {
        let request = entity::wallet_request::Entity
            ::find()
            .filter(entity::wallet_request::Column::UserId.eq(user_id))
            .filter(entity::wallet_request::Column::Network.eq(network))
            .filter(entity::wallet_request::Column::WalletType.eq(wallet_type.as_str()))
            .filter(
                entity::wallet_request::Column::Status.eq(WalletRequestStatus::Approved.as_str())
            )
            .order_by_desc(entity::wallet_request::Column::CreatedAt)
            .one(&self.db).await?;

        Ok(request)
    }

    /// Flip a PENDING request to `status`. The status filter makes the
    /// update conditional, so a request can only ever be resolved once
    /// even under concurrent admin actions.
    async fn resolve_pending<C: sea_orm::ConnectionTrait>(
        &self,
        conn: &C,
        request_id: Uuid,
        status: WalletRequestStatus
    ) -> Result<entity::wallet_request::Model> {
        let result = entity::wallet_request::Entity
            ::update_many()
            .col_expr(
                entity::wallet_request::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str())
            )
            .col_expr(
                entity::wallet_request::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now())
            )
            .filter(entity::wallet_request::Column::Id.eq(request_id))
            .filter(
                entity::wallet_request::Column::Status.eq(WalletRequestStatus::Pending.as_str())
            )
            .exec(conn).await?;

        ensure_resolved_once(result.rows_affected)?;

        entity::wallet_request::Entity
            ::find_by_id(request_id)
            .one(conn).await?
            .ok_or(AppError::NotFound("Wallet request"))
    }

    pub async fn reject(&self, request_id: Uuid) -> Result<entity::wallet_request::Model> {
        self.resolve_pending(&self.db, request_id, WalletRequestStatus::Rejected).await
    }

    /// Approve a PENDING request and create its ACTIVE wallet in one
    /// transaction. One request can never yield two wallets.
    pub async fn approve(
        &self,
        request_id: Uuid,
        address: String
    ) -> Result<(entity::wallet_request::Model, entity::wallet::Model)> {
        use sea_orm::TransactionTrait;

        let txn = self.db.begin().await?;

        let request = self
            .resolve_pending(&txn, request_id, WalletRequestStatus::Approved).await?;

        let now = Utc::now();
        let wallet_type: WalletType = request.wallet_type.parse()?;
        let wallet = entity::wallet::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(request.user_id),
            address: Set(Some(address)),
            network: Set(request.network.clone()),
            wallet_type: Set(wallet_type.as_str().to_string()),
            status: Set(crate::enums::WalletStatus::Active.as_str().to_string()),
            balance: Set(Decimal::ZERO),
            min_amount: Set(request.min_amount),
            max_amount: Set(request.max_amount),
            daily_limit: Set(request.daily_limit),
            monthly_limit: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let wallet = wallet.insert(&txn).await?;

        txn.commit().await?;
        Ok((request, wallet))
    }
}

/// The conditional update matches only a PENDING row. Zero rows means
/// another resolution already won.
fn ensure_resolved_once(rows_affected: u64) -> Result<()> {
    if rows_affected == 0 {
        return Err(AppError::Conflict("Request already resolved".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_resolution_wins() {
        assert!(ensure_resolved_once(1).is_ok());
    }

    #[test]
    fn test_second_resolution_is_a_conflict() {
        let err = ensure_resolved_once(0).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
