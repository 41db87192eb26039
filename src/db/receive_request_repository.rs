use chrono::Utc;
use sea_orm::{ entity::prelude::*, DatabaseConnection, QueryOrder, Set, TransactionTrait };
use uuid::Uuid;

use crate::enums::{ ReceiveStatus, TxDirection, TxStatus };
use crate::error::{ AppError, Result };
use crate::db::entity;
use crate::db::wallet_repository::{ append_ledger, LedgerEntry };

pub struct ReceiveRequestRepository {
    db: DatabaseConnection,
}

impl ReceiveRequestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        wallet_id: Uuid,
        amount: Decimal
    ) -> Result<entity::receive_request::Model> {
        let now = Utc::now();
        let request = entity::receive_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            wallet_id: Set(wallet_id),
            amount: Set(amount),
            status: Set(ReceiveStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let request = request.insert(&self.db).await?;
        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<entity::receive_request::Model> {
        entity::receive_request::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("Receive request"))
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid
    ) -> Result<Vec<entity::receive_request::Model>> {
        let requests = entity::receive_request::Entity
            ::find()
            .filter(entity::receive_request::Column::UserId.eq(user_id))
            .order_by_desc(entity::receive_request::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(requests)
    }

    pub async fn find_all(&self) -> Result<Vec<entity::receive_request::Model>> {
        let requests = entity::receive_request::Entity
            ::find()
            .order_by_desc(entity::receive_request::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(requests)
    }

    /// Any request still occupying the wallet (PENDING/READY/PROCESSING).
    pub async fn find_active_by_wallet(
        &self,
        wallet_id: Uuid
    ) -> Result<Option<entity::receive_request::Model>> {
        let request = entity::receive_request::Entity
            ::find()
            .filter(entity::receive_request::Column::WalletId.eq(wallet_id))
            .filter(entity::receive_request::Column::Status.is_in(ReceiveStatus::active()))
            .one(&self.db).await?;

        Ok(request)
    }

    pub async fn update_status(
        &self,
        request: entity::receive_request::Model,
        status: ReceiveStatus
    ) -> Result<entity::receive_request::Model> {
        let mut model: entity::receive_request::ActiveModel = request.into();
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now());

        let request = model.update(&self.db).await?;
        Ok(request)
    }

    /// Credit an incoming transfer: bump the wallet and user balances,
    /// append an INCOMING ledger row and mark the request COMPLETED,
    /// all in one transaction.
    pub async fn credit(
        &self,
        request: entity::receive_request::Model,
        amount: Decimal
    ) -> Result<entity::receive_request::Model> {
        let txn = self.db.begin().await?;

        let wallet = entity::wallet::Entity
            ::find_by_id(request.wallet_id)
            .one(&txn).await?
            .ok_or(AppError::NotFound("Wallet"))?;

        let new_balance = wallet.balance + amount;
        let address = wallet.address.clone();
        let mut wallet_model: entity::wallet::ActiveModel = wallet.into();
        wallet_model.balance = Set(new_balance);
        wallet_model.updated_at = Set(Utc::now());
        wallet_model.update(&txn).await?;

        let user = entity::user::Entity
            ::find_by_id(request.user_id)
            .one(&txn).await?
            .ok_or(AppError::NotFound("User"))?;

        let user_balance = user.balance + amount;
        let mut user_model: entity::user::ActiveModel = user.into();
        user_model.balance = Set(user_balance);
        user_model.updated_at = Set(Utc::now());
        user_model.update(&txn).await?;

        append_ledger(&txn, request.wallet_id, LedgerEntry {
            direction: TxDirection::Incoming,
            amount,
            balance: new_balance,
            status: TxStatus::Completed,
            hash: format!("RECEIVE_{}_{}", request.id, Utc::now().timestamp_millis()),
            from_address: None,
            to_address: address,
        }).await?;

        let mut model: entity::receive_request::ActiveModel = request.into();
        model.status = Set(ReceiveStatus::Completed.as_str().to_string());
        model.updated_at = Set(Utc::now());
        let request = model.update(&txn).await?;

        txn.commit().await?;
        Ok(request)
    }
}
