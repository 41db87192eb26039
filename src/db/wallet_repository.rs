use chrono::Utc;
use sea_orm::{
    entity::prelude::*,
    ConnectionTrait,
    DatabaseConnection,
    QueryOrder,
    Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::enums::{ TxDirection, TxStatus, WalletStatus, WalletType };
use crate::error::{ AppError, Result };
use crate::db::entity;

pub struct NewWallet {
    pub user_id: Uuid,
    pub address: Option<String>,
    pub network: String,
    pub wallet_type: WalletType,
    pub status: WalletStatus,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub daily_limit: Option<Decimal>,
    pub monthly_limit: Option<Decimal>,
}

pub struct LedgerEntry {
    pub direction: TxDirection,
    pub amount: Decimal,
    /// Wallet balance after the mutation.
    pub balance: Decimal,
    pub status: TxStatus,
    pub hash: String,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
}

/// Append a ledger row on whatever connection the caller is running on,
/// so settlement and credit transactions share one code path.
pub(crate) async fn append_ledger<C: ConnectionTrait>(
    conn: &C,
    wallet_id: Uuid,
    entry: LedgerEntry
) -> Result<entity::wallet_transaction::Model> {
    let row = entity::wallet_transaction::ActiveModel {
        id: Set(Uuid::new_v4()),
        wallet_id: Set(wallet_id),
        direction: Set(entry.direction.as_str().to_string()),
        amount: Set(entry.amount),
        balance: Set(entry.balance),
        status: Set(entry.status.as_str().to_string()),
        hash: Set(entry.hash),
        from_address: Set(entry.from_address),
        to_address: Set(entry.to_address),
        block_number: Set(None),
        gas_used: Set(None),
        fee: Set(None),
        created_at: Set(Utc::now()),
    };

    let row = row.insert(conn).await?;
    Ok(row)
}

pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewWallet) -> Result<entity::wallet::Model> {
        let now = Utc::now();
        let wallet = entity::wallet::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.user_id),
            address: Set(new.address),
            network: Set(new.network),
            wallet_type: Set(new.wallet_type.as_str().to_string()),
            status: Set(new.status.as_str().to_string()),
            balance: Set(Decimal::ZERO),
            min_amount: Set(new.min_amount),
            max_amount: Set(new.max_amount),
            daily_limit: Set(new.daily_limit),
            monthly_limit: Set(new.monthly_limit),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let wallet = wallet.insert(&self.db).await?;
        Ok(wallet)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<entity::wallet::Model> {
        entity::wallet::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("Wallet"))
    }

    pub async fn find_by_id_for_user(
        &self,
        id: Uuid,
        user_id: Uuid
    ) -> Result<Option<entity::wallet::Model>> {
        let wallet = entity::wallet::Entity
            ::find_by_id(id)
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .one(&self.db).await?;

        Ok(wallet)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<entity::wallet::Model>> {
        let wallets = entity::wallet::Entity
            ::find()
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .order_by_desc(entity::wallet::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(wallets)
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<u64> {
        use sea_orm::PaginatorTrait;

        let count = entity::wallet::Entity
            ::find()
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .count(&self.db).await?;

        Ok(count)
    }

    pub async fn find_all(&self) -> Result<Vec<entity::wallet::Model>> {
        let wallets = entity::wallet::Entity
            ::find()
            .order_by_desc(entity::wallet::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(wallets)
    }

    pub async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        wallet_type: WalletType
    ) -> Result<Vec<entity::wallet::Model>> {
        let wallets = entity::wallet::Entity
            ::find()
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .filter(entity::wallet::Column::WalletType.eq(wallet_type.as_str()))
            .all(&self.db).await?;

        Ok(wallets)
    }

    /// Any ACTIVE admin-side DEPOSIT wallet on the given network.
    pub async fn find_active_deposit_by_network(
        &self,
        network: &str
    ) -> Result<Option<entity::wallet::Model>> {
        let wallet = entity::wallet::Entity
            ::find()
            .filter(entity::wallet::Column::WalletType.eq(WalletType::Deposit.as_str()))
            .filter(entity::wallet::Column::Status.eq(WalletStatus::Active.as_str()))
            .filter(entity::wallet::Column::Network.eq(network))
            .one(&self.db).await?;

        Ok(wallet)
    }

    pub async fn find_active_by_address_for_user(
        &self,
        user_id: Uuid,
        address: &str
    ) -> Result<Option<entity::wallet::Model>> {
        let wallet = entity::wallet::Entity
            ::find()
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .filter(entity::wallet::Column::Address.eq(address))
            .filter(entity::wallet::Column::Status.eq(WalletStatus::Active.as_str()))
            .one(&self.db).await?;

        Ok(wallet)
    }

    pub async fn sum_receive_balance(&self, user_id: Uuid) -> Result<Decimal> {
        let wallets = self.find_by_user_and_type(user_id, WalletType::Receive).await?;
        Ok(wallets.iter().map(|w| w.balance).sum())
    }

    pub async fn update_status(
        &self,
        wallet: entity::wallet::Model,
        status: WalletStatus
    ) -> Result<entity::wallet::Model> {
        let mut model: entity::wallet::ActiveModel = wallet.into();
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now());

        let wallet = model.update(&self.db).await?;
        Ok(wallet)
    }

    pub async fn update_address(
        &self,
        wallet: entity::wallet::Model,
        address: String
    ) -> Result<entity::wallet::Model> {
        let mut model: entity::wallet::ActiveModel = wallet.into();
        model.address = Set(Some(address));
        model.updated_at = Set(Utc::now());

        let wallet = model.update(&self.db).await?;
        Ok(wallet)
    }

    /// Move a wallet balance by `delta` (positive credits, negative debits)
    /// and append the matching ledger row, atomically. A debit below zero
    /// fails the whole transaction.
    pub async fn adjust_balance(
        &self,
        wallet_id: Uuid,
        delta: Decimal,
        hash: String
    ) -> Result<entity::wallet::Model> {
        let txn = self.db.begin().await?;

        let wallet = entity::wallet::Entity
            ::find_by_id(wallet_id)
            .one(&txn).await?
            .ok_or(AppError::NotFound("Wallet"))?;

        let new_balance = wallet.balance + delta;
        if new_balance < Decimal::ZERO {
            return Err(AppError::InsufficientBalance);
        }

        let address = wallet.address.clone();
        let mut model: entity::wallet::ActiveModel = wallet.into();
        model.balance = Set(new_balance);
        model.updated_at = Set(Utc::now());
        let wallet = model.update(&txn).await?;

        let direction = if delta >= Decimal::ZERO {
            TxDirection::Incoming
        } else {
            TxDirection::Outgoing
        };

        append_ledger(&txn, wallet_id, LedgerEntry {
            direction,
            amount: delta.abs(),
            balance: new_balance,
            status: TxStatus::Completed,
            hash,
            from_address: address,
            to_address: None,
        }).await?;

        txn.commit().await?;
        Ok(wallet)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        entity::wallet::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn find_transactions(
        &self,
        wallet_id: Uuid
    ) -> Result<Vec<entity::wallet_transaction::Model>> {
        let rows = entity::wallet_transaction::Entity
            ::find()
            .filter(entity::wallet_transaction::Column::WalletId.eq(wallet_id))
            .order_by_desc(entity::wallet_transaction::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(rows)
    }
}
