use chrono::Utc;
use sea_orm::{
    entity::prelude::*,
    DatabaseConnection,
    DatabaseTransaction,
    IsolationLevel,
    QueryOrder,
    Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::enums::{ TxDirection, TxStatus, WalletStatus, WalletType, WithdrawalStatus };
use crate::error::{ AppError, Result };
use crate::settlement::{ plan_deductions, WalletBalance };
use crate::db::entity;
use crate::db::wallet_repository::{ append_ledger, LedgerEntry };

pub struct WithdrawalRepository {
    db: DatabaseConnection,
}

impl WithdrawalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<entity::withdrawal_request::Model> {
        entity::withdrawal_request::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("Withdrawal request"))
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid
    ) -> Result<Vec<entity::withdrawal_request::Model>> {
        let requests = entity::withdrawal_request::Entity
            ::find()
            .filter(entity::withdrawal_request::Column::UserId.eq(user_id))
            .order_by_desc(entity::withdrawal_request::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(requests)
    }

    pub async fn find_all(&self) -> Result<Vec<entity::withdrawal_request::Model>> {
        let requests = entity::withdrawal_request::Entity
            ::find()
            .order_by_desc(entity::withdrawal_request::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(requests)
    }

    /// Any PENDING/IN_WORK request occupying the wallet.
    pub async fn find_active_by_wallet(
        &self,
        wallet_id: Uuid
    ) -> Result<Option<entity::withdrawal_request::Model>> {
        let request = entity::withdrawal_request::Entity
            ::find()
            .filter(entity::withdrawal_request::Column::WalletId.eq(wallet_id))
            .filter(entity::withdrawal_request::Column::Status.is_in(WithdrawalStatus::active()))
            .one(&self.db).await?;

        Ok(request)
    }

    /// Create a withdrawal request against an existing WITHDRAWAL wallet and
    /// settle it: deduct `amount` from the user's RECEIVE wallets, one
    /// ledger row per deduction, inside one serializable transaction.
    ///
    /// Balance sufficiency is re-verified here on the in-transaction
    /// snapshot, so two concurrent requests cannot both spend the same
    /// balance: the second either sees the drained wallets and fails, or
    /// is rejected by the database on serialization conflict.
    pub async fn create_settled(
        &self,
        user_id: Uuid,
        wallet_id: Uuid,
        amount: Decimal
    ) -> Result<entity::withdrawal_request::Model> {
        let txn = self.db
            .begin_with_config(Some(IsolationLevel::Serializable), None).await?;

        let request = settle(&txn, user_id, wallet_id, amount).await?;

        txn.commit().await?;
        Ok(request)
    }

    /// Same as [`Self::create_settled`], but first creates the payout
    /// destination as an INACTIVE wallet inside the same transaction.
    /// Used by the wallet-request entry path.
    pub async fn create_wallet_and_settle(
        &self,
        user_id: Uuid,
        address: String,
        network: String,
        amount: Decimal
    ) -> Result<(entity::wallet::Model, entity::withdrawal_request::Model)> {
        let txn = self.db
            .begin_with_config(Some(IsolationLevel::Serializable), None).await?;

        let now = Utc::now();
        let wallet = entity::wallet::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            address: Set(Some(address)),
            network: Set(network),
            wallet_type: Set(WalletType::Withdrawal.as_str().to_string()),
            status: Set(WalletStatus::Inactive.as_str().to_string()),
            balance: Set(Decimal::ZERO),
            min_amount: Set(None),
            max_amount: Set(None),
            daily_limit: Set(None),
            monthly_limit: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let wallet = wallet.insert(&txn).await?;

        let request = settle(&txn, user_id, wallet.id, amount).await?;

        txn.commit().await?;
        Ok((wallet, request))
    }

    pub async fn update_status(
        &self,
        request: entity::withdrawal_request::Model,
        status: WithdrawalStatus
    ) -> Result<entity::withdrawal_request::Model> {
        let mut model: entity::withdrawal_request::ActiveModel = request.into();
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now());

        let request = model.update(&self.db).await?;
        Ok(request)
    }

    /// Admin payment update: move paid/remaining and attach an earning
    /// record, atomically.
    pub async fn apply_payment(
        &self,
        request: entity::withdrawal_request::Model,
        paid: Decimal,
        profit: Option<Decimal>,
        admin_notes: Option<String>
    ) -> Result<entity::withdrawal_request::Model> {
        if paid <= Decimal::ZERO {
            return Err(AppError::InvalidInput("Paid amount must be greater than 0".to_string()));
        }
        if paid > request.remaining_amount {
            return Err(
                AppError::InvalidInput("Paid amount exceeds the remaining amount".to_string())
            );
        }

        let txn = self.db.begin().await?;

        let earning = entity::withdrawal_earning::ActiveModel {
            id: Set(Uuid::new_v4()),
            withdrawal_request_id: Set(request.id),
            amount: Set(paid),
            description: Set(admin_notes.clone()),
            created_at: Set(Utc::now()),
        };
        earning.insert(&txn).await?;

        let paid_total = request.paid_amount + paid;
        let remaining = request.remaining_amount - paid;
        let mut model: entity::withdrawal_request::ActiveModel = request.into();
        model.paid_amount = Set(paid_total);
        model.remaining_amount = Set(remaining);
        if let Some(profit) = profit {
            model.profit = Set(Some(profit));
        }
        if let Some(notes) = admin_notes {
            model.admin_notes = Set(Some(notes));
        }
        model.updated_at = Set(Utc::now());
        let request = model.update(&txn).await?;

        txn.commit().await?;
        Ok(request)
    }

    pub async fn find_earnings(
        &self,
        request_id: Uuid
    ) -> Result<Vec<entity::withdrawal_earning::Model>> {
        let earnings = entity::withdrawal_earning::Entity
            ::find()
            .filter(
                entity::withdrawal_earning::Column::WithdrawalRequestId.eq(request_id)
            )
            .order_by_desc(entity::withdrawal_earning::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(earnings)
    }
}

/// The settlement body shared by both entry paths. Runs on an already
/// open transaction; every failure rolls the whole transaction back.
async fn settle(
    txn: &DatabaseTransaction,
    user_id: Uuid,
    wallet_id: Uuid,
    amount: Decimal
) -> Result<entity::withdrawal_request::Model> {
    let now = Utc::now();
    let request = entity::withdrawal_request::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        wallet_id: Set(wallet_id),
        amount: Set(amount),
        paid_amount: Set(Decimal::ZERO),
        remaining_amount: Set(amount),
        status: Set(WithdrawalStatus::Pending.as_str().to_string()),
        profit: Set(None),
        admin_notes: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let request = request.insert(txn).await?;

    // Snapshot of RECEIVE wallets with funds, largest first.
    let wallets = entity::wallet::Entity
        ::find()
        .filter(entity::wallet::Column::UserId.eq(user_id))
        .filter(entity::wallet::Column::WalletType.eq(WalletType::Receive.as_str()))
        .filter(entity::wallet::Column::Balance.gt(Decimal::ZERO))
        .order_by_desc(entity::wallet::Column::Balance)
        .all(txn).await?;

    let snapshot: Vec<WalletBalance> = wallets
        .iter()
        .map(|w| WalletBalance {
            wallet_id: w.id,
            balance: w.balance,
            address: w.address.clone(),
        })
        .collect();

    let plan = plan_deductions(amount, &snapshot)?;

    let mut by_id: std::collections::HashMap<Uuid, entity::wallet::Model> = wallets
        .into_iter()
        .map(|w| (w.id, w))
        .collect();

    for deduction in &plan {
        let wallet = by_id
            .remove(&deduction.wallet_id)
            .ok_or_else(|| AppError::Internal("Settlement plan references unknown wallet".to_string()))?;

        let mut model: entity::wallet::ActiveModel = wallet.into();
        model.balance = Set(deduction.balance_after);
        model.updated_at = Set(Utc::now());
        model.update(txn).await?;

        append_ledger(txn, deduction.wallet_id, LedgerEntry {
            direction: TxDirection::Outgoing,
            amount: deduction.amount,
            balance: deduction.balance_after,
            status: TxStatus::Completed,
            hash: format!(
                "WITHDRAWAL_{}_{}_{:08x}",
                request.id,
                Utc::now().timestamp_millis(),
                rand::random::<u32>()
            ),
            from_address: deduction.from_address.clone(),
            to_address: Some("WITHDRAWAL_REQUEST".to_string()),
        }).await?;
    }

    Ok(request)
}
