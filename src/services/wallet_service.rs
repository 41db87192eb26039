use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::db::{
    entity,
    NewWallet,
    WalletRepository,
    WalletRequestRepository,
    WithdrawalRepository,
};
use crate::enums::{ WalletStatus, WalletType };
use crate::error::{ AppError, Result };

#[derive(Debug, Serialize)]
pub struct WalletStatistics {
    pub total_balance: Decimal,
    pub active_wallets: usize,
    pub total_wallets: usize,
}

#[derive(Debug, Serialize)]
pub struct WalletListing {
    pub wallets: Vec<entity::wallet::Model>,
    pub statistics: WalletStatistics,
}

pub struct WalletService {
    wallets: Arc<WalletRepository>,
    wallet_requests: Arc<WalletRequestRepository>,
    withdrawals: Arc<WithdrawalRepository>,
}

impl WalletService {
    pub fn new(
        wallets: Arc<WalletRepository>,
        wallet_requests: Arc<WalletRequestRepository>,
        withdrawals: Arc<WithdrawalRepository>
    ) -> Self {
        Self { wallets, wallet_requests, withdrawals }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<WalletListing> {
        let wallets = self.wallets.find_by_user(user_id).await?;

        let statistics = WalletStatistics {
            total_balance: wallets
                .iter()
                .map(|w| w.balance)
                .sum(),
            active_wallets: wallets
                .iter()
                .filter(|w| w.status == WalletStatus::Active.as_str())
                .count(),
            total_wallets: wallets.len(),
        };

        let mut views = Vec::with_capacity(wallets.len());
        for wallet in wallets {
            views.push(self.with_derived_limits(wallet).await?);
        }

        Ok(WalletListing { wallets: views, statistics })
    }

    /// Delete a user's wallet; refused while a withdrawal request is
    /// still being worked against it.
    pub async fn delete_for_user(&self, user_id: Uuid, wallet_id: Uuid) -> Result<()> {
        let wallet = self.wallets
            .find_by_id_for_user(wallet_id, user_id).await?
            .ok_or(AppError::NotFound("Wallet"))?;

        let in_use = self.withdrawals.find_active_by_wallet(wallet.id).await?.is_some();
        ensure_no_active_withdrawal(in_use)?;

        self.wallets.delete(wallet.id).await
    }

    pub async fn transactions_for_user(
        &self,
        user_id: Uuid,
        wallet_id: Uuid
    ) -> Result<Vec<entity::wallet_transaction::Model>> {
        let wallet = self.wallets
            .find_by_id_for_user(wallet_id, user_id).await?
            .ok_or(AppError::NotFound("Wallet"))?;
        self.wallets.find_transactions(wallet.id).await
    }

    // ─── Admin operations ────────────────────────────────────────────

    pub async fn list_all(&self) -> Result<Vec<entity::wallet::Model>> {
        self.wallets.find_all().await
    }

    pub async fn create(&self, new: NewWallet) -> Result<entity::wallet::Model> {
        if new.network.trim().is_empty() {
            return Err(AppError::InvalidInput("Network cannot be empty".to_string()));
        }
        self.wallets.create(new).await
    }

    pub async fn update(
        &self,
        wallet_id: Uuid,
        address: Option<String>,
        status: Option<WalletStatus>
    ) -> Result<entity::wallet::Model> {
        let mut wallet = self.wallets.find_by_id(wallet_id).await?;

        if let Some(address) = address {
            wallet = self.wallets.update_address(wallet, address).await?;
        }
        if let Some(status) = status {
            wallet = self.wallets.update_status(wallet, status).await?;
        }

        Ok(wallet)
    }

    /// Admin balance correction. Writes a ledger row so the adjustment
    /// is visible in the wallet history like any other movement.
    pub async fn adjust_balance(
        &self,
        wallet_id: Uuid,
        delta: Decimal
    ) -> Result<entity::wallet::Model> {
        if delta == Decimal::ZERO {
            return Err(AppError::InvalidInput("Adjustment amount cannot be zero".to_string()));
        }

        let hash = format!("ADMIN_ADJUST_{}_{}", wallet_id, Utc::now().timestamp_millis());
        self.wallets.adjust_balance(wallet_id, delta, hash).await
    }

    pub async fn delete(&self, wallet_id: Uuid) -> Result<()> {
        let wallet = self.wallets.find_by_id(wallet_id).await?;

        let in_use = self.withdrawals.find_active_by_wallet(wallet.id).await?.is_some();
        ensure_no_active_withdrawal(in_use)?;

        self.wallets.delete(wallet.id).await
    }

    /// Limits fall back to the approved request the wallet originated
    /// from when the row itself carries none.
    async fn with_derived_limits(
        &self,
        mut wallet: entity::wallet::Model
    ) -> Result<entity::wallet::Model> {
        if wallet.min_amount.is_none() && wallet.max_amount.is_none() && wallet.daily_limit.is_none() {
            let wallet_type: WalletType = wallet.wallet_type.parse()?;
            if
                let Some(request) = self.wallet_requests
                    .find_latest_approved(wallet.user_id, &wallet.network, wallet_type).await?
            {
                wallet.min_amount = request.min_amount;
                wallet.max_amount = request.max_amount;
                wallet.daily_limit = request.daily_limit;
            }
        }

        Ok(wallet)
    }
}

fn ensure_no_active_withdrawal(in_use: bool) -> Result<()> {
    if in_use {
        return Err(
            AppError::Conflict("Cannot delete wallet with an active withdrawal request".to_string())
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_wallet_can_be_deleted() {
        assert!(ensure_no_active_withdrawal(false).is_ok());
    }

    #[test]
    fn test_wallet_with_active_withdrawal_cannot_be_deleted() {
        let err = ensure_no_active_withdrawal(true).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
