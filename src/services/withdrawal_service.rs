use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::db::{ entity, UserRepository, WalletRepository, WithdrawalRepository };
use crate::enums::{ WalletStatus, WalletType, WithdrawalStatus };
use crate::error::{ AppError, Result };

#[derive(Debug, Serialize)]
pub struct WithdrawalWithEarnings {
    #[serde(flatten)]
    pub request: entity::withdrawal_request::Model,
    pub earnings: Vec<entity::withdrawal_earning::Model>,
}

pub struct WithdrawalService {
    withdrawals: Arc<WithdrawalRepository>,
    wallets: Arc<WalletRepository>,
    users: Arc<UserRepository>,
}

impl WithdrawalService {
    pub fn new(
        withdrawals: Arc<WithdrawalRepository>,
        wallets: Arc<WalletRepository>,
        users: Arc<UserRepository>
    ) -> Self {
        Self { withdrawals, wallets, users }
    }

    /// Create a withdrawal against an existing WITHDRAWAL wallet. The
    /// amount is settled from the user's RECEIVE wallets immediately;
    /// the request then waits for the admin payout flow.
    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        wallet_id: Uuid,
        amount: Decimal
    ) -> Result<entity::withdrawal_request::Model> {
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidInput("Amount must be greater than 0".to_string()));
        }

        let wallet = self.wallets
            .find_by_id_for_user(wallet_id, user_id).await?
            .ok_or(AppError::NotFound("Wallet"))?;

        if wallet.wallet_type != WalletType::Withdrawal.as_str() {
            return Err(
                AppError::InvalidInput(
                    "Withdrawal requests require a WITHDRAWAL wallet".to_string()
                )
            );
        }
        if wallet.status != WalletStatus::Active.as_str() {
            return Err(AppError::InvalidInput("Wallet is not active".to_string()));
        }

        if self.withdrawals.find_active_by_wallet(wallet.id).await?.is_some() {
            return Err(
                AppError::Conflict(
                    "Wallet is already in use for another withdrawal request".to_string()
                )
            );
        }

        let user = self.users.find_by_id(user_id).await?;
        if !insurance_paid(user.insurance_deposit_amount, user.insurance_deposit_paid) {
            return Err(AppError::InsuranceDepositUnpaid);
        }

        let available = self.wallets.sum_receive_balance(user_id).await?;
        if available < amount {
            return Err(AppError::InsufficientBalance);
        }

        let request = self.withdrawals.create_settled(user_id, wallet.id, amount).await?;
        tracing::info!(user_id = %user_id, request_id = %request.id, "Withdrawal settled");

        Ok(request)
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid
    ) -> Result<Vec<WithdrawalWithEarnings>> {
        let requests = self.withdrawals.find_by_user(user_id).await?;
        self.with_earnings(requests).await
    }

    pub async fn get_for_user(
        &self,
        user_id: Uuid,
        request_id: Uuid
    ) -> Result<WithdrawalWithEarnings> {
        let request = self.withdrawals.find_by_id(request_id).await?;
        if request.user_id != user_id {
            return Err(AppError::NotFound("Withdrawal request"));
        }

        let earnings = self.withdrawals.find_earnings(request.id).await?;
        Ok(WithdrawalWithEarnings { request, earnings })
    }

    pub async fn list_all(&self) -> Result<Vec<WithdrawalWithEarnings>> {
        let requests = self.withdrawals.find_all().await?;
        self.with_earnings(requests).await
    }

    pub async fn update_status(
        &self,
        request_id: Uuid,
        status: WithdrawalStatus
    ) -> Result<entity::withdrawal_request::Model> {
        let request = self.withdrawals.find_by_id(request_id).await?;

        let current: WithdrawalStatus = request.status.parse()?;
        if !transition_allowed(current, status) {
            return Err(
                AppError::Conflict(
                    format!("Cannot move withdrawal from {current} to {status}")
                )
            );
        }

        self.withdrawals.update_status(request, status).await
    }

    /// Record a partial payout. Each payment adds an earning row and
    /// shrinks the remaining amount; profit and notes are overwritten
    /// when given.
    pub async fn record_payment(
        &self,
        request_id: Uuid,
        paid: Decimal,
        profit: Option<Decimal>,
        admin_notes: Option<String>
    ) -> Result<entity::withdrawal_request::Model> {
        let request = self.withdrawals.find_by_id(request_id).await?;

        let current: WithdrawalStatus = request.status.parse()?;
        if current != WithdrawalStatus::InWork {
            return Err(
                AppError::Conflict("Payments can only be recorded while in work".to_string())
            );
        }

        self.withdrawals.apply_payment(request, paid, profit, admin_notes).await
    }

    async fn with_earnings(
        &self,
        requests: Vec<entity::withdrawal_request::Model>
    ) -> Result<Vec<WithdrawalWithEarnings>> {
        let mut out = Vec::with_capacity(requests.len());
        for request in requests {
            let earnings = self.withdrawals.find_earnings(request.id).await?;
            out.push(WithdrawalWithEarnings { request, earnings });
        }
        Ok(out)
    }
}

/// No insurance requirement means paid; otherwise the paid-in total
/// must cover the required amount.
fn insurance_paid(required: Option<Decimal>, paid: Decimal) -> bool {
    match required {
        Some(required) if required > Decimal::ZERO => paid >= required,
        _ => true,
    }
}

fn transition_allowed(from: WithdrawalStatus, to: WithdrawalStatus) -> bool {
    use WithdrawalStatus::*;
    matches!(
        (from, to),
        (Pending, InWork) | (Pending, Rejected) | (InWork, Completed) | (InWork, Rejected)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn insurance_not_required_when_unset() {
        assert!(insurance_paid(None, Decimal::ZERO));
        assert!(insurance_paid(Some(Decimal::ZERO), Decimal::ZERO));
    }

    #[test]
    fn insurance_requires_full_payment() {
        assert!(!insurance_paid(Some(dec!(500)), dec!(499.99)));
        assert!(insurance_paid(Some(dec!(500)), dec!(500)));
        assert!(insurance_paid(Some(dec!(500)), dec!(750)));
    }

    #[test]
    fn transitions_follow_the_lifecycle() {
        use WithdrawalStatus::*;
        assert!(transition_allowed(Pending, InWork));
        assert!(transition_allowed(Pending, Rejected));
        assert!(transition_allowed(InWork, Completed));
        assert!(transition_allowed(InWork, Rejected));

        assert!(!transition_allowed(Pending, Completed));
        assert!(!transition_allowed(Completed, InWork));
        assert!(!transition_allowed(Rejected, Pending));
        assert!(!transition_allowed(InWork, Pending));
    }
}
