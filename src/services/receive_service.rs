use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::db::{ entity, ReceiveRequestRepository, WalletRepository };
use crate::enums::{ ReceiveStatus, WalletStatus, WalletType };
use crate::error::{ AppError, Result };

/// Incoming transfers into RECEIVE wallets. The request tracks an
/// expected amount; an admin confirms the arrival and the credit is
/// applied to the wallet and user balances.
pub struct ReceiveService {
    receives: Arc<ReceiveRequestRepository>,
    wallets: Arc<WalletRepository>,
}

impl ReceiveService {
    pub fn new(
        receives: Arc<ReceiveRequestRepository>,
        wallets: Arc<WalletRepository>
    ) -> Self {
        Self { receives, wallets }
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        wallet_id: Uuid,
        amount: Decimal
    ) -> Result<entity::receive_request::Model> {
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidInput("Amount must be greater than 0".to_string()));
        }

        let wallet = self.wallets
            .find_by_id_for_user(wallet_id, user_id).await?
            .ok_or(AppError::NotFound("Wallet"))?;

        if wallet.wallet_type != WalletType::Receive.as_str() {
            return Err(
                AppError::InvalidInput("Receive requests require a RECEIVE wallet".to_string())
            );
        }
        if wallet.status != WalletStatus::Active.as_str() {
            return Err(AppError::InvalidInput("Wallet is not active".to_string()));
        }

        check_amount_limits(amount, wallet.min_amount, wallet.max_amount)?;

        if self.receives.find_active_by_wallet(wallet.id).await?.is_some() {
            return Err(
                AppError::Conflict(
                    "Wallet already has an active receive request".to_string()
                )
            );
        }

        let request = self.receives.create(user_id, wallet.id, amount).await?;
        tracing::info!(user_id = %user_id, request_id = %request.id, "Receive request created");

        Ok(request)
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid
    ) -> Result<Vec<entity::receive_request::Model>> {
        self.receives.find_by_user(user_id).await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::receive_request::Model>> {
        self.receives.find_all().await
    }

    /// Admin resolution. COMPLETED credits the wallet inside one
    /// transaction; any other status is a plain transition.
    pub async fn update(
        &self,
        request_id: Uuid,
        status: ReceiveStatus,
        amount: Option<Decimal>
    ) -> Result<entity::receive_request::Model> {
        let request = self.receives.find_by_id(request_id).await?;

        if request.status == ReceiveStatus::Completed.as_str() {
            return Err(AppError::Conflict("Request already completed".to_string()));
        }

        if status == ReceiveStatus::Completed {
            let amount = amount.unwrap_or(request.amount);
            if amount <= Decimal::ZERO {
                return Err(AppError::InvalidInput("Amount must be greater than 0".to_string()));
            }
            return self.receives.credit(request, amount).await;
        }

        self.receives.update_status(request, status).await
    }
}

fn check_amount_limits(
    amount: Decimal,
    min: Option<Decimal>,
    max: Option<Decimal>
) -> Result<()> {
    if let Some(min) = min {
        if amount < min {
            return Err(
                AppError::InvalidInput(format!("Amount is below the wallet minimum of {min}"))
            );
        }
    }
    if let Some(max) = max {
        if amount > max {
            return Err(
                AppError::InvalidInput(format!("Amount exceeds the wallet maximum of {max}"))
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_within_limits_is_accepted() {
        assert!(check_amount_limits(dec!(50), Some(dec!(10)), Some(dec!(100))).is_ok());
        assert!(check_amount_limits(dec!(10), Some(dec!(10)), Some(dec!(100))).is_ok());
        assert!(check_amount_limits(dec!(100), Some(dec!(10)), Some(dec!(100))).is_ok());
    }

    #[test]
    fn test_amount_outside_limits_is_rejected() {
        let below = check_amount_limits(dec!(5), Some(dec!(10)), None).unwrap_err();
        assert!(matches!(below, AppError::InvalidInput(_)));

        let above = check_amount_limits(dec!(500), None, Some(dec!(100))).unwrap_err();
        assert!(matches!(above, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_unlimited_wallet_accepts_any_amount() {
        assert!(check_amount_limits(dec!(0.0000000001), None, None).is_ok());
        assert!(check_amount_limits(dec!(1000000), None, None).is_ok());
    }
}
