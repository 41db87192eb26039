use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::db::{ entity, DepositRequestRepository, WalletRepository };
use crate::enums::DepositStatus;
use crate::error::{ AppError, Result };

/// Insurance deposits. A user asks to pay in on some network, the
/// platform hands out one of its DEPOSIT wallets, and an admin confirms
/// the money arrived.
pub struct DepositService {
    deposits: Arc<DepositRequestRepository>,
    wallets: Arc<WalletRepository>,
}

impl DepositService {
    pub fn new(
        deposits: Arc<DepositRequestRepository>,
        wallets: Arc<WalletRepository>
    ) -> Self {
        Self { deposits, wallets }
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        amount: Decimal,
        from_network: String,
        to_network: String
    ) -> Result<entity::deposit_request::Model> {
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidInput("Amount must be greater than 0".to_string()));
        }

        let from_network = from_network.trim().to_uppercase();
        let to_network = to_network.trim().to_uppercase();
        if from_network.is_empty() || to_network.is_empty() {
            return Err(AppError::InvalidInput("Network cannot be empty".to_string()));
        }

        let admin_wallet = self.wallets.find_active_deposit_by_network(&from_network).await?;
        let admin_wallet_address = deposit_address_for(&from_network, admin_wallet)?;

        let request = self.deposits
            .create(user_id, amount, from_network, to_network, admin_wallet_address).await?;
        tracing::info!(user_id = %user_id, request_id = %request.id, "Deposit request created");

        Ok(request)
    }

    /// User declares the transfer sent; the request moves to PROCESSING
    /// and waits for an admin to confirm.
    pub async fn mark_paid(
        &self,
        user_id: Uuid,
        request_id: Uuid
    ) -> Result<entity::deposit_request::Model> {
        let request = self.deposits.find_by_id(request_id).await?;
        if request.user_id != user_id {
            return Err(AppError::NotFound("Deposit request"));
        }
        if request.status != DepositStatus::Pending.as_str() {
            return Err(
                AppError::Conflict("Deposit request is not awaiting payment".to_string())
            );
        }

        self.deposits.update_status(request, DepositStatus::Processing).await
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid
    ) -> Result<Vec<entity::deposit_request::Model>> {
        self.deposits.find_by_user(user_id).await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::deposit_request::Model>> {
        self.deposits.find_all().await
    }

    /// Admin resolution. Completing a request credits the amount to the
    /// user's paid-in insurance total.
    pub async fn update(
        &self,
        request_id: Uuid,
        status: Option<DepositStatus>,
        admin_wallet_address: Option<String>,
        amount: Option<Decimal>
    ) -> Result<entity::deposit_request::Model> {
        let mut request = self.deposits.find_by_id(request_id).await?;

        if admin_wallet_address.is_some() || amount.is_some() {
            if let Some(amount) = amount {
                if amount <= Decimal::ZERO {
                    return Err(
                        AppError::InvalidInput("Amount must be greater than 0".to_string())
                    );
                }
            }
            request = self.deposits.assign(request, admin_wallet_address, amount).await?;
        }

        if let Some(status) = status {
            let current: DepositStatus = request.status.parse()?;
            if !transition_allowed(current, status) {
                return Err(
                    AppError::Conflict(
                        format!("Cannot move deposit from {current} to {status}")
                    )
                );
            }

            request = if status == DepositStatus::Completed {
                let request = self.deposits.complete(request.id).await?;
                tracing::info!(request_id = %request.id, "Insurance deposit confirmed");
                request
            } else {
                self.deposits.update_status(request, status).await?
            };
        }

        Ok(request)
    }
}

fn deposit_address_for(
    network: &str,
    wallet: Option<entity::wallet::Model>
) -> Result<Option<String>> {
    match wallet {
        Some(wallet) => Ok(wallet.address),
        None => Err(AppError::InvalidInput(format!("No available wallets for network {network}"))),
    }
}

/// COMPLETED and REJECTED are terminal. Everything else can still move.
fn transition_allowed(from: DepositStatus, to: DepositStatus) -> bool {
    match from {
        DepositStatus::Pending | DepositStatus::Processing => from != to,
        DepositStatus::Completed | DepositStatus::Rejected => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::enums::{ WalletStatus, WalletType };

    fn deposit_wallet(address: &str) -> entity::wallet::Model {
        let now = Utc::now();
        entity::wallet::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            address: Some(address.to_string()),
            network: "TRC20".to_string(),
            wallet_type: WalletType::Deposit.as_str().to_string(),
            status: WalletStatus::Active.as_str().to_string(),
            balance: Decimal::ZERO,
            min_amount: None,
            max_amount: None,
            daily_limit: None,
            monthly_limit: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_deposit_uses_the_platform_wallet_address() {
        let address = deposit_address_for("TRC20", Some(deposit_wallet("TAbc123"))).unwrap();
        assert_eq!(address.as_deref(), Some("TAbc123"));
    }

    #[test]
    fn test_deposit_without_available_wallet_is_rejected() {
        let err = deposit_address_for("BEP20", None).unwrap_err();
        match err {
            AppError::InvalidInput(message) => {
                assert_eq!(message, "No available wallets for network BEP20");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_open_deposit_can_be_resolved() {
        assert!(transition_allowed(DepositStatus::Pending, DepositStatus::Processing));
        assert!(transition_allowed(DepositStatus::Pending, DepositStatus::Completed));
        assert!(transition_allowed(DepositStatus::Processing, DepositStatus::Completed));
        assert!(transition_allowed(DepositStatus::Processing, DepositStatus::Rejected));
    }

    #[test]
    fn test_resolved_deposit_is_terminal() {
        assert!(!transition_allowed(DepositStatus::Completed, DepositStatus::Rejected));
        assert!(!transition_allowed(DepositStatus::Completed, DepositStatus::Completed));
        assert!(!transition_allowed(DepositStatus::Rejected, DepositStatus::Completed));
        assert!(!transition_allowed(DepositStatus::Rejected, DepositStatus::Pending));
    }
}
