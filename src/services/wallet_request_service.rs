use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::db::{
    entity,
    NewWalletRequest,
    UserRepository,
    WalletRepository,
    WalletRequestRepository,
    WithdrawalRepository,
};
use crate::enums::{ WalletRequestStatus, WalletType };
use crate::error::{ AppError, Result };

pub struct CreateWalletRequest {
    pub address: Option<String>,
    pub network: String,
    pub wallet_type: WalletType,
    pub description: Option<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub daily_limit: Option<Decimal>,
    /// WITHDRAWAL requests settle immediately against this amount.
    pub amount: Option<Decimal>,
}

/// What a create call produced. A WITHDRAWAL request skips the review
/// queue entirely and comes back as a settled withdrawal instead.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreatedWalletRequest {
    Queued(entity::wallet_request::Model),
    Settled {
        wallet: entity::wallet::Model,
        withdrawal_request: entity::withdrawal_request::Model,
    },
}

pub struct WalletRequestService {
    wallet_requests: Arc<WalletRequestRepository>,
    wallets: Arc<WalletRepository>,
    withdrawals: Arc<WithdrawalRepository>,
    users: Arc<UserRepository>,
}

impl WalletRequestService {
    pub fn new(
        wallet_requests: Arc<WalletRequestRepository>,
        wallets: Arc<WalletRepository>,
        withdrawals: Arc<WithdrawalRepository>,
        users: Arc<UserRepository>
    ) -> Self {
        Self { wallet_requests, wallets, withdrawals, users }
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        input: CreateWalletRequest
    ) -> Result<CreatedWalletRequest> {
        let network = input.network.trim().to_uppercase();
        if network.is_empty() {
            return Err(AppError::InvalidInput("Network cannot be empty".to_string()));
        }

        let address = match input.address {
            Some(address) => {
                let address = address.trim().to_string();
                if address.is_empty() {
                    return Err(AppError::InvalidInput("Address cannot be empty".to_string()));
                }
                if
                    self.wallets
                        .find_active_by_address_for_user(user_id, &address).await?
                        .is_some()
                {
                    return Err(
                        AppError::Conflict(
                            "A wallet with this address already exists".to_string()
                        )
                    );
                }
                if
                    self.wallet_requests
                        .find_pending_by_address_for_user(user_id, &address).await?
                        .is_some()
                {
                    return Err(
                        AppError::Conflict(
                            "A request for this address is already pending".to_string()
                        )
                    );
                }
                Some(address)
            }
            None => None,
        };

        if input.wallet_type == WalletType::Withdrawal {
            let amount = input.amount.ok_or_else(|| {
                AppError::InvalidInput(
                    "Withdrawal requests must include an amount".to_string()
                )
            })?;
            let address = address.ok_or_else(|| {
                AppError::InvalidInput(
                    "Withdrawal requests must include a destination address".to_string()
                )
            })?;

            self.check_withdrawal_preconditions(user_id, amount).await?;

            let (wallet, request) = self.withdrawals
                .create_wallet_and_settle(user_id, address, network, amount).await?;
            tracing::info!(user_id = %user_id, request_id = %request.id, "Withdrawal settled");

            return Ok(CreatedWalletRequest::Settled { wallet, withdrawal_request: request });
        }

        let request = self.wallet_requests.create(NewWalletRequest {
            user_id,
            address,
            network,
            wallet_type: input.wallet_type,
            description: input.description,
            min_amount: input.min_amount,
            max_amount: input.max_amount,
            daily_limit: input.daily_limit,
        }).await?;

        Ok(CreatedWalletRequest::Queued(request))
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        status: Option<WalletRequestStatus>
    ) -> Result<Vec<entity::wallet_request::Model>> {
        self.wallet_requests.find_by_user(user_id, status).await
    }

    pub async fn list_all(
        &self,
        status: Option<WalletRequestStatus>
    ) -> Result<Vec<entity::wallet_request::Model>> {
        self.wallet_requests.find_all(status).await
    }

    /// Admin approval. RECEIVE and DEPOSIT requests get their address
    /// assigned here; a WITHDRAWAL request already carries its own.
    pub async fn approve(
        &self,
        request_id: Uuid,
        address: Option<String>
    ) -> Result<(entity::wallet_request::Model, entity::wallet::Model)> {
        let request = self.wallet_requests.find_by_id(request_id).await?;

        let address = match address {
            Some(address) if !address.trim().is_empty() => address.trim().to_string(),
            _ =>
                request.address.clone().ok_or_else(|| {
                    AppError::InvalidInput(
                        "An address is required to approve this request".to_string()
                    )
                })?,
        };

        self.wallet_requests.approve(request.id, address).await
    }

    pub async fn reject(&self, request_id: Uuid) -> Result<entity::wallet_request::Model> {
        self.wallet_requests.reject(request_id).await
    }

    async fn check_withdrawal_preconditions(&self, user_id: Uuid, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidInput("Amount must be greater than 0".to_string()));
        }

        let user = self.users.find_by_id(user_id).await?;
        if let Some(required) = user.insurance_deposit_amount {
            if required > Decimal::ZERO && user.insurance_deposit_paid < required {
                return Err(AppError::InsuranceDepositUnpaid);
            }
        }

        let available = self.wallets.sum_receive_balance(user_id).await?;
        if available < amount {
            return Err(AppError::InsufficientBalance);
        }

        Ok(())
    }
}
