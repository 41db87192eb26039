use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::generate_token;
use crate::db::{ entity, UserRepository, WalletRepository, WalletRequestRepository };
use crate::enums::{ Role, UserStatus };
use crate::error::{ AppError, Result };

#[derive(Debug, Serialize)]
pub struct UserWithCounts {
    #[serde(flatten)]
    pub user: entity::user::Model,
    pub wallets_count: u64,
    pub wallet_requests_count: u64,
}

pub struct UserService {
    users: Arc<UserRepository>,
    wallets: Arc<WalletRepository>,
    wallet_requests: Arc<WalletRequestRepository>,
}

impl UserService {
    pub fn new(
        users: Arc<UserRepository>,
        wallets: Arc<WalletRepository>,
        wallet_requests: Arc<WalletRequestRepository>
    ) -> Self {
        Self { users, wallets, wallet_requests }
    }

    pub async fn list(&self) -> Result<Vec<UserWithCounts>> {
        let users = self.users.find_all().await?;

        let mut out = Vec::with_capacity(users.len());
        for user in users {
            let wallets_count = self.wallets.count_by_user(user.id).await?;
            let wallet_requests_count = self.wallet_requests.count_by_user(user.id).await?;
            out.push(UserWithCounts { user, wallets_count, wallet_requests_count });
        }

        Ok(out)
    }

    /// Issue a new invite: a PENDING user whose token a person can redeem
    /// at registration. Returns the user together with the plain token.
    pub async fn create_invited(
        &self,
        insurance_deposit_amount: Option<Decimal>,
        referral_code_used: Option<String>
    ) -> Result<(entity::user::Model, String)> {
        if let Some(amount) = insurance_deposit_amount {
            if amount < Decimal::ZERO {
                return Err(AppError::InvalidInput(
                    "Insurance deposit amount cannot be negative".to_string()
                ));
            }
        }

        let token = generate_token();
        let user = self.users
            .create_invited(token.clone(), Role::User, insurance_deposit_amount, referral_code_used)
            .await?;

        tracing::info!(user_id = %user.id, "Invite issued");
        Ok((user, token))
    }

    pub async fn update(
        &self,
        id: Uuid,
        status: Option<UserStatus>,
        insurance_deposit_amount: Option<Option<Decimal>>
    ) -> Result<entity::user::Model> {
        let mut user = self.users.find_by_id(id).await?;

        if let Some(status) = status {
            user = self.users.update_status(user, status).await?;
        }

        if let Some(amount) = insurance_deposit_amount {
            if let Some(amount) = amount {
                if amount < Decimal::ZERO {
                    return Err(AppError::InvalidInput(
                        "Insurance deposit amount cannot be negative".to_string()
                    ));
                }
            }
            user = self.users.update_insurance_amount(user, amount).await?;
        }

        Ok(user)
    }
}
