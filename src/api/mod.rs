use std::sync::Arc;

pub mod extract;

pub mod auth;
pub mod bootstrap;
pub mod deposit_requests;
pub mod networks;
pub mod receive_requests;
pub mod support;
pub mod users;
pub mod wallet_requests;
pub mod wallets;
pub mod withdrawal_requests;

use crate::services::{
    AuthService,
    BootstrapService,
    DepositService,
    NetworkService,
    ReceiveService,
    SupportService,
    UserService,
    WalletRequestService,
    WalletService,
    WithdrawalService,
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub network_service: Arc<NetworkService>,
    pub wallet_service: Arc<WalletService>,
    pub wallet_request_service: Arc<WalletRequestService>,
    pub deposit_service: Arc<DepositService>,
    pub receive_service: Arc<ReceiveService>,
    pub withdrawal_service: Arc<WithdrawalService>,
    pub support_service: Arc<SupportService>,
    pub bootstrap_service: Arc<BootstrapService>,
    pub init_db_secret: String,
}
