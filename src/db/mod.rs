pub mod entity;
pub use entity::*;

mod user_repository;
pub use user_repository::UserRepository;

mod wallet_repository;
pub use wallet_repository::{ WalletRepository, NewWallet, LedgerEntry };

mod wallet_request_repository;
pub use wallet_request_repository::{ WalletRequestRepository, NewWalletRequest };

mod deposit_request_repository;
pub use deposit_request_repository::DepositRequestRepository;

mod receive_request_repository;
pub use receive_request_repository::ReceiveRequestRepository;

mod withdrawal_repository;
pub use withdrawal_repository::WithdrawalRepository;

mod network_repository;
pub use network_repository::NetworkRepository;

mod support_repository;
pub use support_repository::SupportRepository;
