pub mod auth_service;
pub mod user_service;
pub mod network_service;
pub mod wallet_service;
pub mod wallet_request_service;
pub mod deposit_service;
pub mod receive_service;
pub mod withdrawal_service;
pub mod support_service;
pub mod bootstrap_service;

pub use auth_service::AuthService;
pub use bootstrap_service::BootstrapReport;
pub use network_service::PairWithNetworks;
pub use user_service::UserWithCounts;
pub use wallet_request_service::{ CreateWalletRequest, CreatedWalletRequest };
pub use wallet_service::WalletListing;
pub use withdrawal_service::WithdrawalWithEarnings;
pub use user_service::UserService;
pub use network_service::NetworkService;
pub use wallet_service::WalletService;
pub use wallet_request_service::WalletRequestService;
pub use deposit_service::DepositService;
pub use receive_service::ReceiveService;
pub use withdrawal_service::WithdrawalService;
pub use support_service::SupportService;
pub use bootstrap_service::BootstrapService;
