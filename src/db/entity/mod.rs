pub mod user;
pub mod session;
pub mod wallet;
pub mod wallet_transaction;
pub mod wallet_request;
pub mod deposit_request;
pub mod receive_request;
pub mod withdrawal_request;
pub mod withdrawal_earning;
pub mod network;
pub mod network_pair;
pub mod support_ticket;

pub use user::Entity as User;
pub use session::Entity as Session;
pub use wallet::Entity as Wallet;
pub use wallet_transaction::Entity as WalletTransaction;
pub use wallet_request::Entity as WalletRequest;
pub use deposit_request::Entity as DepositRequest;
pub use receive_request::Entity as ReceiveRequest;
pub use withdrawal_request::Entity as WithdrawalRequest;
pub use withdrawal_earning::Entity as WithdrawalEarning;
pub use network::Entity as Network;
pub use network_pair::Entity as NetworkPair;
pub use support_ticket::Entity as SupportTicket;
