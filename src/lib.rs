pub mod config;
pub mod enums;
pub mod error;
pub mod auth;
pub mod db;
pub mod settlement;
pub mod services;
pub mod api;

pub use config::Config;
pub use enums::{
    DepositStatus,
    ReceiveStatus,
    Role,
    TicketStatus,
    UserStatus,
    WalletRequestStatus,
    WalletStatus,
    WalletType,
    WithdrawalStatus,
};
pub use error::{ AppError, Result };
