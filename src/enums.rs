use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ─── Role ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Canonical string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            _ => Err(AppError::InvalidInput(format!("Unknown role: {}", s))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── UserStatus ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Pending,
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pending => "PENDING",
            UserStatus::Active => "ACTIVE",
            UserStatus::Blocked => "BLOCKED",
        }
    }
}

impl FromStr for UserStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(UserStatus::Pending),
            "ACTIVE" => Ok(UserStatus::Active),
            "BLOCKED" => Ok(UserStatus::Blocked),
            _ => Err(AppError::InvalidInput(format!("Unknown user status: {}", s))),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── WalletType ──────────────────────────────────────────────────────

/// What a wallet is used for. RECEIVE wallets hold spendable balance,
/// DEPOSIT wallets collect insurance top-ups, WITHDRAWAL wallets are
/// payout destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletType {
    Receive,
    Deposit,
    Withdrawal,
}

impl WalletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::Receive => "RECEIVE",
            WalletType::Deposit => "DEPOSIT",
            WalletType::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl FromStr for WalletType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECEIVE" => Ok(WalletType::Receive),
            "DEPOSIT" => Ok(WalletType::Deposit),
            "WITHDRAWAL" => Ok(WalletType::Withdrawal),
            _ => Err(AppError::InvalidInput(
                format!("Wallet type must be RECEIVE, DEPOSIT or WITHDRAWAL, got: {}", s)
            )),
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── WalletStatus ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletStatus {
    Active,
    Inactive,
    InWork,
}

impl WalletStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletStatus::Active => "ACTIVE",
            WalletStatus::Inactive => "INACTIVE",
            WalletStatus::InWork => "IN_WORK",
        }
    }
}

impl FromStr for WalletStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(WalletStatus::Active),
            "INACTIVE" => Ok(WalletStatus::Inactive),
            "IN_WORK" => Ok(WalletStatus::InWork),
            _ => Err(AppError::InvalidInput(format!("Unknown wallet status: {}", s))),
        }
    }
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Request statuses ────────────────────────────────────────────────

/// Lifecycle of a wallet request: resolved exactly once by an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl WalletRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletRequestStatus::Pending => "PENDING",
            WalletRequestStatus::Approved => "APPROVED",
            WalletRequestStatus::Rejected => "REJECTED",
        }
    }
}

impl FromStr for WalletRequestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(WalletRequestStatus::Pending),
            "APPROVED" => Ok(WalletRequestStatus::Approved),
            "REJECTED" => Ok(WalletRequestStatus::Rejected),
            _ => Err(AppError::InvalidInput(format!("Unknown request status: {}", s))),
        }
    }
}

impl fmt::Display for WalletRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositStatus {
    Pending,
    Processing,
    Completed,
    Rejected,
}

impl DepositStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositStatus::Pending => "PENDING",
            DepositStatus::Processing => "PROCESSING",
            DepositStatus::Completed => "COMPLETED",
            DepositStatus::Rejected => "REJECTED",
        }
    }
}

impl FromStr for DepositStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(DepositStatus::Pending),
            "PROCESSING" => Ok(DepositStatus::Processing),
            "COMPLETED" => Ok(DepositStatus::Completed),
            "REJECTED" => Ok(DepositStatus::Rejected),
            _ => Err(AppError::InvalidInput(format!("Unknown deposit status: {}", s))),
        }
    }
}

impl fmt::Display for DepositStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceiveStatus {
    Pending,
    Ready,
    Processing,
    Completed,
    Rejected,
}

impl ReceiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiveStatus::Pending => "PENDING",
            ReceiveStatus::Ready => "READY",
            ReceiveStatus::Processing => "PROCESSING",
            ReceiveStatus::Completed => "COMPLETED",
            ReceiveStatus::Rejected => "REJECTED",
        }
    }

    /// Statuses that block a second request on the same wallet.
    pub fn active() -> [&'static str; 3] {
        ["PENDING", "READY", "PROCESSING"]
    }
}

impl FromStr for ReceiveStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ReceiveStatus::Pending),
            "READY" => Ok(ReceiveStatus::Ready),
            "PROCESSING" => Ok(ReceiveStatus::Processing),
            "COMPLETED" => Ok(ReceiveStatus::Completed),
            "REJECTED" => Ok(ReceiveStatus::Rejected),
            _ => Err(AppError::InvalidInput(format!("Unknown receive status: {}", s))),
        }
    }
}

impl fmt::Display for ReceiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WithdrawalStatus {
    Pending,
    InWork,
    Completed,
    Rejected,
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "PENDING",
            WithdrawalStatus::InWork => "IN_WORK",
            WithdrawalStatus::Completed => "COMPLETED",
            WithdrawalStatus::Rejected => "REJECTED",
        }
    }

    /// Statuses that keep the target wallet occupied.
    pub fn active() -> [&'static str; 2] {
        ["PENDING", "IN_WORK"]
    }
}

impl FromStr for WithdrawalStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(WithdrawalStatus::Pending),
            "IN_WORK" => Ok(WithdrawalStatus::InWork),
            "COMPLETED" => Ok(WithdrawalStatus::Completed),
            "REJECTED" => Ok(WithdrawalStatus::Rejected),
            _ => Err(AppError::InvalidInput(format!("Unknown withdrawal status: {}", s))),
        }
    }
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── TicketStatus ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            _ => Err(AppError::InvalidInput(format!("Unknown ticket status: {}", s))),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Ledger ──────────────────────────────────────────────────────────

/// Direction of a wallet ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxDirection {
    Incoming,
    Outgoing,
}

impl TxDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxDirection::Incoming => "INCOMING",
            TxDirection::Outgoing => "OUTGOING",
        }
    }
}

impl FromStr for TxDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOMING" => Ok(TxDirection::Incoming),
            "OUTGOING" => Ok(TxDirection::Outgoing),
            _ => Err(AppError::InvalidInput(format!("Unknown transaction direction: {}", s))),
        }
    }
}

impl fmt::Display for TxDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxStatus {
    Pending,
    Completed,
    Failed,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Pending => "PENDING",
            TxStatus::Completed => "COMPLETED",
            TxStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_db_strings() {
        for t in [WalletType::Receive, WalletType::Deposit, WalletType::Withdrawal] {
            assert_eq!(t.as_str().parse::<WalletType>().unwrap(), t);
        }
        for s in [
            WithdrawalStatus::Pending,
            WithdrawalStatus::InWork,
            WithdrawalStatus::Completed,
            WithdrawalStatus::Rejected,
        ] {
            assert_eq!(s.as_str().parse::<WithdrawalStatus>().unwrap(), s);
        }
    }

    #[test]
    fn test_unknown_wallet_type_rejected() {
        assert!("SAVINGS".parse::<WalletType>().is_err());
    }

    #[test]
    fn test_ticket_status_is_lowercase() {
        assert_eq!(TicketStatus::InProgress.as_str(), "in_progress");
        assert_eq!("resolved".parse::<TicketStatus>().unwrap(), TicketStatus::Resolved);
    }
}
