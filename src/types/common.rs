//! Common domain types for KuCoin API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
///
/// KuCoin calls this the order `type` in request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Wire representation used in request parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a wallet transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferType {
    /// Incoming deposit
    Deposit,
    /// Outgoing withdrawal
    Withdraw,
}

impl TransferType {
    /// Wire representation used in request parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::Deposit => "DEPOSIT",
            TransferType::Withdraw => "WITHDRAW",
        }
    }
}

impl std::fmt::Display for TransferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a wallet transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferStatus {
    /// Transfer completed
    Finished,
    /// Transfer was cancelled
    Cancel,
    /// Transfer still in progress
    Pending,
}

impl TransferStatus {
    /// Wire representation used in request parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Finished => "FINISHED",
            TransferStatus::Cancel => "CANCEL",
            TransferStatus::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
