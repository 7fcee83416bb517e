use crate::CurrencyCode;
use serde::{Deserialize, Serialize};

/// A currency wallet on the exchange.
///
/// Balances are a snapshot taken when the account was first looked up and are
/// not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub currency: CurrencyCode,
    pub available: f64,
    pub hold: f64,
}

/// A fiat transfer that has been initiated but not yet settled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingTransfer {
    pub amount: f64,
}
