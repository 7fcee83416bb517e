use crate::legacy::LegacyClient;
use chrono::{DateTime, Utc};
use dca_exchange_core::model::{RequestContext, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositParams {
    /// fiat amount with two decimals, e.g. `"25.00"`
    pub amount: String,
    pub currency: String,
    pub payment_method: String,
    pub commit: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepositResponse {
    pub data: Deposit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deposit {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    pub payout_at: DateTime<Utc>,
}

impl LegacyClient {
    pub async fn deposit(&self, ctx: &RequestContext, account_id: &str, params: &DepositParams) -> Result<DepositResponse> {
        self.post(ctx, &format!("/accounts/{}/deposits", account_id), params)
            .await
    }
}
