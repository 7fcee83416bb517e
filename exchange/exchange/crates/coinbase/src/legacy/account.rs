use crate::legacy::LegacyClient;
use dca_exchange_core::model::{RequestContext, Result};
use serde::Deserialize;
use serde_with::serde_as;
use serde_with::DisplayFromStr;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyAccount {
    pub id: String,
    #[serde_as(as = "DisplayFromStr")]
    pub balance: f64,
    #[serde_as(as = "DisplayFromStr")]
    pub hold: f64,
    #[serde_as(as = "DisplayFromStr")]
    pub available: f64,
    pub currency: String,
}

impl LegacyClient {
    pub async fn get_accounts(&self, ctx: &RequestContext) -> Result<Vec<LegacyAccount>> {
        self.get(ctx, "/accounts").await
    }
    pub async fn get_account(&self, ctx: &RequestContext, id: &str) -> Result<LegacyAccount> {
        self.get(ctx, &format!("/accounts/{}", id)).await
    }
}
