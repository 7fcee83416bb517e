use crate::legacy::LegacyClient;
use dca_exchange_core::model::{RequestContext, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FiatCurrencies {
    pub data: Vec<FiatCurrency>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FiatCurrency {
    pub id: String,
    pub name: String,
    pub min_size: String,
}

impl LegacyClient {
    pub async fn currencies(&self, ctx: &RequestContext) -> Result<FiatCurrencies> {
        self.get(ctx, "/currencies").await
    }
}
