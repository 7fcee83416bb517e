use crate::legacy::LegacyClient;
use dca_exchange_core::model::{RequestContext, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyPairPrice {
    pub data: PairPrice,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PairPrice {
    pub amount: String,
    pub currency: String,
}

impl LegacyClient {
    /// total price to buy one unit of the base currency of `pair`
    pub async fn buy_price(&self, ctx: &RequestContext, pair: &str) -> Result<CurrencyPairPrice> {
        self.pair_price(ctx, pair, "buy").await
    }
    pub async fn sell_price(&self, ctx: &RequestContext, pair: &str) -> Result<CurrencyPairPrice> {
        self.pair_price(ctx, pair, "sell").await
    }
    pub async fn spot_price(&self, ctx: &RequestContext, pair: &str) -> Result<CurrencyPairPrice> {
        self.pair_price(ctx, pair, "spot").await
    }
    async fn pair_price(&self, ctx: &RequestContext, pair: &str, side: &str) -> Result<CurrencyPairPrice> {
        self.get(ctx, &format!("/prices/{}/{}", pair, side)).await
    }
}
