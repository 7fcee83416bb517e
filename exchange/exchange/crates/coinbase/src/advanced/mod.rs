//! Typed client for the Advanced Trade (`/api/v3/brokerage`) API family.

mod client;
mod model;

pub use client::*;
pub use model::*;

use async_trait::async_trait;
use dca_exchange_core::model::{RequestContext, Result};

/// The Advanced Trade operations the facade depends on.
///
/// [`AdvancedTradeClient`] talks to the real service; tests substitute an
/// in-memory implementation.
#[async_trait]
pub trait AdvancedTradeApi: Send + Sync {
    /// One page of accounts. `limit` is clamped into `[49, 250]`, an empty `cursor` starts from the top.
    async fn list_accounts(&self, ctx: &RequestContext, limit: u32, cursor: &str) -> Result<ListAccountsResponse>;

    async fn get_account(&self, ctx: &RequestContext, uuid: &str) -> Result<AdvancedAccount>;

    async fn get_market_trades(&self, ctx: &RequestContext, product_id: &str, limit: u32)
        -> Result<MarketTradesResponse>;

    async fn get_product(&self, ctx: &RequestContext, product_id: &str) -> Result<ProductResponse>;

    async fn create_order(&self, ctx: &RequestContext, request: &CreateOrderRequest) -> Result<CreateOrderResponse>;

    async fn list_orders(&self, ctx: &RequestContext, request: &ListOrdersRequest) -> Result<ListOrdersResponse>;

    async fn list_payment_methods(&self, ctx: &RequestContext) -> Result<Vec<PaymentMethod>>;
}
