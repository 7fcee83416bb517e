use crate::model::{RequestContext, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dca_model::{Account, Order, OrderType, PendingTransfer, Product, Ticker};
use rust_decimal::Decimal;

/// Turns `(best_ask, fiat_amount)` into `(order_price, order_size)` for a limit buy.
pub type CalcLimitOrder = dyn Fn(Decimal, Decimal) -> (Decimal, Decimal) + Send + Sync;

/// Everything the buy scheduler needs from an exchange.
///
/// Implementations hold a per-instance account cache and are not meant to be
/// shared across tasks without external serialization, hence `&mut self` on
/// the operations that may populate it.
#[async_trait]
pub trait Exchange: Send + Sync {
    fn get_ticker_symbol(&self, base_currency: &str, quote_currency: &str) -> String;

    async fn get_ticker(&self, ctx: &RequestContext, product_id: &str) -> Result<Ticker>;

    async fn get_product(&self, ctx: &RequestContext, product_id: &str) -> Result<Product>;

    /// Starts a bank deposit and returns when the funds are expected to land.
    async fn deposit(&mut self, ctx: &RequestContext, currency: &str, amount: f64) -> Result<DateTime<Utc>>;

    /// Submits exactly one buy order. `limit_order` is only consulted for [`OrderType::Limit`].
    async fn create_order(
        &self,
        ctx: &RequestContext,
        product_id: &str,
        amount: f64,
        order_type: OrderType,
        limit_order: &CalcLimitOrder,
    ) -> Result<Order>;

    /// Creation time of the most recent filled buy since `since`, if any.
    async fn last_purchase_time(
        &self,
        ctx: &RequestContext,
        coin: &str,
        currency: &str,
        since: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>>;

    async fn get_fiat_account(&mut self, ctx: &RequestContext, currency: &str) -> Result<Account>;

    fn get_pending_transfers(&self, currency: &str) -> Result<Vec<PendingTransfer>>;
}

pub type BoxedExchange = Box<dyn Exchange>;
