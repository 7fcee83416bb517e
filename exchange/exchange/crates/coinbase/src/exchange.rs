use crate::advanced::{AdvancedTradeApi, AdvancedTradeClient, ListOrdersRequest};
use crate::cache::AccountCache;
use crate::config::CoinbaseConfig;
use crate::legacy::{DepositParams, LegacyClient};
use crate::order::{format_fiat, limit_order_request, market_order_request};
use crate::symbol::{parse_product, ticker_symbol};
use crate::trade::{parse_best_ask, parse_ticker, MARKET_TRADES_DEPTH};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use dca_exchange_core::model::{
    CalcLimitOrder, Credential, Exchange, ExchangeError, RequestContext, Result,
};
use dca_exchange_core::utils::http_client::HttpClient;
use dca_model::{Account, Order, OrderType, PendingTransfer, Product, Ticker};
use tracing::{debug, info, warn};

pub const ORDER_STATUS_FILLED: &str = "FILLED";

/// Coinbase implementation of [`Exchange`]: market data and orders through
/// Advanced Trade, deposits through the legacy API.
///
/// Holds the account cache, so a single instance must not be driven from
/// several tasks at once.
#[derive(Debug)]
pub struct CoinbaseExchange<A = AdvancedTradeClient> {
    advanced: A,
    legacy: LegacyClient,
    accounts: AccountCache,
    portfolio_id: String,
}

impl CoinbaseExchange {
    pub fn new(config: &CoinbaseConfig) -> Result<Self> {
        config.verify()?;
        let urls = config.urls()?;
        let credential = Credential::new(config.api_key.clone(), &config.api_secret)?;
        let http = HttpClient::new();
        let advanced = AdvancedTradeClient::new(http.clone(), credential.clone(), urls.advanced);
        let legacy = LegacyClient::new(http, credential, urls.legacy);
        Ok(Self::with_parts(advanced, legacy, config.portfolio_id.clone()))
    }
    pub fn from_env() -> Result<Self> {
        Self::new(&CoinbaseConfig::from_env()?)
    }
}

impl<A: AdvancedTradeApi> CoinbaseExchange<A> {
    pub fn with_parts(advanced: A, legacy: LegacyClient, portfolio_id: impl Into<String>) -> Self {
        Self {
            advanced,
            legacy,
            accounts: AccountCache::new(),
            portfolio_id: portfolio_id.into(),
        }
    }
    pub fn advanced(&self) -> &A {
        &self.advanced
    }
    pub fn legacy(&self) -> &LegacyClient {
        &self.legacy
    }
    pub fn accounts(&self) -> &AccountCache {
        &self.accounts
    }
    /// Drops the cached account so the next lookup sees fresh balances.
    pub fn invalidate_account(&mut self, currency: &str) -> Option<Account> {
        self.accounts.invalidate(currency)
    }
}

#[async_trait]
impl<A: AdvancedTradeApi> Exchange for CoinbaseExchange<A> {
    fn get_ticker_symbol(&self, base_currency: &str, quote_currency: &str) -> String {
        ticker_symbol(base_currency, quote_currency)
    }

    async fn get_ticker(&self, ctx: &RequestContext, product_id: &str) -> Result<Ticker> {
        let trades = self
            .advanced
            .get_market_trades(ctx, product_id, MARKET_TRADES_DEPTH)
            .await?;
        parse_ticker(&trades)
    }

    async fn get_product(&self, ctx: &RequestContext, product_id: &str) -> Result<Product> {
        let product = self.advanced.get_product(ctx, product_id).await?;
        parse_product(&product)
    }

    async fn deposit(&mut self, ctx: &RequestContext, currency: &str, amount: f64) -> Result<DateTime<Utc>> {
        let account = self.accounts.account_for(ctx, &self.advanced, currency).await?;
        let methods = self.advanced.list_payment_methods(ctx).await?;
        let bank = methods
            .into_iter()
            .find(|m| m.is_ach())
            .ok_or(ExchangeError::NoBankAccount)?;
        let params = DepositParams {
            amount: format_fiat(amount)?,
            currency: currency.to_string(),
            payment_method: bank.id,
            commit: true,
        };
        info!(currency, amount = %params.amount, account = %account.id, "initiating deposit");
        let response = self.legacy.deposit(ctx, &account.id, &params).await?;
        info!(deposit = %response.data.id, status = %response.data.status, payout_at = %response.data.payout_at, "deposit accepted");
        Ok(response.data.payout_at)
    }

    async fn create_order(
        &self,
        ctx: &RequestContext,
        product_id: &str,
        amount: f64,
        order_type: OrderType,
        limit_order: &CalcLimitOrder,
    ) -> Result<Order> {
        let request = match order_type {
            OrderType::Market => market_order_request(product_id, amount, &self.portfolio_id)?,
            OrderType::Limit => {
                let trades = self
                    .advanced
                    .get_market_trades(ctx, product_id, MARKET_TRADES_DEPTH)
                    .await?;
                let best_ask = parse_best_ask(&trades)?;
                limit_order_request(product_id, best_ask, amount, &self.portfolio_id, limit_order)?
            }
        };
        info!(
            product_id,
            %order_type,
            client_order_id = %request.client_order_id,
            "submitting order: {:?}",
            request.order_configuration
        );
        let response = self.advanced.create_order(ctx, &request).await?;
        if !response.success {
            let message = response.error_response.map(|e| e.message).unwrap_or_default();
            warn!(product_id, reason = %response.failure_reason, %message, "order rejected");
            return Err(ExchangeError::rejected(response.failure_reason, message));
        }
        let success = response.success_response.unwrap_or_default();
        let order = Order {
            symbol: if success.product_id.is_empty() {
                request.product_id
            } else {
                success.product_id
            },
            order_id: if success.order_id.is_empty() {
                response.order_id
            } else {
                success.order_id
            },
        };
        info!(symbol = %order.symbol, order_id = %order.order_id, "order accepted");
        Ok(order)
    }

    async fn last_purchase_time(
        &self,
        ctx: &RequestContext,
        coin: &str,
        currency: &str,
        since: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>> {
        let request = ListOrdersRequest {
            product_ids: vec![ticker_symbol(coin, currency)],
            order_status: vec![ORDER_STATUS_FILLED.to_string()],
            start_date: since.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        };
        let orders = self.advanced.list_orders(ctx, &request).await?;
        let Some(last) = orders.orders.first() else {
            debug!(coin, currency, %since, "no filled orders");
            return Ok(None);
        };
        let created = DateTime::parse_from_rfc3339(&last.created_time)
            .map_err(|_| ExchangeError::parse("created_time", last.created_time.as_str()))?;
        Ok(Some(created.with_timezone(&Utc)))
    }

    async fn get_fiat_account(&mut self, ctx: &RequestContext, currency: &str) -> Result<Account> {
        self.accounts.account_for(ctx, &self.advanced, currency).await
    }

    fn get_pending_transfers(&self, _currency: &str) -> Result<Vec<PendingTransfer>> {
        // transfer history is not fetched; nothing is ever reported as in flight
        Ok(Vec::new())
    }
}
