use dca_model::Side;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAccountsResponse {
    #[serde(default)]
    pub accounts: Vec<AdvancedAccount>,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub cursor: String,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetAccountResponse {
    pub account: AdvancedAccount,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdvancedAccount {
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    pub currency: String,
    #[serde(default)]
    pub available_balance: Balance,
    #[serde(default)]
    pub hold: Balance,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub ready: bool,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Decimal amount as sent by the exchange, e.g. `{"value": "12.50", "currency": "USD"}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Balance {
    pub value: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketTradesResponse {
    #[serde(default)]
    pub trades: Vec<MarketTrade>,
    #[serde(default)]
    pub best_bid: String,
    #[serde(default)]
    pub best_ask: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketTrade {
    #[serde(default)]
    pub trade_id: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub side: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductResponse {
    pub product_id: String,
    #[serde(default)]
    pub price: String,
    pub base_min_size: String,
    pub base_currency_id: String,
    pub quote_currency_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    /// idempotency key, a fresh uuid per submission
    pub client_order_id: String,
    pub product_id: String,
    pub side: Side,
    pub order_configuration: OrderConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_portfolio_id: Option<String>,
}

/// Exactly one of the two configurations is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_market_ioc: Option<MarketIoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_limit_gtc: Option<LimitGtc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketIoc {
    pub quote_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitGtc {
    pub base_size: String,
    pub limit_price: String,
    pub post_only: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub failure_reason: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub success_response: Option<CreateOrderSuccess>,
    #[serde(default)]
    pub error_response: Option<CreateOrderFailure>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderSuccess {
    pub order_id: String,
    pub product_id: String,
    #[serde(default)]
    pub client_order_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderFailure {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error_details: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOrdersRequest {
    pub product_ids: Vec<String>,
    pub order_status: Vec<String>,
    /// RFC 3339, inclusive
    pub start_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersResponse {
    #[serde(default)]
    pub orders: Vec<HistoricalOrder>,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub cursor: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoricalOrder {
    pub order_id: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub status: String,
    pub created_time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPaymentMethodsResponse {
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub currency: String,
}

impl PaymentMethod {
    pub const ACH: &'static str = "ACH";

    pub fn is_ach(&self) -> bool {
        self.kind == Self::ACH
    }
}
