use crate::advanced::{CreateOrderRequest, LimitGtc, MarketIoc, OrderConfiguration};
use dca_exchange_core::model::{CalcLimitOrder, ExchangeError, Result};
use dca_model::Side;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

/// Fiat amount with exactly two decimals, rounded half-to-even from the
/// exact binary value of `amount` (`12.345` is slightly above the midpoint,
/// so it becomes `"12.35"`).
pub fn format_fiat(amount: f64) -> Result<String> {
    let amount = Decimal::from_f64_retain(amount).ok_or_else(|| ExchangeError::parse("amount", amount.to_string()))?;
    let mut amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    amount.rescale(2);
    Ok(amount.to_string())
}

fn new_client_order_id() -> String {
    Uuid::new_v4().to_string()
}

fn buy_request(product_id: &str, order_configuration: OrderConfiguration, portfolio_id: &str) -> CreateOrderRequest {
    CreateOrderRequest {
        client_order_id: new_client_order_id(),
        product_id: product_id.to_string(),
        side: Side::Buy,
        order_configuration,
        retail_portfolio_id: (!portfolio_id.is_empty()).then(|| portfolio_id.to_string()),
    }
}

/// Immediate-or-cancel buy for `amount` of the quote currency.
pub fn market_order_request(product_id: &str, amount: f64, portfolio_id: &str) -> Result<CreateOrderRequest> {
    let configuration = OrderConfiguration {
        market_market_ioc: Some(MarketIoc {
            quote_size: format_fiat(amount)?,
        }),
        limit_limit_gtc: None,
    };
    Ok(buy_request(product_id, configuration, portfolio_id))
}

/// Good-till-canceled buy priced by `calc` from the best ask.
pub fn limit_order_request(
    product_id: &str,
    best_ask: Decimal,
    amount: f64,
    portfolio_id: &str,
    calc: &CalcLimitOrder,
) -> Result<CreateOrderRequest> {
    let amount = Decimal::from_f64(amount).ok_or_else(|| ExchangeError::parse("amount", amount.to_string()))?;
    let (order_price, order_size) = calc(best_ask, amount);
    let configuration = OrderConfiguration {
        market_market_ioc: None,
        limit_limit_gtc: Some(LimitGtc {
            base_size: order_size.normalize().to_string(),
            limit_price: order_price.normalize().to_string(),
            post_only: false,
        }),
    };
    Ok(buy_request(product_id, configuration, portfolio_id))
}
