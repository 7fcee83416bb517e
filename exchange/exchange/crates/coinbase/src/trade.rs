use crate::advanced::MarketTradesResponse;
use dca_exchange_core::model::{parse_f64, ExchangeError, Result};
use dca_model::Ticker;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Depth requested from the market trades endpoint when looking for the best ask.
pub const MARKET_TRADES_DEPTH: u32 = 10;

pub fn parse_ticker(trades: &MarketTradesResponse) -> Result<Ticker> {
    Ok(Ticker {
        price: parse_f64("best_ask", &trades.best_ask)?,
    })
}

/// Best ask kept as a decimal, for limit pricing.
pub fn parse_best_ask(trades: &MarketTradesResponse) -> Result<Decimal> {
    Decimal::from_str(trades.best_ask.trim()).map_err(|_| ExchangeError::parse("best_ask", trades.best_ask.as_str()))
}
