use crate::advanced::ProductResponse;
use dca_exchange_core::model::{parse_f64, Result};
use dca_model::Product;

/// Product id for a pair, e.g. `BTC-USD`.
pub fn ticker_symbol(base_currency: &str, quote_currency: &str) -> String {
    format!("{}-{}", base_currency, quote_currency)
}

pub fn parse_product(product: &ProductResponse) -> Result<Product> {
    Ok(Product {
        quote_currency: product.quote_currency_id.clone(),
        base_currency: product.base_currency_id.clone(),
        base_min_size: parse_f64("base_min_size", &product.base_min_size)?,
    })
}
