use crate::CurrencyCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub quote_currency: CurrencyCode,
    pub base_currency: CurrencyCode,
    /// smallest order accepted, in base currency
    pub base_min_size: f64,
}
