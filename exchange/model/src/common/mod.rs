mod enums;
mod location;

pub use enums::*;
pub use location::*;

pub type OrderId = String;
pub type ProductId = String;
/// Upper-case currency code such as `USD` or `BTC`.
pub type CurrencyCode = String;
