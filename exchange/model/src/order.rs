use crate::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// An order accepted by the exchange. Only exists after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: ProductId,
    pub order_id: OrderId,
}
