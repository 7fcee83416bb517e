use serde::{Deserialize, Serialize};

/// Snapshot of the book's best ask at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub price: f64,
}
