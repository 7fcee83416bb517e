use thiserror::Error;

pub type Result<T, E = ExchangeError> = std::result::Result<T, E>;

/// Every failure surfaced by an exchange client. Nothing here is retried
/// locally: the caller decides whether to retry, alert or abort.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// private key could not be decoded or the token could not be built
    #[error("jwt: {0}")]
    Credential(String),
    /// any status other than 200/201, with the raw body
    #[error("status: {status}, body: {body}")]
    Remote { status: u16, body: String },
    #[error("json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to parse {field} from {value:?}")]
    Parse { field: &'static str, value: String },
    #[error("{0}")]
    NotFound(String),
    #[error("No ACH bank account found on this account")]
    NoBankAccount,
    #[error("order failed with {reason}, {message}")]
    OrderRejected { reason: String, message: String },
    #[error("request cancelled")]
    Cancelled,
    #[error("request deadline exceeded")]
    DeadlineExceeded,
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("config: {0}")]
    Config(String),
}

impl ExchangeError {
    pub fn credential(msg: impl ToString) -> Self {
        Self::Credential(msg.to_string())
    }
    pub fn parse(field: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            field,
            value: value.into(),
        }
    }
    pub fn no_wallet(currency: &str) -> Self {
        Self::NotFound(format!("No {} wallet on this account", currency))
    }
    pub fn rejected(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OrderRejected {
            reason: reason.into(),
            message: message.into(),
        }
    }
    pub fn config(msg: impl ToString) -> Self {
        Self::Config(msg.to_string())
    }
    /// Whether the failure came from the caller giving up rather than the exchange.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Parses a decimal string field into `f64`, reporting which field was bad.
pub fn parse_f64(field: &'static str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| ExchangeError::parse(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64("best_ask", "101.25").unwrap(), 101.25);
        let err = parse_f64("best_ask", "n/a").unwrap_err();
        assert!(matches!(err, ExchangeError::Parse { field: "best_ask", .. }));
    }

    #[test]
    fn test_remote_error_display() {
        let err = ExchangeError::Remote {
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(err.to_string(), "status: 401, body: unauthorized");
    }
}
