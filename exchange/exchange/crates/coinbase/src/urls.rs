use dca_exchange_core::model::{ExchangeError, Result};
use reqwest::Url;

pub const LEGACY_API_URL: &str = "https://api.coinbase.com/v2";
pub const ADVANCED_API_URL: &str = "https://api.coinbase.com/api/v3/brokerage";

/// Base urls of the two API families. Paths are appended verbatim.
#[derive(Debug, Clone)]
pub struct CoinbaseUrls {
    pub legacy: Url,
    pub advanced: Url,
}
impl CoinbaseUrls {
    pub fn mainnet() -> Result<Self> {
        Self::new(LEGACY_API_URL, ADVANCED_API_URL)
    }
    pub fn new(legacy: &str, advanced: &str) -> Result<Self> {
        Ok(Self {
            legacy: parse_base_url(legacy)?,
            advanced: parse_base_url(advanced)?,
        })
    }
}

fn parse_base_url(url: &str) -> Result<Url> {
    Url::parse(url.trim_end_matches('/')).map_err(|e| ExchangeError::config(format!("invalid url {}: {}", url, e)))
}

/// `base` + `path`, where `path` starts with `/`.
pub fn join_url(base: &Url, path: &str) -> Result<Url> {
    let url = format!("{}{}", base.as_str().trim_end_matches('/'), path);
    Url::parse(&url).map_err(|e| ExchangeError::config(format!("invalid url {}: {}", url, e)))
}
