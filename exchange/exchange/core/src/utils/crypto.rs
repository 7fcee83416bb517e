use crate::model::{ExchangeError, Result};
use p256::ecdsa::SigningKey;
use p256::pkcs8::DecodePrivateKey;
use p256::SecretKey;
pub use secrecy::ExposeSecret;
pub use secrecy::SecretString;
use serde_with::DeserializeFromStr;
use std::convert::Infallible;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

/// PEM-encoded P-256 private key, kept out of `Debug` output.
#[derive(Clone, DeserializeFromStr)]
pub struct EcPrivateKey {
    pem: SecretString,
}

impl EcPrivateKey {
    pub fn new(pem: impl Into<String>) -> Self {
        Self {
            pem: SecretString::new(normalize_pem(&pem.into())),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.pem.expose_secret().trim().is_empty()
    }
    pub fn expose_pem(&self) -> &str {
        self.pem.expose_secret()
    }
    pub fn decode(&self) -> Result<SigningKey> {
        decode_ec_pem(self.pem.expose_secret())
    }
}

impl FromStr for EcPrivateKey {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Debug for EcPrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("EcPrivateKey([REDACTED])")
    }
}

/// `.env` files carry the PEM on one line with literal `\n` separators.
pub fn normalize_pem(s: &str) -> String {
    s.replace("\\n", "\n")
}

/// Accepts both SEC1 (`EC PRIVATE KEY`) and PKCS#8 (`PRIVATE KEY`) encodings.
pub fn decode_ec_pem(pem: &str) -> Result<SigningKey> {
    let pem = pem.trim();
    if !pem.starts_with("-----BEGIN") {
        return Err(ExchangeError::credential("Could not decode private key"));
    }
    let secret = if pem.contains("BEGIN EC PRIVATE KEY") {
        SecretKey::from_sec1_pem(pem).map_err(ExchangeError::credential)?
    } else {
        SecretKey::from_pkcs8_pem(pem).map_err(ExchangeError::credential)?
    };
    Ok(SigningKey::from(secret))
}
