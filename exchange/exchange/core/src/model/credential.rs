use crate::model::{ExchangeError, Result};
use crate::utils::crypto::EcPrivateKey;
use crate::utils::sign::sign_jwt;
use p256::ecdsa::SigningKey;
use std::fmt::{Debug, Formatter};

/// API key name plus its EC private key. Decoded once, immutable afterwards.
#[derive(Clone)]
pub struct Credential {
    key_name: String,
    signing_key: SigningKey,
}

impl Credential {
    /// Fails with [`ExchangeError::Credential`] when the key cannot be decoded.
    pub fn new(key_name: impl Into<String>, private_key: &EcPrivateKey) -> Result<Self> {
        let key_name = key_name.into();
        if key_name.is_empty() {
            return Err(ExchangeError::credential("key name is empty"));
        }
        Ok(Self {
            key_name,
            signing_key: private_key.decode()?,
        })
    }
    pub fn key_name(&self) -> &str {
        &self.key_name
    }
    /// Mints a fresh token bound to `uri`, e.g. `GET api.coinbase.com/v2/accounts`.
    pub fn sign(&self, uri: &str) -> Result<String> {
        sign_jwt(uri, &self.key_name, &self.signing_key)
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key_name", &self.key_name)
            .finish_non_exhaustive()
    }
}
