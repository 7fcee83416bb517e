use crate::urls::join_url;
use dca_exchange_core::model::{Credential, Result};
use dca_exchange_core::utils::http_client::HttpClient;
use dca_exchange_core::utils::http_utils::ParamVec;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};

/// The `uri` claim: `"{METHOD} {host}{path}"`, query excluded.
pub fn signing_uri(method: &Method, url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{} {}:{}{}", method, host, port, url.path()),
        None => format!("{} {}{}", method, host, url.path()),
    }
}

/// Both API families authenticate the same way: a fresh bearer token per request.
#[derive(Debug, Clone)]
pub struct SignedRequestBuilder {
    http: HttpClient,
    credential: Credential,
    base: Url,
}

impl SignedRequestBuilder {
    pub fn new(http: HttpClient, credential: Credential, base: Url) -> Self {
        Self { http, credential, base }
    }
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
    pub fn base(&self) -> &Url {
        &self.base
    }
    pub fn build(&self, method: Method, path: &str, query: &ParamVec, body: Option<Vec<u8>>) -> Result<reqwest::Request> {
        let url = join_url(&self.base, path)?;
        let token = self.credential.sign(&signing_uri(&method, &url))?;
        let mut builder = self.http.request(method, url).bearer_auth(token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        Ok(builder.build()?)
    }
}
