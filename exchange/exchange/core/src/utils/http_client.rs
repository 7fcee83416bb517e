use crate::model::{ExchangeError, RequestContext, Result};
use reqwest::{IntoUrl, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::Relaxed;
use tracing::*;

static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Thin wrapper over `reqwest` that logs every round trip and maps
/// anything but 200/201 to [`ExchangeError::Remote`].
#[derive(Clone, Default)]
pub struct HttpClient {
    http_client: reqwest::Client,
}
impl Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
    pub fn request(&self, method: reqwest::Method, url: impl IntoUrl) -> reqwest::RequestBuilder {
        self.http_client.request(method, url)
    }
    /// Sends `request` and returns the full body; the body is drained on every path.
    pub async fn execute(&self, ctx: &RequestContext, meta: &str, request: reqwest::Request) -> Result<String> {
        ctx.run(Self::handle_request(meta, &self.http_client, request)).await
    }
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        meta: &str,
        request: reqwest::Request,
    ) -> Result<T> {
        let body = self.execute(ctx, meta, request).await?;
        decode_json(&body)
    }

    async fn handle_request(meta: &str, client: &reqwest::Client, request: reqwest::Request) -> Result<String> {
        let id = REQUEST_ID.fetch_add(1, Relaxed);
        let body = request
            .body()
            .and_then(|x| x.as_bytes())
            .map(|x| std::str::from_utf8(x).unwrap_or("<binary body>"))
            .unwrap_or("<no body>");
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(?id, meta, "{} Sending request: {} {}", method, url, body);
        let response = client.execute(request).await?;
        let status = response.status();
        debug!(?id, meta, "Received headers: {} {} {} {:?}", method, url, status, response.headers());
        let body = response.text().await?;
        if !is_success(status) {
            error!(?id, meta, "Received error response: {} {} {} {}", method, url, status, body);
            return Err(ExchangeError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        debug!(?id, meta, "Received response: {}", body);
        Ok(body)
    }
}

fn is_success(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(ExchangeError::Decode)
}
