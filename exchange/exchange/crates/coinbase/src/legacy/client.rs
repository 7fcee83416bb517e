use crate::auth::SignedRequestBuilder;
use dca_exchange_core::model::{Credential, RequestContext, Result};
use dca_exchange_core::utils::http_client::{decode_json, HttpClient};
use dca_exchange_core::utils::http_utils::ParamVec;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Generic authenticated JSON-over-HTTP dispatcher for the legacy API.
///
/// One attempt per call; every failure goes straight back to the caller.
#[derive(Debug, Clone)]
pub struct LegacyClient {
    signer: SignedRequestBuilder,
}

impl LegacyClient {
    pub fn new(http: HttpClient, credential: Credential, base: Url) -> Self {
        Self {
            signer: SignedRequestBuilder::new(http, credential, base),
        }
    }

    /// Sends `params` as a JSON body (if any) and returns the raw response body.
    pub async fn send<P: Serialize + Sync + ?Sized>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> Result<String> {
        let body = params.map(serde_json::to_vec).transpose()?;
        let request = self.signer.build(method, path, &ParamVec::new(), body)?;
        self.signer.http().execute(ctx, path, request).await
    }
    pub async fn request<P: Serialize + Sync + ?Sized, T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> Result<T> {
        let body = self.send(ctx, method, path, params).await?;
        decode_json(&body)
    }
    pub async fn get<T: DeserializeOwned>(&self, ctx: &RequestContext, path: &str) -> Result<T> {
        self.request::<(), T>(ctx, Method::GET, path, None).await
    }
    pub async fn post<P: Serialize + Sync + ?Sized, T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
        params: &P,
    ) -> Result<T> {
        self.request(ctx, Method::POST, path, Some(params)).await
    }
}
