use crate::advanced::*;
use crate::auth::SignedRequestBuilder;
use async_trait::async_trait;
use dca_exchange_core::model::{Credential, RequestContext, Result};
use dca_exchange_core::utils::http_client::HttpClient;
use dca_exchange_core::utils::http_utils::{append_argument_list, append_argument_pair, ParamVec};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

pub const MIN_ACCOUNTS_PAGE: u32 = 49;
pub const MAX_ACCOUNTS_PAGE: u32 = 250;

/// REST implementation of [`AdvancedTradeApi`], signing every call with the same credential as the legacy client.
#[derive(Debug, Clone)]
pub struct AdvancedTradeClient {
    signer: SignedRequestBuilder,
}

impl AdvancedTradeClient {
    pub fn new(http: HttpClient, credential: Credential, base: Url) -> Self {
        Self {
            signer: SignedRequestBuilder::new(http, credential, base),
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        query: &ParamVec,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let request = self.signer.build(method, path, query, body)?;
        self.signer.http().execute_json(ctx, path, request).await
    }
    async fn get<T: DeserializeOwned>(&self, ctx: &RequestContext, path: &str, query: &ParamVec) -> Result<T> {
        self.send(ctx, Method::GET, path, query, None).await
    }
}

pub fn clamp_accounts_page(limit: u32) -> u32 {
    limit.clamp(MIN_ACCOUNTS_PAGE, MAX_ACCOUNTS_PAGE)
}

#[async_trait]
impl AdvancedTradeApi for AdvancedTradeClient {
    async fn list_accounts(&self, ctx: &RequestContext, limit: u32, cursor: &str) -> Result<ListAccountsResponse> {
        let mut query = ParamVec::new();
        append_argument_pair(&mut query, "limit", clamp_accounts_page(limit));
        append_argument_pair(&mut query, "cursor", cursor);
        self.get(ctx, "/accounts", &query).await
    }

    async fn get_account(&self, ctx: &RequestContext, uuid: &str) -> Result<AdvancedAccount> {
        let response: GetAccountResponse = self.get(ctx, &format!("/accounts/{}", uuid), &ParamVec::new()).await?;
        Ok(response.account)
    }

    async fn get_market_trades(
        &self,
        ctx: &RequestContext,
        product_id: &str,
        limit: u32,
    ) -> Result<MarketTradesResponse> {
        let mut query = ParamVec::new();
        append_argument_pair(&mut query, "limit", limit);
        self.get(ctx, &format!("/products/{}/ticker", product_id), &query)
            .await
    }

    async fn get_product(&self, ctx: &RequestContext, product_id: &str) -> Result<ProductResponse> {
        self.get(ctx, &format!("/products/{}", product_id), &ParamVec::new())
            .await
    }

    async fn create_order(&self, ctx: &RequestContext, request: &CreateOrderRequest) -> Result<CreateOrderResponse> {
        let body = serde_json::to_vec(request)?;
        self.send(ctx, Method::POST, "/orders", &ParamVec::new(), Some(body))
            .await
    }

    async fn list_orders(&self, ctx: &RequestContext, request: &ListOrdersRequest) -> Result<ListOrdersResponse> {
        let mut query = ParamVec::new();
        append_argument_list(&mut query, "product_ids", &request.product_ids);
        append_argument_list(&mut query, "order_status", &request.order_status);
        append_argument_pair(&mut query, "start_date", &request.start_date);
        self.get(ctx, "/orders/historical/batch", &query).await
    }

    async fn list_payment_methods(&self, ctx: &RequestContext) -> Result<Vec<PaymentMethod>> {
        let response: ListPaymentMethodsResponse = self.get(ctx, "/payment_methods", &ParamVec::new()).await?;
        Ok(response.payment_methods)
    }
}
