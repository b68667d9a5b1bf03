//! PayPal REST client implementing the `PaymentGateway` port.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use deposit_types::{
    AccessToken, CapturedOrder, CreatedOrder, GatewayError, OrderPayload, PaymentGateway,
};

use crate::config::PayPalConfig;
use crate::token_cache::TokenCache;

/// Body of a successful client-credentials grant.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// PayPal REST API client.
pub struct PayPalClient {
    config: PayPalConfig,
    http: Client,
    cache: Option<TokenCache>,
}

impl PayPalClient {
    /// Creates a client with the configured request timeout.
    pub fn new(config: PayPalConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(transport)?;

        let cache = config.cache_tokens.then(TokenCache::default);

        Ok(Self {
            config,
            http,
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| GatewayError::Transport(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::Transport("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request_token(&self) -> Result<AccessToken, GatewayError> {
        let (client_id, client_secret) = self
            .config
            .credentials()
            .ok_or(GatewayError::MissingCredentials)?;

        let resp = self
            .http
            .post(self.endpoint(&["v1", "oauth2", "token"])?)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = read_body(resp).await;
            warn!(status = status.as_u16(), "token request rejected");
            return Err(GatewayError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = decode(resp).await?;
        debug!(expires_in = ?token.expires_in, "access token obtained");
        Ok(AccessToken::new(token.access_token, token.expires_in))
    }
}

#[async_trait]
impl PaymentGateway for PayPalClient {
    #[instrument(skip(self))]
    async fn obtain_access_token(&self) -> Result<AccessToken, GatewayError> {
        if let Some(cache) = &self.cache {
            if let Some(token) = cache.get().await {
                debug!("reusing cached access token");
                return Ok(token);
            }
            let token = self.request_token().await?;
            cache.put(&token).await;
            return Ok(token);
        }

        self.request_token().await
    }

    #[instrument(skip(self, token, payload))]
    async fn create_order(
        &self,
        token: &AccessToken,
        payload: &OrderPayload,
    ) -> Result<CreatedOrder, GatewayError> {
        let resp = self
            .http
            .post(self.endpoint(&["v2", "checkout", "orders"])?)
            .bearer_auth(token.secret())
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = read_body(resp).await;
            warn!(status = status.as_u16(), "order creation rejected");
            return Err(GatewayError::Order {
                status: status.as_u16(),
                body,
            });
        }

        let order: CreatedOrder = decode(resp).await?;
        debug!(order_id = %order.id, status = ?order.status, links = order.links.len(), "order created");
        Ok(order)
    }

    #[instrument(skip(self, token))]
    async fn capture_order(
        &self,
        token: &AccessToken,
        order_id: &str,
    ) -> Result<CapturedOrder, GatewayError> {
        let resp = self
            .http
            .post(self.endpoint(&["v2", "checkout", "orders", order_id, "capture"])?)
            .bearer_auth(token.secret())
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = read_body(resp).await;
        if !status.is_success() {
            warn!(status = status.as_u16(), "capture rejected");
            return Err(GatewayError::Capture {
                status: status.as_u16(),
                body,
            });
        }

        // Only pass/fail matters; an unexpected body still counts as captured.
        let captured = serde_json::from_str::<CapturedOrder>(&body).unwrap_or_else(|e| {
            debug!(error = %e, "capture response not in the expected shape");
            CapturedOrder {
                id: order_id.to_string(),
                status: None,
            }
        });
        debug!(status = ?captured.status, "order captured");
        Ok(captured)
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    let kind = if err.is_timeout() { "timeout" } else { "request" };
    GatewayError::Transport(format!("{kind} failed: {}", err.without_url()))
}

async fn read_body(resp: Response) -> String {
    match resp.text().await {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err.without_url(), "could not read provider error body");
            String::new()
        }
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, GatewayError> {
    let body = resp.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}
