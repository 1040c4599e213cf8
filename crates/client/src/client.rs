//! HTTP collaborator for the basket and review endpoints.

use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::Serialize;
use storefront_basket::BasketService;
use storefront_core::{ProductId, ServiceError};
use storefront_reviews::{NewReview, ReviewEntry, ReviewService};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::StorefrontConfig;
use crate::csrf::{CSRF_HEADER, CsrfToken};
use crate::wire::{AddReviewForm, ErrorBody, RemoveFromBasketRequest, UpdateBasketRequest};

const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url {0:?}: {1}")]
    InvalidBaseUrl(String, String),
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

/// Talks to the storefront server. Cheap to clone; clones share a pool.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    base_url: Url,
    csrf: CsrfToken,
}

impl StorefrontClient {
    pub fn new(config: &StorefrontConfig, csrf: CsrfToken) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(config.base_url.clone(), e.to_string()))?;

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());
        let http = builder.build().map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            csrf,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| ServiceError::Network(format!("bad endpoint {path}: {e}")))
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ServiceError> {
        let url = self.endpoint(path)?;
        let request_id = Uuid::now_v7();
        debug!(%url, %request_id, "POST (json)");

        let resp = self
            .http
            .post(url)
            .header(CSRF_HEADER, self.csrf.as_str())
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        ensure_success(resp, request_id).await
    }

    async fn post_form<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ServiceError> {
        let url = self.endpoint(path)?;
        let request_id = Uuid::now_v7();
        debug!(%url, %request_id, "POST (form)");

        let resp = self
            .http
            .post(url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .form(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        ensure_success(resp, request_id).await
    }
}

fn map_transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Network(err.to_string())
    }
}

async fn ensure_success(resp: Response, request_id: Uuid) -> Result<Response, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        debug!(%request_id, status = status.as_u16(), "request confirmed");
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    warn!(%request_id, status = status.as_u16(), %message, "request rejected");
    Err(ServiceError::api(status.as_u16(), message))
}

#[async_trait(?Send)]
impl BasketService for StorefrontClient {
    async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), ServiceError> {
        self.post_json("/update-basket", &UpdateBasketRequest::new(product_id, quantity))
            .await
            .map(|_| ())
    }

    async fn remove_line(&self, product_id: ProductId) -> Result<(), ServiceError> {
        self.post_json("/delete-from-basket", &RemoveFromBasketRequest::new(product_id))
            .await
            .map(|_| ())
    }
}

#[async_trait(?Send)]
impl ReviewService for StorefrontClient {
    async fn create_review(&self, review: &NewReview) -> Result<ReviewEntry, ServiceError> {
        let form = AddReviewForm::new(review, self.csrf.as_str());
        let resp = self.post_form("/add-review", &form).await?;
        resp.json::<ReviewEntry>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> CsrfToken {
        CsrfToken::new("tok").unwrap()
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let config = StorefrontConfig {
            base_url: "::nope".to_string(),
            ..StorefrontConfig::default()
        };
        assert!(matches!(
            StorefrontClient::new(&config, token()),
            Err(ClientError::InvalidBaseUrl(..))
        ));
    }

    #[test]
    fn endpoints_resolve_against_base_url() {
        let config = StorefrontConfig {
            base_url: "https://shop.example/store/".to_string(),
            ..StorefrontConfig::default()
        };
        let client = StorefrontClient::new(&config, token()).unwrap();
        assert_eq!(
            client.endpoint("/update-basket").unwrap().as_str(),
            "https://shop.example/update-basket"
        );
    }
}
