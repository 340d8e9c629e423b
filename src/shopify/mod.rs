//! Shopify Admin REST API client.
//!
//! One client is built per tenant from its shop domain and access token.
//! Collections are read page by page, following the cursor in the `Link`
//! response header until Shopify stops advertising a `rel="next"` page.

mod pagination;
pub mod types;

pub use pagination::next_page_url;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, LINK};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ShopifyConfig;
use crate::domain::{
    customer::UpsertCustomer,
    order::UpsertOrder,
    product::UpsertProduct,
    tenant::{Tenant, normalize_shop_url},
};
use types::{CustomersPage, OrdersPage, ProductsPage};
use types::{ShopifyCustomer, ShopifyOrder, ShopifyProduct};

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Longest error body kept in `ShopifyError::Api`.
const ERROR_BODY_LIMIT: usize = 300;

/// Errors that can occur when talking to the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("Shopify request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success status.
    #[error("Shopify API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Shopify rate limit exceeded")]
    RateLimited,

    /// The access token was rejected or cannot be sent as a header.
    #[error("Shopify rejected the access token")]
    InvalidCredentials,

    #[error("unexpected Shopify payload: {0}")]
    Decode(String),
}

/// Source of upstream records for one tenant.
///
/// Implemented by [`ShopifyClient`]; tests substitute an in-memory source.
#[allow(async_fn_in_trait)]
pub trait ShopifySource {
    async fn fetch_customers(&self) -> Result<Vec<UpsertCustomer>, ShopifyError>;
    async fn fetch_products(&self) -> Result<Vec<UpsertProduct>, ShopifyError>;
    async fn fetch_orders(&self) -> Result<Vec<UpsertOrder>, ShopifyError>;
}

/// HTTP client bound to a single shop.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: reqwest::Client,
    base_url: String,
    page_limit: u32,
}

impl ShopifyClient {
    /// Build a client for the tenant's shop.
    pub fn for_tenant(tenant: &Tenant, config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        Self::new(&tenant.shopify_url, &tenant.access_token, config)
    }

    /// Build a client for `https://{shop_url}/admin/api/{version}`.
    pub fn new(
        shop_url: &str,
        access_token: &str,
        config: &ShopifyConfig,
    ) -> Result<Self, ShopifyError> {
        let base_url = format!(
            "https://{}/admin/api/{}",
            normalize_shop_url(shop_url),
            config.api_version
        );
        Self::with_base_url(base_url, access_token, config)
    }

    /// Build a client against an arbitrary API root, e.g. a local stub server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        access_token: &str,
        config: &ShopifyConfig,
    ) -> Result<Self, ShopifyError> {
        let mut token =
            HeaderValue::from_str(access_token).map_err(|_| ShopifyError::InvalidCredentials)?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, resource: &str, extra_query: &str) -> String {
        format!(
            "{}/{resource}.json?{extra_query}limit={}",
            self.base_url, self.page_limit
        )
    }

    /// Fetch every page of a collection, following `Link: rel="next"` cursors.
    async fn fetch_all<P, T>(&self, first_url: String) -> Result<Vec<T>, ShopifyError>
    where
        P: DeserializeOwned + Into<Vec<T>>,
    {
        let mut items = Vec::new();
        let mut next = Some(first_url);

        while let Some(url) = next.take() {
            log::debug!("GET {url}");
            let response = self.http.get(&url).send().await?;
            let status = response.status();

            match status {
                StatusCode::TOO_MANY_REQUESTS => return Err(ShopifyError::RateLimited),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    return Err(ShopifyError::InvalidCredentials);
                }
                _ if !status.is_success() => {
                    let mut message = response.text().await.unwrap_or_default();
                    truncate_on_char_boundary(&mut message, ERROR_BODY_LIMIT);
                    return Err(ShopifyError::Api {
                        status: status.as_u16(),
                        message,
                    });
                }
                _ => {}
            }

            next = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_url)
                .filter(|candidate| candidate != &url);

            let page: P = response
                .json()
                .await
                .map_err(|err| ShopifyError::Decode(err.to_string()))?;
            items.extend(page.into());
        }

        Ok(items)
    }
}

fn truncate_on_char_boundary(text: &mut String, max_len: usize) {
    if text.len() <= max_len {
        return;
    }
    let mut cut = max_len;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}

fn convert_all<W, D>(records: Vec<W>) -> Result<Vec<D>, ShopifyError>
where
    D: TryFrom<W, Error = ShopifyError>,
{
    records.into_iter().map(D::try_from).collect()
}

impl ShopifySource for ShopifyClient {
    async fn fetch_customers(&self) -> Result<Vec<UpsertCustomer>, ShopifyError> {
        let url = self.collection_url("customers", "");
        let records = self
            .fetch_all::<CustomersPage, ShopifyCustomer>(url)
            .await
            .inspect_err(|err| log::error!("Error fetching customers: {err}"))?;
        convert_all(records)
    }

    async fn fetch_products(&self) -> Result<Vec<UpsertProduct>, ShopifyError> {
        let url = self.collection_url("products", "");
        let records = self
            .fetch_all::<ProductsPage, ShopifyProduct>(url)
            .await
            .inspect_err(|err| log::error!("Error fetching products: {err}"))?;
        convert_all(records)
    }

    async fn fetch_orders(&self) -> Result<Vec<UpsertOrder>, ShopifyError> {
        let url = self.collection_url("orders", "status=any&");
        let records = self
            .fetch_all::<OrdersPage, ShopifyOrder>(url)
            .await
            .inspect_err(|err| log::error!("Error fetching orders: {err}"))?;
        convert_all(records)
    }
}
