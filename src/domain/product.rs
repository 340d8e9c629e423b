use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Shopify product synced into a tenant workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub tenant_id: i32,
    pub shopify_id: String,
    pub title: String,
    /// Price of the first variant in cents; zero when the product has no variants.
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Product record as pulled from Shopify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertProduct {
    pub shopify_id: String,
    pub title: String,
    pub price_cents: i64,
}

impl UpsertProduct {
    #[must_use]
    pub fn new(shopify_id: impl Into<String>, title: impl Into<String>, price_cents: i64) -> Self {
        Self {
            shopify_id: shopify_id.into(),
            title: title.into(),
            price_cents,
        }
    }
}
