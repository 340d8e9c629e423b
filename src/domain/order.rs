use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Shopify order synced into a tenant workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Local primary key.
    pub id: i32,
    /// Tenant that owns the order.
    pub tenant_id: i32,
    /// Identifier assigned by Shopify.
    pub shopify_id: String,
    /// Local customer id, resolved by the customer's Shopify id during sync.
    pub customer_id: Option<i32>,
    /// Order total in cents.
    pub total_price_cents: i64,
    /// ISO 4217 currency code of the total.
    pub currency: String,
    pub processed_at: Option<NaiveDateTime>,
    /// Upstream creation time (UTC).
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Order record as pulled from Shopify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOrder {
    pub shopify_id: String,
    /// Shopify id of the owning customer, if the order has one.
    pub customer_shopify_id: Option<String>,
    pub total_price_cents: i64,
    pub currency: String,
    pub processed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl UpsertOrder {
    #[must_use]
    pub fn new(
        shopify_id: impl Into<String>,
        total_price_cents: i64,
        currency: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            shopify_id: shopify_id.into(),
            customer_shopify_id: None,
            total_price_cents,
            currency: currency.into(),
            processed_at: None,
            created_at,
        }
    }

    /// Link the order to a Shopify customer id.
    #[must_use]
    pub fn with_customer(mut self, customer_shopify_id: impl Into<String>) -> Self {
        self.customer_shopify_id = Some(customer_shopify_id.into());
        self
    }

    #[must_use]
    pub fn with_processed_at(mut self, processed_at: NaiveDateTime) -> Self {
        self.processed_at = Some(processed_at);
        self
    }
}
