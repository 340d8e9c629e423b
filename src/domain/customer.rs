use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Shopify customer synced into a tenant workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Local primary key.
    pub id: i32,
    /// Tenant that owns the customer.
    pub tenant_id: i32,
    /// Identifier assigned by Shopify.
    pub shopify_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Lifetime spend reported by Shopify, in cents.
    pub total_spent_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Customer record as pulled from Shopify, keyed by `shopify_id` within a tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertCustomer {
    pub shopify_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub total_spent_cents: i64,
    /// Upstream creation time; used only when the row is first inserted.
    pub created_at: Option<NaiveDateTime>,
}

impl UpsertCustomer {
    /// Build a payload with only the identifier and spend set.
    #[must_use]
    pub fn new(shopify_id: impl Into<String>, total_spent_cents: i64) -> Self {
        Self {
            shopify_id: shopify_id.into(),
            email: None,
            first_name: None,
            last_name: None,
            total_spent_cents,
            created_at: None,
        }
    }

    /// Attach the customer's email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attach first and last name.
    #[must_use]
    pub fn with_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Attach the upstream creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
