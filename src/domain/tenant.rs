use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of an onboarded Shopify storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Unique identifier of the tenant.
    pub id: i32,
    /// Display name of the merchant workspace.
    pub name: String,
    /// Shop domain without protocol or trailing slash, e.g. `demo.myshopify.com`.
    pub shopify_url: String,
    /// Admin API access token. Never leaves the server.
    #[serde(skip_serializing, default)]
    pub access_token: String,
    /// Contact email stored in lowercase.
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTenant {
    pub name: String,
    pub shopify_url: String,
    pub access_token: String,
    pub email: String,
}

impl NewTenant {
    /// Build a tenant payload, normalising the shop URL and email.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        shop_url: &str,
        access_token: impl Into<String>,
        email: &str,
    ) -> Self {
        Self {
            name: name.into(),
            shopify_url: normalize_shop_url(shop_url),
            access_token: access_token.into(),
            email: email.trim().to_lowercase(),
        }
    }
}

/// Strip a leading `http://`/`https://` and a trailing slash from a shop URL.
///
/// Shop domains are case-insensitive, so the result is lowercased as well.
pub fn normalize_shop_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();

    let without_scheme = ["https://", "http://"]
        .iter()
        .find_map(|scheme| lowered.strip_prefix(scheme))
        .unwrap_or(&lowered);

    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme)
        .to_string()
}
