use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tenant::{NewTenant, normalize_shop_url};

/// Maximum allowed length for a tenant name.
const NAME_MAX_LEN: u64 = 128;
/// Maximum allowed length for a shop URL as submitted.
const SHOP_URL_MAX_LEN: u64 = 255;

/// Result type returned by the tenant form helpers.
pub type TenantFormResult<T> = Result<T, TenantFormError>;

/// Errors that can occur while processing the onboarding payload.
#[derive(Debug, Error)]
pub enum TenantFormError {
    /// One or more required fields were absent or blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The shop URL is not a bare shop domain once normalised.
    #[error("invalid Shopify URL: {0}")]
    InvalidShopUrl(String),
}

/// JSON payload accepted by `POST /tenants`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTenantForm {
    #[validate(length(max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[serde(alias = "shopifyUrl")]
    #[validate(length(max = SHOP_URL_MAX_LEN))]
    pub shop_url: Option<String>,
    pub access_token: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl AddTenantForm {
    /// Validates the payload and converts it into a normalised `NewTenant`.
    pub fn into_new_tenant(self) -> TenantFormResult<NewTenant> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("shopUrl", &self.shop_url),
            ("accessToken", &self.access_token),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value.as_deref()))
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(TenantFormError::MissingFields(missing));
        }

        self.validate()?;

        let name = self.name.unwrap_or_default();
        let shop_url = self.shop_url.unwrap_or_default();
        let access_token = self.access_token.unwrap_or_default();
        let email = self.email.unwrap_or_default();

        let normalized = normalize_shop_url(&shop_url);
        if normalized.is_empty()
            || normalized.contains('/')
            || normalized.chars().any(char::is_whitespace)
        {
            return Err(TenantFormError::InvalidShopUrl(shop_url));
        }

        Ok(NewTenant::new(
            name.trim(),
            &normalized,
            access_token.trim(),
            &email,
        ))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}
