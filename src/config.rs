//! Runtime configuration read from the process environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Shopify Admin API version used when none is configured.
pub const DEFAULT_SHOPIFY_API_VERSION: &str = "2024-01";
/// Largest page Shopify's REST endpoints accept.
pub const MAX_SHOPIFY_PAGE_LIMIT: u32 = 250;

/// Settings for the outbound Shopify client.
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    pub api_version: String,
    pub page_limit: u32,
    pub timeout: Duration,
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_SHOPIFY_API_VERSION.to_string(),
            page_limit: MAX_SHOPIFY_PAGE_LIMIT,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Settings for the HTTP server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    pub shopify: ShopifyConfig,
}

impl ServerConfig {
    /// Read the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = ShopifyConfig::default();
        let page_limit = parse_var("SHOPIFY_PAGE_LIMIT", defaults.page_limit)
            .clamp(1, MAX_SHOPIFY_PAGE_LIMIT);
        let timeout_secs = parse_var("SHOPIFY_TIMEOUT_SECS", defaults.timeout.as_secs());

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or("app.db".to_string()),
            address: env::var("ADDRESS").unwrap_or("127.0.0.1".to_string()),
            port: parse_var("PORT", 3001),
            shopify: ShopifyConfig {
                api_version: env::var("SHOPIFY_API_VERSION")
                    .ok()
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or(defaults.api_version),
                page_limit,
                timeout: Duration::from_secs(timeout_secs),
            },
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {name}={raw:?}, using {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopify_defaults_match_admin_api_limits() {
        let config = ShopifyConfig::default();

        assert_eq!(config.api_version, "2024-01");
        assert_eq!(config.page_limit, 250);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn parse_var_falls_back_for_unset_variables() {
        let value: u16 = parse_var("SHOPIFY_INSIGHTS_TEST_UNSET_VARIABLE", 42);
        assert_eq!(value, 42);
    }
}
