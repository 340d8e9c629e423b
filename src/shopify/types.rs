//! Wire types for the Shopify Admin REST API and their conversion into
//! sync payloads.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::ShopifyError;
use crate::domain::{
    customer::UpsertCustomer, money::to_cents, order::UpsertOrder, product::UpsertProduct,
};

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyCustomer {
    pub id: u64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Sent as a decimal string, e.g. `"199.65"`.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub total_spent: Option<Decimal>,
    pub created_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyVariant {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub variants: Vec<ShopifyVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyOrderCustomer {
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyOrder {
    pub id: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    pub currency: String,
    pub created_at: DateTime<FixedOffset>,
    pub processed_at: Option<DateTime<FixedOffset>>,
    pub customer: Option<ShopifyOrderCustomer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomersPage {
    pub customers: Vec<ShopifyCustomer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsPage {
    pub products: Vec<ShopifyProduct>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersPage {
    pub orders: Vec<ShopifyOrder>,
}

impl From<CustomersPage> for Vec<ShopifyCustomer> {
    fn from(value: CustomersPage) -> Self {
        value.customers
    }
}

impl From<ProductsPage> for Vec<ShopifyProduct> {
    fn from(value: ProductsPage) -> Self {
        value.products
    }
}

impl From<OrdersPage> for Vec<ShopifyOrder> {
    fn from(value: OrdersPage) -> Self {
        value.orders
    }
}

fn cents(amount: Decimal, field: &str, id: u64) -> Result<i64, ShopifyError> {
    let Some(cents) = to_cents(amount) else {
        let message = format!("{field} {amount} out of range on record {id}");
        return Err(ShopifyError::Decode(message));
    };
    Ok(cents)
}

impl TryFrom<ShopifyCustomer> for UpsertCustomer {
    type Error = ShopifyError;

    fn try_from(value: ShopifyCustomer) -> Result<Self, Self::Error> {
        let total_spent_cents = match value.total_spent {
            Some(amount) => cents(amount, "total_spent", value.id)?,
            None => 0,
        };

        Ok(Self {
            shopify_id: value.id.to_string(),
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            total_spent_cents,
            created_at: value.created_at.map(|ts| ts.naive_utc()),
        })
    }
}

impl TryFrom<ShopifyProduct> for UpsertProduct {
    type Error = ShopifyError;

    fn try_from(value: ShopifyProduct) -> Result<Self, Self::Error> {
        // Only the first variant's price is tracked.
        let price_cents = match value.variants.first().and_then(|v| v.price) {
            Some(amount) => cents(amount, "price", value.id)?,
            None => 0,
        };

        Ok(Self {
            shopify_id: value.id.to_string(),
            title: value.title,
            price_cents,
        })
    }
}

impl TryFrom<ShopifyOrder> for UpsertOrder {
    type Error = ShopifyError;

    fn try_from(value: ShopifyOrder) -> Result<Self, Self::Error> {
        Ok(Self {
            shopify_id: value.id.to_string(),
            customer_shopify_id: value.customer.map(|customer| customer.id.to_string()),
            total_price_cents: cents(value.total_price, "total_price", value.id)?,
            currency: value.currency,
            processed_at: value.processed_at.map(|ts| ts.naive_utc()),
            created_at: value.created_at.naive_utc(),
        })
    }
}
