use serde::Serialize;

use crate::domain::{customer::UpsertCustomer, order::UpsertOrder, product::UpsertProduct};

/// Everything fetched from Shopify for one sync pass of a tenant.
///
/// Applied in phase order: customers, then products, then orders. Orders look
/// up their customer by Shopify id, so the customer phase must run first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncBatch {
    pub customers: Vec<UpsertCustomer>,
    pub products: Vec<UpsertProduct>,
    pub orders: Vec<UpsertOrder>,
}

/// Row counts written by a sync pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    /// Orders whose customer could not be resolved within the tenant.
    pub orders_without_customer: usize,
}
