use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::{
    analytics::{OrderPoint, TenantStats},
    customer::Customer,
    order::Order,
    product::Product,
    sync::{SyncBatch, SyncReport},
    tenant::{NewTenant, Tenant},
};
use crate::repository::errors::RepositoryResult;

pub mod analytics;
pub mod catalog;
pub mod errors;
pub mod sync;
pub mod tenant;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over tenant records.
pub trait TenantReader {
    fn get_tenant_by_id(&self, id: i32) -> RepositoryResult<Option<Tenant>>;
    fn list_tenants(&self) -> RepositoryResult<Vec<Tenant>>;
}

/// Write operations over tenant records.
pub trait TenantWriter {
    /// Insert a tenant. Fails with `Conflict` when the shop URL is taken.
    fn create_tenant(&self, new_tenant: &NewTenant) -> RepositoryResult<Tenant>;
}

/// Tenant-scoped listings of the synced Shopify tables.
pub trait CatalogReader {
    fn list_customers(&self, tenant_id: i32) -> RepositoryResult<Vec<Customer>>;
    fn list_products(&self, tenant_id: i32) -> RepositoryResult<Vec<Product>>;
    fn list_orders(&self, tenant_id: i32) -> RepositoryResult<Vec<Order>>;
}

/// Aggregation queries backing the analytics endpoints.
pub trait AnalyticsReader {
    fn load_stats(&self, tenant_id: i32) -> RepositoryResult<TenantStats>;
    /// Order timestamps and totals, oldest first.
    fn list_order_points(&self, tenant_id: i32) -> RepositoryResult<Vec<OrderPoint>>;
    /// Customer creation timestamps, oldest first.
    fn list_customer_signups(&self, tenant_id: i32) -> RepositoryResult<Vec<NaiveDateTime>>;
    /// Highest spenders first, ties broken by ascending id.
    fn list_top_customers(&self, tenant_id: i32, limit: i64) -> RepositoryResult<Vec<Customer>>;
}

/// Persists one sync pass.
pub trait SyncWriter {
    /// Upsert the batch inside a single transaction, customers first, then
    /// products, then orders.
    fn apply_sync_batch(&self, tenant_id: i32, batch: &SyncBatch) -> RepositoryResult<SyncReport>;
}
