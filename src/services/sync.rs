//! Pull-and-upsert pass that mirrors a tenant's Shopify data locally.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Deserialize;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::sync::{SyncBatch, SyncReport};
use crate::domain::tenant::Tenant;
use crate::repository::{SyncWriter, TenantReader};
use crate::services::{ServiceError, ServiceResult};
use crate::shopify::{ShopifyError, ShopifySource};

/// Body accepted by `POST /ingestion/sync`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    pub tenant_id: Option<i32>,
}

/// Per-tenant locks so overlapping syncs of one tenant run one after another.
#[derive(Debug, Default)]
pub struct SyncLocks {
    inner: Mutex<HashMap<i32, Arc<AsyncMutex<()>>>>,
}

impl SyncLocks {
    /// Wait until no other sync of `tenant_id` is running and claim it.
    pub async fn acquire(&self, tenant_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(tenant_id).or_default())
        };
        lock.lock_owned().await
    }
}

/// Runs a full sync for the requested tenant.
///
/// `connect` builds the upstream source from the tenant's credentials.
pub async fn sync_tenant<R, S, F>(
    repo: &R,
    locks: &SyncLocks,
    request: SyncRequest,
    connect: F,
) -> ServiceResult<SyncReport>
where
    R: TenantReader + SyncWriter + ?Sized,
    S: ShopifySource,
    F: FnOnce(&Tenant) -> Result<S, ShopifyError>,
{
    let tenant_id = request
        .tenant_id
        .ok_or_else(|| ServiceError::Validation("Tenant ID is required".to_string()))?;

    let tenant = repo
        .get_tenant_by_id(tenant_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let _guard = locks.acquire(tenant.id).await;
    let source = connect(&tenant).map_err(ServiceError::from)?;

    run_sync_pass(repo, &source, &tenant).await
}

/// Fetches customers, products and orders, then writes them in one transaction.
///
/// Nothing is written when any fetch fails.
pub async fn run_sync_pass<R, S>(repo: &R, source: &S, tenant: &Tenant) -> ServiceResult<SyncReport>
where
    R: SyncWriter + ?Sized,
    S: ShopifySource,
{
    log::info!("Syncing customers for {}...", tenant.name);
    let customers = source.fetch_customers().await.map_err(ServiceError::from)?;

    log::info!("Syncing products for {}...", tenant.name);
    let products = source.fetch_products().await.map_err(ServiceError::from)?;

    log::info!("Syncing orders for {}...", tenant.name);
    let orders = source.fetch_orders().await.map_err(ServiceError::from)?;

    let batch = SyncBatch {
        customers,
        products,
        orders,
    };

    let report = repo
        .apply_sync_batch(tenant.id, &batch)
        .map_err(ServiceError::from)?;

    log::info!(
        "Sync complete for {}: {} customers, {} products, {} orders ({} without customer)",
        tenant.name,
        report.customers,
        report.products,
        report.orders,
        report.orders_without_customer
    );

    Ok(report)
}
