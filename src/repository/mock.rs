use chrono::NaiveDateTime;
use mockall::mock;

use super::{AnalyticsReader, SyncWriter, TenantReader, TenantWriter};
use crate::domain::{
    analytics::{OrderPoint, TenantStats},
    customer::Customer,
    sync::{SyncBatch, SyncReport},
    tenant::{NewTenant, Tenant},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub TenantReader {}

    impl TenantReader for TenantReader {
        fn get_tenant_by_id(&self, id: i32) -> RepositoryResult<Option<Tenant>>;
        fn list_tenants(&self) -> RepositoryResult<Vec<Tenant>>;
    }
}

mock! {
    pub TenantWriter {}

    impl TenantWriter for TenantWriter {
        fn create_tenant(&self, new_tenant: &NewTenant) -> RepositoryResult<Tenant>;
    }
}

mock! {
    pub AnalyticsReader {}

    impl AnalyticsReader for AnalyticsReader {
        fn load_stats(&self, tenant_id: i32) -> RepositoryResult<TenantStats>;
        fn list_order_points(&self, tenant_id: i32) -> RepositoryResult<Vec<OrderPoint>>;
        fn list_customer_signups(&self, tenant_id: i32) -> RepositoryResult<Vec<NaiveDateTime>>;
        fn list_top_customers(&self, tenant_id: i32, limit: i64) -> RepositoryResult<Vec<Customer>>;
    }
}

mock! {
    pub SyncRepo {}

    impl TenantReader for SyncRepo {
        fn get_tenant_by_id(&self, id: i32) -> RepositoryResult<Option<Tenant>>;
        fn list_tenants(&self) -> RepositoryResult<Vec<Tenant>>;
    }

    impl SyncWriter for SyncRepo {
        fn apply_sync_batch(&self, tenant_id: i32, batch: &SyncBatch) -> RepositoryResult<SyncReport>;
    }
}
