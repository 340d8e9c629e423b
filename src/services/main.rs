use crate::domain::tenant::Tenant;
use crate::repository::TenantReader;
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the tenant picker.
pub struct IndexPageData {
    pub tenants: Vec<Tenant>,
}

/// Loads the tenant list shown on the landing page.
pub fn load_index_page<R>(repo: &R) -> ServiceResult<IndexPageData>
where
    R: TenantReader + ?Sized,
{
    let tenants = repo.list_tenants().map_err(ServiceError::from)?;
    Ok(IndexPageData { tenants })
}

/// Loads the tenant whose dashboard is being opened.
pub fn load_dashboard_page<R>(repo: &R, tenant_id: i32) -> ServiceResult<Tenant>
where
    R: TenantReader + ?Sized,
{
    repo.get_tenant_by_id(tenant_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}
