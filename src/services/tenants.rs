use crate::domain::tenant::Tenant;
use crate::forms::tenants::AddTenantForm;
use crate::repository::{TenantReader, TenantWriter};
use crate::services::{ServiceError, ServiceResult};

/// Onboards a new storefront.
pub fn create_tenant<R>(repo: &R, form: AddTenantForm) -> ServiceResult<Tenant>
where
    R: TenantWriter + ?Sized,
{
    let new_tenant = form
        .into_new_tenant()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let tenant = repo.create_tenant(&new_tenant).map_err(ServiceError::from)?;
    log::info!("Onboarded tenant {} ({})", tenant.id, tenant.shopify_url);

    Ok(tenant)
}

/// Lists every onboarded tenant.
pub fn list_tenants<R>(repo: &R) -> ServiceResult<Vec<Tenant>>
where
    R: TenantReader + ?Sized,
{
    repo.list_tenants().map_err(ServiceError::from)
}
