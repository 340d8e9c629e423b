use diesel::prelude::*;

use crate::{
    domain::tenant::{NewTenant as DomainNewTenant, Tenant as DomainTenant},
    models::tenant::{NewTenant as DbNewTenant, Tenant as DbTenant},
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, TenantReader, TenantWriter},
};

impl TenantReader for DieselRepository {
    fn get_tenant_by_id(&self, id: i32) -> RepositoryResult<Option<DomainTenant>> {
        use crate::schema::tenants;

        let mut conn = self.conn()?;
        let tenant = tenants::table
            .filter(tenants::id.eq(id))
            .first::<DbTenant>(&mut conn)
            .optional()?;

        Ok(tenant.map(Into::into))
    }

    fn list_tenants(&self) -> RepositoryResult<Vec<DomainTenant>> {
        use crate::schema::tenants;

        let mut conn = self.conn()?;
        let items = tenants::table
            .order(tenants::id.asc())
            .load::<DbTenant>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl TenantWriter for DieselRepository {
    fn create_tenant(&self, new_tenant: &DomainNewTenant) -> RepositoryResult<DomainTenant> {
        use crate::schema::tenants;

        let mut conn = self.conn()?;
        let db_new = DbNewTenant::from(new_tenant);

        let created = diesel::insert_into(tenants::table)
            .values(&db_new)
            .get_result::<DbTenant>(&mut conn)
            .map_err(|err| match RepositoryError::from(err) {
                RepositoryError::Conflict(_) => {
                    RepositoryError::Conflict("Shopify URL already exists".to_string())
                }
                other => other,
            })?;

        Ok(created.into())
    }
}
