use diesel::prelude::*;

use crate::{
    domain::{customer::Customer, order::Order, product::Product},
    models::{
        customer::Customer as DbCustomer, order::Order as DbOrder, product::Product as DbProduct,
    },
    repository::errors::RepositoryResult,
    repository::{CatalogReader, DieselRepository},
};

impl CatalogReader for DieselRepository {
    fn list_customers(&self, tenant_id: i32) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let items = customers::table
            .filter(customers::tenant_id.eq(tenant_id))
            .order(customers::id.asc())
            .load::<DbCustomer>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn list_products(&self, tenant_id: i32) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let items = products::table
            .filter(products::tenant_id.eq(tenant_id))
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn list_orders(&self, tenant_id: i32) -> RepositoryResult<Vec<Order>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let items = orders::table
            .filter(orders::tenant_id.eq(tenant_id))
            .order(orders::created_at.desc())
            .then_order_by(orders::id.desc())
            .load::<DbOrder>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}
