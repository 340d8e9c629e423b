use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::sync::{SyncBatch, SyncReport},
    models::{
        customer::{CustomerChanges, NewCustomer},
        order::{NewOrder, OrderChanges},
        product::{NewProduct, ProductChanges},
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, SyncWriter},
};

impl SyncWriter for DieselRepository {
    fn apply_sync_batch(&self, tenant_id: i32, batch: &SyncBatch) -> RepositoryResult<SyncReport> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let customers = upsert_customers(conn, tenant_id, batch, now)?;
            let products = upsert_products(conn, tenant_id, batch, now)?;
            let (orders, orders_without_customer) = upsert_orders(conn, tenant_id, batch, now)?;

            Ok(SyncReport {
                customers,
                products,
                orders,
                orders_without_customer,
            })
        })
    }
}

fn upsert_customers(
    conn: &mut SqliteConnection,
    tenant_id: i32,
    batch: &SyncBatch,
    now: NaiveDateTime,
) -> RepositoryResult<usize> {
    use crate::schema::customers;

    for customer in &batch.customers {
        diesel::insert_into(customers::table)
            .values(NewCustomer::from_upsert(tenant_id, customer, now))
            .on_conflict((customers::shopify_id, customers::tenant_id))
            .do_update()
            .set(CustomerChanges::from_upsert(customer, now))
            .execute(conn)?;
    }

    Ok(batch.customers.len())
}

fn upsert_products(
    conn: &mut SqliteConnection,
    tenant_id: i32,
    batch: &SyncBatch,
    now: NaiveDateTime,
) -> RepositoryResult<usize> {
    use crate::schema::products;

    for product in &batch.products {
        diesel::insert_into(products::table)
            .values(NewProduct::from_upsert(tenant_id, product, now))
            .on_conflict((products::shopify_id, products::tenant_id))
            .do_update()
            .set(ProductChanges::from_upsert(product, now))
            .execute(conn)?;
    }

    Ok(batch.products.len())
}

/// Requires the customer phase of the same batch to have run already.
fn upsert_orders(
    conn: &mut SqliteConnection,
    tenant_id: i32,
    batch: &SyncBatch,
    now: NaiveDateTime,
) -> RepositoryResult<(usize, usize)> {
    use crate::schema::orders;

    let mut unresolved = 0usize;

    for order in &batch.orders {
        let customer_id = match order.customer_shopify_id.as_deref() {
            Some(shopify_id) => find_customer_id(conn, tenant_id, shopify_id)?,
            None => None,
        };
        if customer_id.is_none() {
            unresolved += 1;
        }

        diesel::insert_into(orders::table)
            .values(NewOrder::from_upsert(tenant_id, order, customer_id, now))
            .on_conflict((orders::shopify_id, orders::tenant_id))
            .do_update()
            .set(OrderChanges::from_upsert(order, customer_id, now))
            .execute(conn)?;
    }

    Ok((batch.orders.len(), unresolved))
}

fn find_customer_id(
    conn: &mut SqliteConnection,
    tenant_id: i32,
    shopify_id: &str,
) -> RepositoryResult<Option<i32>> {
    use crate::schema::customers;

    let id = customers::table
        .filter(customers::tenant_id.eq(tenant_id))
        .filter(customers::shopify_id.eq(shopify_id))
        .select(customers::id)
        .first::<i32>(conn)
        .optional()?;

    Ok(id)
}
