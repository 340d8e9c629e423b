use chrono::NaiveDateTime;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable};

use crate::{
    domain::{
        analytics::{OrderPoint, TenantStats},
        customer::Customer as DomainCustomer,
    },
    models::customer::Customer as DbCustomer,
    repository::errors::RepositoryResult,
    repository::{AnalyticsReader, DieselRepository},
};

impl AnalyticsReader for DieselRepository {
    fn load_stats(&self, tenant_id: i32) -> RepositoryResult<TenantStats> {
        use crate::schema::{customers, orders};

        let mut conn = self.conn()?;

        let total_customers = customers::table
            .filter(customers::tenant_id.eq(tenant_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        let total_orders = orders::table
            .filter(orders::tenant_id.eq(tenant_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        // SUM is NULL when the tenant has no orders.
        let total_revenue_cents = orders::table
            .filter(orders::tenant_id.eq(tenant_id))
            .select(sql::<Nullable<BigInt>>("SUM(total_price_cents)"))
            .get_result::<Option<i64>>(&mut conn)?
            .unwrap_or(0);

        Ok(TenantStats {
            total_customers,
            total_orders,
            total_revenue_cents,
        })
    }

    fn list_order_points(&self, tenant_id: i32) -> RepositoryResult<Vec<OrderPoint>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let rows = orders::table
            .filter(orders::tenant_id.eq(tenant_id))
            .order(orders::created_at.asc())
            .select((orders::created_at, orders::total_price_cents))
            .load::<(NaiveDateTime, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(created_at, total_price_cents)| OrderPoint {
                created_at,
                total_price_cents,
            })
            .collect())
    }

    fn list_customer_signups(&self, tenant_id: i32) -> RepositoryResult<Vec<NaiveDateTime>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let rows = customers::table
            .filter(customers::tenant_id.eq(tenant_id))
            .order(customers::created_at.asc())
            .select(customers::created_at)
            .load::<NaiveDateTime>(&mut conn)?;

        Ok(rows)
    }

    fn list_top_customers(
        &self,
        tenant_id: i32,
        limit: i64,
    ) -> RepositoryResult<Vec<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let rows = customers::table
            .filter(customers::tenant_id.eq(tenant_id))
            .order(customers::total_spent_cents.desc())
            .then_order_by(customers::id.asc())
            .limit(limit)
            .load::<DbCustomer>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
