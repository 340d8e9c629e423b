use chrono::{NaiveDate, NaiveDateTime};

/// Headline counters for a tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TenantStats {
    pub total_customers: i64,
    pub total_orders: i64,
    pub total_revenue_cents: i64,
}

/// Minimal projection of an order used for daily bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPoint {
    pub created_at: NaiveDateTime,
    pub total_price_cents: i64,
}

/// Revenue and order volume for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySales {
    pub date: NaiveDate,
    pub sales_cents: i64,
    pub orders: i64,
}

/// New and cumulative customers for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCustomers {
    pub date: NaiveDate,
    pub new_customers: i64,
    pub total_customers: i64,
}
