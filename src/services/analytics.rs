//! Read-only aggregations behind the `/analytics/*` endpoints.
//!
//! Days are UTC calendar dates. Both daily series are pre-seeded with the
//! trailing window ending at `today`, so quiet days still show up as zeros.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::analytics::{DailyCustomers, DailySales, OrderPoint, TenantStats};
use crate::domain::customer::Customer;
use crate::domain::money::from_cents;
use crate::repository::AnalyticsReader;
use crate::services::{ServiceError, ServiceResult};

/// Number of days, including today, that always appear in daily series.
pub const TRAILING_WINDOW_DAYS: u64 = 7;
/// Size of the top customers leaderboard.
pub const TOP_CUSTOMERS_LIMIT: i64 = 5;

/// Query parameters shared by every analytics endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantQuery {
    pub tenant_id: Option<i32>,
}

impl TenantQuery {
    fn require_tenant_id(&self) -> ServiceResult<i32> {
        self.tenant_id
            .ok_or_else(|| ServiceError::Validation("Tenant ID is required".to_string()))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub total_customers: i64,
    pub total_orders: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

impl From<TenantStats> for StatsView {
    fn from(value: TenantStats) -> Self {
        Self {
            total_customers: value.total_customers,
            total_orders: value.total_orders,
            total_revenue: from_cents(value.total_revenue_cents),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailySalesView {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub sales: Decimal,
    pub orders: i64,
}

impl From<DailySales> for DailySalesView {
    fn from(value: DailySales) -> Self {
        Self {
            date: value.date,
            sales: from_cents(value.sales_cents),
            orders: value.orders,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyCustomersView {
    pub date: NaiveDate,
    pub new_customers: i64,
    pub total_customers: i64,
}

impl From<DailyCustomers> for DailyCustomersView {
    fn from(value: DailyCustomers) -> Self {
        Self {
            date: value.date,
            new_customers: value.new_customers,
            total_customers: value.total_customers,
        }
    }
}

/// Customer row exposed by the top customers endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: i32,
    pub shopify_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    pub created_at: NaiveDateTime,
}

impl From<Customer> for CustomerView {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            shopify_id: value.shopify_id,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            total_spent: from_cents(value.total_spent_cents),
            created_at: value.created_at,
        }
    }
}

/// Customer count, order count and revenue for a tenant.
pub fn load_stats<R>(repo: &R, query: &TenantQuery) -> ServiceResult<StatsView>
where
    R: AnalyticsReader + ?Sized,
{
    let tenant_id = query.require_tenant_id()?;
    let stats = repo.load_stats(tenant_id).map_err(ServiceError::from)?;
    Ok(stats.into())
}

/// Revenue and order count per day, ascending by date.
pub fn load_orders_by_date<R>(
    repo: &R,
    query: &TenantQuery,
    today: NaiveDate,
) -> ServiceResult<Vec<DailySalesView>>
where
    R: AnalyticsReader + ?Sized,
{
    let tenant_id = query.require_tenant_id()?;
    let points = repo
        .list_order_points(tenant_id)
        .map_err(ServiceError::from)?;

    Ok(bucket_orders_by_day(&points, today)
        .into_iter()
        .map(Into::into)
        .collect())
}

/// The tenant's biggest spenders.
pub fn load_top_customers<R>(repo: &R, query: &TenantQuery) -> ServiceResult<Vec<CustomerView>>
where
    R: AnalyticsReader + ?Sized,
{
    let tenant_id = query.require_tenant_id()?;
    let customers = repo
        .list_top_customers(tenant_id, TOP_CUSTOMERS_LIMIT)
        .map_err(ServiceError::from)?;

    Ok(customers.into_iter().map(Into::into).collect())
}

/// New and cumulative customers per day, ascending by date.
pub fn load_customers_over_time<R>(
    repo: &R,
    query: &TenantQuery,
    today: NaiveDate,
) -> ServiceResult<Vec<DailyCustomersView>>
where
    R: AnalyticsReader + ?Sized,
{
    let tenant_id = query.require_tenant_id()?;
    let signups = repo
        .list_customer_signups(tenant_id)
        .map_err(ServiceError::from)?;

    Ok(customers_over_time(&signups, today)
        .into_iter()
        .map(Into::into)
        .collect())
}

fn trailing_window(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..TRAILING_WINDOW_DAYS)
        .rev()
        .filter_map(move |offset| today.checked_sub_days(Days::new(offset)))
}

/// Sum orders into UTC day buckets. Days outside the window are kept.
pub fn bucket_orders_by_day(points: &[OrderPoint], today: NaiveDate) -> Vec<DailySales> {
    let mut buckets: BTreeMap<NaiveDate, DailySales> = trailing_window(today)
        .map(|date| {
            (
                date,
                DailySales {
                    date,
                    sales_cents: 0,
                    orders: 0,
                },
            )
        })
        .collect();

    for point in points {
        let date = point.created_at.date();
        let bucket = buckets.entry(date).or_insert(DailySales {
            date,
            sales_cents: 0,
            orders: 0,
        });
        bucket.sales_cents += point.total_price_cents;
        bucket.orders += 1;
    }

    buckets.into_values().collect()
}

/// Count signups per UTC day with a running total across the whole series.
pub fn customers_over_time(signups: &[NaiveDateTime], today: NaiveDate) -> Vec<DailyCustomers> {
    let mut counts: BTreeMap<NaiveDate, i64> =
        trailing_window(today).map(|date| (date, 0)).collect();

    for created_at in signups {
        *counts.entry(created_at.date()).or_insert(0) += 1;
    }

    let mut cumulative = 0;
    counts
        .into_iter()
        .map(|(date, new_customers)| {
            cumulative += new_customers;
            DailyCustomers {
                date,
                new_customers,
                total_customers: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::mock::MockAnalyticsReader;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, 0, 0).expect("valid time")
    }

    fn point(date: NaiveDate, hour: u32, cents: i64) -> OrderPoint {
        OrderPoint {
            created_at: at(date, hour),
            total_price_cents: cents,
        }
    }

    fn customer(id: i32, cents: i64) -> Customer {
        Customer {
            id,
            tenant_id: 3,
            shopify_id: format!("{}", 1000 + id),
            email: Some(format!("c{id}@example.com")),
            first_name: None,
            last_name: None,
            total_spent_cents: cents,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn empty_series_still_has_seven_zero_days() {
        let today = day(2024, 3, 10);

        let sales = bucket_orders_by_day(&[], today);
        let growth = customers_over_time(&[], today);

        assert_eq!(sales.len(), 7);
        assert_eq!(sales.first().map(|b| b.date), Some(day(2024, 3, 4)));
        assert_eq!(sales.last().map(|b| b.date), Some(today));
        assert!(sales.iter().all(|b| b.sales_cents == 0 && b.orders == 0));

        assert_eq!(growth.len(), 7);
        let untouched = |b: &DailyCustomers| b.new_customers == 0 && b.total_customers == 0;
        assert!(growth.iter().all(untouched));
    }

    #[test]
    fn orders_are_summed_per_day() {
        let today = day(2024, 3, 10);
        let three_days_ago = day(2024, 3, 7);
        let points = vec![
            point(three_days_ago, 9, 500),
            point(today, 1, 1000),
            point(today, 23, 2000),
        ];

        let sales = bucket_orders_by_day(&points, today);

        assert_eq!(sales.len(), 7);
        for bucket in &sales {
            if bucket.date == today {
                assert_eq!((bucket.sales_cents, bucket.orders), (3000, 2));
            } else if bucket.date == three_days_ago {
                assert_eq!((bucket.sales_cents, bucket.orders), (500, 1));
            } else {
                assert_eq!((bucket.sales_cents, bucket.orders), (0, 0));
            }
        }
    }

    #[test]
    fn orders_outside_window_add_buckets_in_order() {
        let today = day(2024, 3, 10);
        let points = vec![point(day(2024, 1, 1), 12, 700)];

        let sales = bucket_orders_by_day(&points, today);

        assert_eq!(sales.len(), 8);
        assert_eq!(sales[0].date, day(2024, 1, 1));
        assert_eq!(sales[0].sales_cents, 700);
        assert!(sales.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn customer_growth_is_cumulative_across_whole_series() {
        let today = day(2024, 3, 10);
        let signups = vec![
            at(day(2024, 2, 1), 8),
            at(day(2024, 2, 1), 9),
            at(day(2024, 3, 9), 10),
            at(today, 11),
        ];

        let growth = customers_over_time(&signups, today);

        assert_eq!(growth.len(), 8);
        assert_eq!(growth[0].date, day(2024, 2, 1));
        assert_eq!(growth[0].new_customers, 2);
        assert_eq!(growth[0].total_customers, 2);
        assert_eq!(growth[1].total_customers, 2);
        assert_eq!(growth[6].new_customers, 1);
        assert_eq!(growth[6].total_customers, 3);
        assert_eq!(growth[7].total_customers, 4);
    }

    #[test]
    fn views_serialize_with_dashboard_field_names() {
        let view = DailySalesView::from(DailySales {
            date: day(2024, 3, 10),
            sales_cents: 3000,
            orders: 2,
        });

        let json = serde_json::to_value(&view).expect("serializable");

        assert_eq!(json["date"], "2024-03-10");
        assert_eq!(json["sales"], 30.0);
        assert_eq!(json["orders"], 2);

        let growth = serde_json::to_value(DailyCustomersView::from(DailyCustomers {
            date: day(2024, 3, 10),
            new_customers: 1,
            total_customers: 4,
        }))
        .expect("serializable");
        assert_eq!(growth["newCustomers"], 1);
        assert_eq!(growth["totalCustomers"], 4);
    }

    #[test]
    fn every_operation_requires_tenant_id() {
        let repo = MockAnalyticsReader::new();
        let query = TenantQuery::default();
        let today = day(2024, 3, 10);

        assert!(matches!(
            load_stats(&repo, &query),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            load_orders_by_date(&repo, &query, today),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            load_top_customers(&repo, &query),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            load_customers_over_time(&repo, &query, today),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn stats_with_no_orders_report_zero_revenue() {
        let mut repo = MockAnalyticsReader::new();
        repo.expect_load_stats()
            .times(1)
            .withf(|tenant_id| *tenant_id == 3)
            .returning(|_| {
                Ok(TenantStats {
                    total_customers: 4,
                    total_orders: 0,
                    total_revenue_cents: 0,
                })
            });

        let query = TenantQuery { tenant_id: Some(3) };
        let stats = load_stats(&repo, &query).expect("success");

        assert_eq!(stats.total_customers, 4);
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_revenue, Decimal::ZERO);

        let json = serde_json::to_value(&stats).expect("serializable");
        assert_eq!(json["totalRevenue"], 0.0);
    }

    #[test]
    fn top_customers_requests_five_and_keeps_order() {
        let mut repo = MockAnalyticsReader::new();
        repo.expect_list_top_customers()
            .times(1)
            .withf(|tenant_id, limit| *tenant_id == 3 && *limit == TOP_CUSTOMERS_LIMIT)
            .returning(|_, _| Ok(vec![customer(2, 9000), customer(1, 4550)]));

        let query = TenantQuery { tenant_id: Some(3) };
        let top = load_top_customers(&repo, &query).expect("success");

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, 2);
        assert_eq!(top[0].total_spent, Decimal::new(90, 0));
        assert_eq!(top[1].total_spent, Decimal::new(455, 1));
    }
}
