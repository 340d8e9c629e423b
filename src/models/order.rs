use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{Order as DomainOrder, UpsertOrder};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::orders,
    belongs_to(super::tenant::Tenant, foreign_key = tenant_id)
)]
pub struct Order {
    pub id: i32,
    pub tenant_id: i32,
    pub shopify_id: String,
    pub customer_id: Option<i32>,
    pub total_price_cents: i64,
    pub currency: String,
    pub processed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub tenant_id: i32,
    pub shopify_id: &'a str,
    pub customer_id: Option<i32>,
    pub total_price_cents: i64,
    pub currency: &'a str,
    pub processed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Columns refreshed on re-sync. `created_at` stays as first recorded.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders, treat_none_as_null = true)]
pub struct OrderChanges<'a> {
    pub customer_id: Option<i32>,
    pub total_price_cents: i64,
    pub currency: &'a str,
    pub processed_at: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            tenant_id: value.tenant_id,
            shopify_id: value.shopify_id,
            customer_id: value.customer_id,
            total_price_cents: value.total_price_cents,
            currency: value.currency,
            processed_at: value.processed_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewOrder<'a> {
    pub fn from_upsert(
        tenant_id: i32,
        value: &'a UpsertOrder,
        customer_id: Option<i32>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            tenant_id,
            shopify_id: value.shopify_id.as_str(),
            customer_id,
            total_price_cents: value.total_price_cents,
            currency: value.currency.as_str(),
            processed_at: value.processed_at,
            created_at: value.created_at,
            updated_at: now,
        }
    }
}

impl<'a> OrderChanges<'a> {
    pub fn from_upsert(
        value: &'a UpsertOrder,
        customer_id: Option<i32>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            customer_id,
            total_price_cents: value.total_price_cents,
            currency: value.currency.as_str(),
            processed_at: value.processed_at,
            updated_at: now,
        }
    }
}
