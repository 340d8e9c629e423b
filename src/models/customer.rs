use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, UpsertCustomer};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::customers,
    belongs_to(super::tenant::Tenant, foreign_key = tenant_id)
)]
pub struct Customer {
    pub id: i32,
    pub tenant_id: i32,
    pub shopify_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub total_spent_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub tenant_id: i32,
    pub shopify_id: &'a str,
    pub email: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub total_spent_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Mutable columns overwritten when the customer already exists.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers, treat_none_as_null = true)]
pub struct CustomerChanges<'a> {
    pub email: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub total_spent_cents: i64,
    pub updated_at: NaiveDateTime,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            tenant_id: value.tenant_id,
            shopify_id: value.shopify_id,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            total_spent_cents: value.total_spent_cents,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewCustomer<'a> {
    pub fn from_upsert(tenant_id: i32, value: &'a UpsertCustomer, now: NaiveDateTime) -> Self {
        Self {
            tenant_id,
            shopify_id: value.shopify_id.as_str(),
            email: value.email.as_deref(),
            first_name: value.first_name.as_deref(),
            last_name: value.last_name.as_deref(),
            total_spent_cents: value.total_spent_cents,
            created_at: value.created_at.unwrap_or(now),
            updated_at: now,
        }
    }
}

impl<'a> CustomerChanges<'a> {
    pub fn from_upsert(value: &'a UpsertCustomer, now: NaiveDateTime) -> Self {
        Self {
            email: value.email.as_deref(),
            first_name: value.first_name.as_deref(),
            last_name: value.last_name.as_deref(),
            total_spent_cents: value.total_spent_cents,
            updated_at: now,
        }
    }
}
