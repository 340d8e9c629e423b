use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{Product as DomainProduct, UpsertProduct};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::products,
    belongs_to(super::tenant::Tenant, foreign_key = tenant_id)
)]
pub struct Product {
    pub id: i32,
    pub tenant_id: i32,
    pub shopify_id: String,
    pub title: String,
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub tenant_id: i32,
    pub shopify_id: &'a str,
    pub title: &'a str,
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChanges<'a> {
    pub title: &'a str,
    pub price_cents: i64,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            tenant_id: value.tenant_id,
            shopify_id: value.shopify_id,
            title: value.title,
            price_cents: value.price_cents,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewProduct<'a> {
    pub fn from_upsert(tenant_id: i32, value: &'a UpsertProduct, now: NaiveDateTime) -> Self {
        Self {
            tenant_id,
            shopify_id: value.shopify_id.as_str(),
            title: value.title.as_str(),
            price_cents: value.price_cents,
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> ProductChanges<'a> {
    pub fn from_upsert(value: &'a UpsertProduct, now: NaiveDateTime) -> Self {
        Self {
            title: value.title.as_str(),
            price_cents: value.price_cents,
            updated_at: now,
        }
    }
}
