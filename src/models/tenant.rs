use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tenant::{NewTenant as DomainNewTenant, Tenant as DomainTenant};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tenants)]
pub struct Tenant {
    pub id: i32,
    pub name: String,
    pub shopify_url: String,
    pub access_token: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tenants)]
pub struct NewTenant<'a> {
    pub name: &'a str,
    pub shopify_url: &'a str,
    pub access_token: &'a str,
    pub email: &'a str,
}

impl From<Tenant> for DomainTenant {
    fn from(value: Tenant) -> Self {
        Self {
            id: value.id,
            name: value.name,
            shopify_url: value.shopify_url,
            access_token: value.access_token,
            email: value.email,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewTenant> for NewTenant<'a> {
    fn from(value: &'a DomainNewTenant) -> Self {
        Self {
            name: value.name.as_str(),
            shopify_url: value.shopify_url.as_str(),
            access_token: value.access_token.as_str(),
            email: value.email.as_str(),
        }
    }
}
