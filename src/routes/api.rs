//! JSON endpoints consumed by the dashboard.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use serde::Serialize;

use crate::config::ServerConfig;
use crate::domain::sync::SyncReport;
use crate::forms::tenants::AddTenantForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::analytics::{self, TenantQuery};
use crate::services::sync::{self as sync_service, SyncLocks, SyncRequest};
use crate::services::{ServiceError, tenants};
use crate::shopify::ShopifyClient;

#[derive(Debug, Serialize)]
struct SyncResponse {
    message: &'static str,
    report: SyncReport,
}

/// Maps service failures of read endpoints to responses, hiding internals.
fn failure_response(err: ServiceError, context: &str, generic: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) | ServiceError::Conflict(message) => {
            error_response(StatusCode::BAD_REQUEST, &message)
        }
        ServiceError::NotFound => error_response(StatusCode::NOT_FOUND, "Not found"),
        err => {
            log::error!("{context}: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, generic)
        }
    }
}

#[post("/tenants")]
pub async fn create_tenant(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddTenantForm>,
) -> impl Responder {
    match tenants::create_tenant(repo.get_ref(), form) {
        Ok(tenant) => HttpResponse::Created().json(tenant),
        Err(err) => failure_response(err, "Error creating tenant", "Failed to create tenant"),
    }
}

#[get("/tenants")]
pub async fn list_tenants(repo: web::Data<DieselRepository>) -> impl Responder {
    match tenants::list_tenants(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => failure_response(err, "Error listing tenants", "Failed to fetch tenants"),
    }
}

/// Run a full Shopify sync for a tenant and answer once it has finished.
///
/// Unlike the read endpoints, upstream and unexpected failures are reported
/// with their underlying message.
#[post("/ingestion/sync")]
pub async fn sync_data(
    repo: web::Data<DieselRepository>,
    locks: web::Data<SyncLocks>,
    config: web::Data<ServerConfig>,
    web::Json(request): web::Json<SyncRequest>,
) -> impl Responder {
    let shopify_config = &config.shopify;
    let result = sync_service::sync_tenant(repo.get_ref(), locks.get_ref(), request, |tenant| {
        ShopifyClient::for_tenant(tenant, shopify_config)
    })
    .await;

    match result {
        Ok(report) => HttpResponse::Ok().json(SyncResponse {
            message: "Data sync completed successfully",
            report,
        }),
        Err(ServiceError::Validation(message)) => {
            error_response(StatusCode::BAD_REQUEST, &message)
        }
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, "Tenant not found"),
        Err(err) => {
            log::error!("Sync error: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

#[get("/analytics/stats")]
pub async fn stats(
    repo: web::Data<DieselRepository>,
    query: web::Query<TenantQuery>,
) -> impl Responder {
    match analytics::load_stats(repo.get_ref(), &query) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => failure_response(err, "Error fetching stats", "Failed to fetch stats"),
    }
}

#[get("/analytics/orders-by-date")]
pub async fn orders_by_date(
    repo: web::Data<DieselRepository>,
    query: web::Query<TenantQuery>,
) -> impl Responder {
    let today = Utc::now().date_naive();
    match analytics::load_orders_by_date(repo.get_ref(), &query, today) {
        Ok(days) => HttpResponse::Ok().json(days),
        Err(err) => failure_response(
            err,
            "Error fetching orders by date",
            "Failed to fetch orders by date",
        ),
    }
}

#[get("/analytics/top-customers")]
pub async fn top_customers(
    repo: web::Data<DieselRepository>,
    query: web::Query<TenantQuery>,
) -> impl Responder {
    match analytics::load_top_customers(repo.get_ref(), &query) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => failure_response(
            err,
            "Error fetching top customers",
            "Failed to fetch top customers",
        ),
    }
}

#[get("/analytics/customers-over-time")]
pub async fn customers_over_time(
    repo: web::Data<DieselRepository>,
    query: web::Query<TenantQuery>,
) -> impl Responder {
    let today = Utc::now().date_naive();
    match analytics::load_customers_over_time(repo.get_ref(), &query, today) {
        Ok(days) => HttpResponse::Ok().json(days),
        Err(err) => failure_response(
            err,
            "Error fetching customers over time",
            "Failed to fetch customer growth data",
        ),
    }
}

/// Register every JSON endpoint on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_tenant)
        .service(list_tenants)
        .service(sync_data)
        .service(stats)
        .service(orders_by_date)
        .service(top_customers)
        .service(customers_over_time);
}
