use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use tera::Tera;

use shopify_insights::config::{ServerConfig, ShopifyConfig};
use shopify_insights::repository::DieselRepository;
use shopify_insights::routes::health::health;
use shopify_insights::routes::main::{show_dashboard, show_index};
use shopify_insights::routes::{api, json_config, query_config};
use shopify_insights::services::sync::SyncLocks;

mod common;

fn server_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        address: "127.0.0.1".to_string(),
        port: 0,
        shopify: ShopifyConfig::default(),
    }
}

macro_rules! test_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .service(health)
                .service(show_index)
                .service(show_dashboard)
                .configure(api::configure)
                .app_data(json_config())
                .app_data(query_config())
                .app_data(web::Data::new(SyncLocks::default()))
                .app_data(web::Data::new(Tera::new("templates/**/*").unwrap()))
                .app_data(web::Data::new(DieselRepository::new($db.pool())))
                .app_data(web::Data::new(server_config())),
        )
        .await
    };
}

fn tenant_body() -> Value {
    json!({
        "name": "Demo Store",
        "shopUrl": "https://demo.myshopify.com/",
        "accessToken": "shpat_secret",
        "email": "Owner@Example.com"
    })
}

#[actix_web::test]
async fn test_create_and_list_tenants() {
    let db = common::TestDb::new("test_api_create_and_list_tenants.db");
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(tenant_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["shopifyUrl"], "demo.myshopify.com");
    assert_eq!(created["email"], "owner@example.com");
    assert!(created.get("accessToken").is_none());

    let req = test::TestRequest::get().uri("/tenants").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
}

#[actix_web::test]
async fn test_duplicate_tenant_is_rejected() {
    let db = common::TestDb::new("test_api_duplicate_tenant.db");
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(tenant_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(json!({
            "name": "Copy",
            "shopifyUrl": "demo.myshopify.com",
            "accessToken": "shpat_other",
            "email": "copy@example.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Shopify URL already exists");
}

#[actix_web::test]
async fn test_missing_tenant_fields_are_rejected() {
    let db = common::TestDb::new("test_api_missing_tenant_fields.db");
    let app = test_app!(db);

    let body = json!({ "shopUrl": "demo.myshopify.com", "accessToken": "x" });
    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[actix_web::test]
async fn test_analytics_require_tenant_id() {
    let db = common::TestDb::new("test_api_analytics_require_tenant_id.db");
    let app = test_app!(db);

    for path in [
        "/analytics/stats",
        "/analytics/orders-by-date",
        "/analytics/top-customers",
        "/analytics/customers-over-time",
    ] {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{path}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Tenant ID is required");
    }
}

#[actix_web::test]
async fn test_analytics_for_empty_tenant() {
    let db = common::TestDb::new("test_api_analytics_for_empty_tenant.db");
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/analytics/stats?tenantId=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let stats: Value = test::read_body_json(resp).await;
    assert_eq!(
        stats,
        json!({ "totalCustomers": 0, "totalOrders": 0, "totalRevenue": 0.0 })
    );

    let req = test::TestRequest::get()
        .uri("/analytics/orders-by-date?tenantId=1")
        .to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|r| r["sales"] == 0.0 && r["orders"] == 0));

    let req = test::TestRequest::get()
        .uri("/analytics/customers-over-time?tenantId=1")
        .to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert!(
        rows.iter()
            .all(|r| r["newCustomers"] == 0 && r["totalCustomers"] == 0)
    );

    let req = test::TestRequest::get()
        .uri("/analytics/top-customers?tenantId=1")
        .to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert!(rows.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_sync_validates_tenant() {
    let db = common::TestDb::new("test_api_sync_validates_tenant.db");
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/ingestion/sync")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Tenant ID is required");

    let req = test::TestRequest::post()
        .uri("/ingestion/sync")
        .set_json(json!({ "tenantId": 99 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Tenant not found");
}

#[actix_web::test]
async fn test_health_and_pages() {
    let db = common::TestDb::new("test_api_health_and_pages.db");
    let app = test_app!(db);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());

    let req = test::TestRequest::post()
        .uri("/tenants")
        .set_json(tenant_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = test::read_body(resp).await;
    let html = std::str::from_utf8(&html).unwrap();
    assert!(html.contains(&format!("/dashboard/{}", created["id"])));

    let req = test::TestRequest::get()
        .uri(&format!("/dashboard/{}", created["id"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/dashboard/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
