use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::{render_template, render_template_with_status};
use crate::services::{ServiceError, main as main_service};

#[get("/")]
pub async fn show_index(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_index_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("current_page", "index");
            context.insert("tenants", &data.tenants);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list tenants: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/dashboard/{tenant_id}")]
pub async fn show_dashboard(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let tenant_id = path.into_inner();

    match main_service::load_dashboard_page(repo.get_ref(), tenant_id) {
        Ok(tenant) => {
            let mut context = Context::new();
            context.insert("current_page", "dashboard");
            context.insert("tenant", &tenant);
            render_template(&tera, "dashboard/index.html", &context)
        }
        Err(ServiceError::NotFound) => {
            let mut context = Context::new();
            context.insert("current_page", "not_found");
            context.insert("tenant_id", &tenant_id);
            render_template_with_status(
                &tera,
                StatusCode::NOT_FOUND,
                "main/not_found.html",
                &context,
            )
        }
        Err(err) => {
            log::error!("Failed to load dashboard for tenant {tenant_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
