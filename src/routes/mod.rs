use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error, web};
use serde::Serialize;
use tera::{Context, Tera};

pub mod api;
pub mod health;
pub mod main;

/// JSON body returned by every failing API call.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// Build a `{"error": message}` response with the given status.
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    let body = ErrorBody { error: message };
    HttpResponse::build(status).json(body)
}

/// JSON extractor settings that report malformed bodies as `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::BAD_REQUEST, &err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

/// Query extractor settings that report malformed parameters as `400 {"error": ...}`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::BAD_REQUEST, &err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

/// Render a Tera template into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, StatusCode::OK, template, context)
}

pub fn render_template_with_status(
    tera: &Tera,
    status: StatusCode,
    template: &str,
    context: &Context,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
