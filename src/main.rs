use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use tera::Tera;

use shopify_insights::config::ServerConfig;
use shopify_insights::db::establish_connection_pool;
use shopify_insights::repository::DieselRepository;
use shopify_insights::routes::health::health;
use shopify_insights::routes::main::{show_dashboard, show_index};
use shopify_insights::routes::{api, json_config, query_config};
use shopify_insights::services::sync::SyncLocks;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);
    log::info!("Connected to database {}", config.database_url);

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    let sync_locks = web::Data::new(SyncLocks::default());
    let bind = (config.address.clone(), config.port);
    log::info!("Server running on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(health)
            .service(show_index)
            .service(show_dashboard)
            .configure(api::configure)
            .app_data(json_config())
            .app_data(query_config())
            .app_data(sync_locks.clone())
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
