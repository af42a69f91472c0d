mod appointments;
mod auth;
mod booking;
mod catalog;
mod config;
mod database;
mod error;
mod logging;
mod models;
mod protocol;
mod schema;
mod utils;


use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Context;

use crate::{
    config::Settings,
    database::{Accounts, AppointmentStore, Catalog, DbPool},
    error::ApiError,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::from_env()?;
    logging::init(settings.log_level);

    let pool = database::build_pool(&settings.database_url, settings.pool_size)?;
    tracing::info!(
        database = %settings.database_url,
        bind = %settings.bind_addr,
        "starting booking server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(
                middleware::TrailingSlash::Always,
            ))
            .wrap(middleware::Logger::default())
            .configure(configure(pool.clone()))
    })
    .bind(&settings.bind_addr)
    .with_context(|| format!("Failed to bind {}", settings.bind_addr))?
    .run()
    .await
    .context("Server error")
}

/// Registers shared state and every route on an `App`.
pub fn configure(pool: DbPool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(AppointmentStore::new(pool.clone())))
            .app_data(web::Data::new(Catalog::new(pool.clone())))
            .app_data(web::Data::new(Accounts::new(pool)))
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(|err, _req| {
                        ApiError::validation(format!("Invalid JSON: {}", err)).into()
                    }),
            )
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                ApiError::not_found(format!("Not found: {}", err)).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                ApiError::validation(format!("Invalid query: {}", err)).into()
            }))
            .service(healthz)
            .configure(auth::config)
            .configure(catalog::config)
            .configure(appointments::config);
    }
}

#[get("/healthz/")]
async fn healthz() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}
