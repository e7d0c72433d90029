//! # Inkwell Binary
//!
//! The entry point that assembles the application based on compile-time features.

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use iw_api::handlers::AppState;
use iw_api::middleware::{security_headers, standard_middleware};
use iw_config::Settings;
use secrecy::ExposeSecret;

#[cfg(feature = "db-sqlite")]
use iw_db_sqlite::SqliteEntryRepo;

#[cfg(not(feature = "db-sqlite"))]
compile_error!("inkwell needs a storage backend; enable the `db-sqlite` feature");

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading configuration")?;

    let default_filter = if settings.is_production() { "info" } else { "debug" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    // 1. Initialize Database Implementation, one pool for the whole process
    #[cfg(feature = "db-sqlite")]
    let repo = SqliteEntryRepo::new(settings.database_url.expose_secret(), settings.pool_size())
        .await
        .context("opening SQLite database")?;

    // 2. Wrap in AppState (Using dynamic dispatch for maximum flexibility)
    let state = web::Data::new(AppState {
        repo: Box::new(repo),
    });

    log::info!(
        "Inkwell starting on http://{}:{} ({:?}, {} db connection(s))",
        settings.host,
        settings.port,
        settings.app_env,
        settings.pool_size()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(security_headers())
            .wrap(standard_middleware())
            .configure(iw_api::configure_routes)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
