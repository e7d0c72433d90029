//! # iw-api
//!
//! The web routing and orchestration layer for Inkwell.

pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use handlers::AppState;

/// Configures the routes for the diary.
///
/// `/entries/new` is registered before `/entries/{id}` so the form is never
/// mistaken for an entry id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(handlers::index)))
        .service(
            web::resource("/entries/new")
                .route(web::get().to(handlers::new_entry_form))
                .route(web::post().to(handlers::create_entry)),
        )
        .service(
            web::resource(["/entries", "/entries/"])
                .route(web::get().to(handlers::missing_entry_id)),
        )
        .service(web::resource("/entries/{id}").route(web::get().to(handlers::view_entry)));
}
