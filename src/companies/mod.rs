//! Company resource: list, detail with joins, create, update, delete

pub mod handlers;
pub mod model;
pub mod store;

use axum::Router;
use axum::routing::get;

use crate::server::AppState;

/// Build the company routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(handlers::list_companies).post(handlers::create_company),
        )
        .route(
            "/companies/{code}",
            get(handlers::get_company)
                .put(handlers::update_company)
                .delete(handlers::delete_company),
        )
}
