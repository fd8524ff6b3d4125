//! Industry resource: listing with company aggregation, create, associate

pub mod handlers;
pub mod model;
pub mod store;

use axum::Router;
use axum::routing::{get, post};

use crate::server::AppState;

/// Build the industry routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/industries",
            get(handlers::list_industries).post(handlers::create_industry),
        )
        .route("/industries/{code}", post(handlers::associate_company))
}
