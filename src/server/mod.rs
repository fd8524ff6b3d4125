//! HTTP server assembly
//!
//! Merges the resource routers over a shared [`AppState`], attaches request
//! tracing and CORS, installs the JSON 404 fallback, and serves with
//! graceful shutdown on SIGTERM/Ctrl+C.

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ApiError;
use crate::{companies, industries, invoices};

/// Application state shared across handlers
///
/// The pool is acquired once at startup and injected into every handler;
/// nothing in the application treats the connection as ambient global state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(companies::routes())
        .merge(invoices::routes())
        .merge(industries::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Fallback for unmatched paths: 404 with `{"message": "Not Found"}`
async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

/// Serve the application with graceful shutdown
pub async fn serve(app: Router, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A lazy pool never connects; routes that don't touch the database can
    // be exercised without PostgreSQL.
    fn lazy_state() -> AppState {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/biztime_unreachable")
            .unwrap();
        AppState { pool }
    }

    #[tokio::test]
    async fn test_build_router_produces_router() {
        let _ = build_router(lazy_state());
    }

    #[tokio::test]
    async fn test_unknown_path_returns_json_404() {
        let server = axum_test::TestServer::new(build_router(lazy_state()));

        let response = server.get("/nope").await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({ "message": "Not Found" }));
    }

    #[tokio::test]
    async fn test_validation_runs_before_storage() {
        let server = axum_test::TestServer::new(build_router(lazy_state()));

        // Fails validation in the handler, so the lazy pool is never used
        let response = server
            .post("/invoices")
            .json(&serde_json::json!({ "comp_code": "acme", "amt": 0 }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Amount must be a positive number");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_400() {
        let server = axum_test::TestServer::new(build_router(lazy_state()));

        let response = server
            .post("/invoices")
            .json(&serde_json::json!({ "comp_code": "acme" }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["message"].is_string());
    }
}
