use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::Registry;

mod account;
pub mod error;

pub use error::{ApiError, ErrorResponse};

/// Builds the account routes on top of `registry`.
pub fn router(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/account", get(account::get_all).post(account::create))
        .route(
            "/account/{id}",
            get(account::get_by_id).put(account::update).delete(account::delete_by_id),
        )
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

/// Run the HTTP server until it fails
pub async fn serve(addr: std::net::SocketAddr, registry: Arc<Registry>) -> std::io::Result<()> {
    let app = router(registry);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
