//! Development fixture server: serves a JSON product listing at `/products`.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::decode_products,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, resolve_products_file};

#[derive(Clone)]
struct AppState {
    products_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let products_file = resolve_products_file(&settings.products_file)?;
    let app = build_router(Arc::new(AppState { products_file }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, products_file = %settings.products_file, "fixture server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/products", get(list_products))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_products(State(state): State<Arc<AppState>>) -> Response {
    let body = match tokio::fs::read(&state.products_file).await {
        Ok(body) => body,
        Err(err) => {
            error!(path = %state.products_file.display(), error = %err, "failed to read products file");
            return internal_error(format!("products file unavailable: {err}"));
        }
    };

    // Catch a broken fixture here instead of handing it to the client.
    match decode_products(&body) {
        Ok(products) => {
            info!(count = products.len(), "serving product list");
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(err) => {
            error!(path = %state.products_file.display(), error = %err, "products file is not a valid listing");
            internal_error(err.to_string())
        }
    }
}

fn internal_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(ErrorCode::Internal, message)),
    )
        .into_response()
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
