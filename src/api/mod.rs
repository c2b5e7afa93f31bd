//! HTTP routes / HTTP maršruti

pub mod search;

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rust_embed::RustEmbed;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Embedded static assets (stylesheet) / Iegultie statiskie faili
#[derive(RustEmbed)]
#[folder = "static"]
struct StaticAssets;

/// Build the application router / Izveido maršrutētāju
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(search::index_page))
        .route("/api/health", get(health_check))
        .route("/api/categories", get(search::categories))
        .route("/api/search", post(search::search))
        .route("/static/*path", get(serve_static))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check with build info / Veselības pārbaude
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "build_time": env!("BUILD_TIME"),
    }))
}

/// Serve an embedded static file / Atgriež iegulto failu
async fn serve_static(Path(path): Path<String>) -> Response {
    match StaticAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => not_found().await.into_response(),
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
