//! Contains all the routes that this application can handle.

mod api;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::{web::types::NotFound, AppState};

/// Plain text answer of `GET /api`.
pub const API_BANNER: &str = "Mrdotb Blog API with cloudflare workers";

async fn banner() -> &'static str {
    API_BANNER
}

/// Shared by unknown paths and known paths hit with the wrong method.
async fn not_found() -> (StatusCode, Json<NotFound>) {
    (StatusCode::NOT_FOUND, Json(NotFound::default()))
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api", get(banner).fallback(not_found))
        .route("/api/subscribe", post(api::subscribe).fallback(not_found))
        .fallback(not_found)
        .with_state(app_state)
}
