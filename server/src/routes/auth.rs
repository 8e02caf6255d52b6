//! Session probe used by the client's auth bootstrap.
//!
//! The marketing host keeps no sessions; staff sessions belong to the admin
//! backend. Answering here keeps `/api/auth/me` well-defined for the client
//! when the site is served on its own.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// `GET /api/auth/me`: always unauthenticated on this host.
pub async fn me() -> impl IntoResponse {
    tracing::debug!("session probe on marketing host");
    (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "error": "unauthenticated" })))
}
