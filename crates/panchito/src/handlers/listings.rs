//! Listings endpoints.
//!
//! Placeholders for the listings resource: no listings schema exists yet,
//! so the collection is always an empty page and lookups always miss.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// Pagination metadata attached to list responses.
#[derive(Debug, Serialize)]
struct PageMeta {
    page: u32,
    per_page: u32,
    total: u64,
}

/// Envelope for paginated collections.
#[derive(Debug, Serialize)]
struct ListingPage {
    data: Vec<serde_json::Value>,
    meta: PageMeta,
}

/// GET /listings - Paginated listings collection.
pub async fn list_listings(State(state): State<AppState>) -> impl IntoResponse {
    Json(ListingPage {
        data: Vec::new(),
        meta: PageMeta {
            page: 1,
            per_page: state.settings.default_page_size,
            total: 0,
        },
    })
}

/// GET /listings/{id} - Single listing lookup.
pub async fn get_listing(Path(id): Path<String>) -> impl IntoResponse {
    tracing::debug!(listing_id = %id, "lookup against placeholder listings endpoint");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "data": null,
            "error": "Not yet implemented",
        })),
    )
}
