//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub entities: EntityCounts,
}

/// Live entities per resource.
#[derive(Serialize)]
pub struct EntityCounts {
    pub movies: usize,
    pub books: usize,
    pub todos: usize,
    pub products: usize,
}

/// GET /health — liveness plus the size of each store.
pub async fn check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        entities: EntityCounts {
            movies: state.movies.count().await,
            books: state.books.count().await,
            todos: state.todos.count().await,
            products: state.products.count().await,
        },
    })
}
