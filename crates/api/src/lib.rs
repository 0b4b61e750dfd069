//! HTTP API server for the movie, book, todo and product services.
//!
//! Each resource gets list/get/create/update/delete endpoints backed by an
//! in-memory store, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::{Book, Movie, Product, Todo};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;
use routes::resource::{create, delete, get_one, update};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/movies", get(routes::movies::list).post(create::<Movie>))
        .route(
            "/movies/{id}",
            get(get_one::<Movie>)
                .put(update::<Movie>)
                .delete(delete::<Movie>),
        )
        .route("/movies/era/{kind}", get(routes::movies::era))
        .route("/books", get(routes::books::list).post(create::<Book>))
        .route(
            "/books/{id}",
            get(get_one::<Book>).put(update::<Book>).delete(delete::<Book>),
        )
        .route("/todos", get(routes::todos::list).post(create::<Todo>))
        .route(
            "/todos/{id}",
            get(get_one::<Todo>).put(update::<Todo>).delete(delete::<Todo>),
        )
        .route("/products", get(routes::products::list).post(create::<Product>))
        .route(
            "/products/{id}",
            get(get_one::<Product>)
                .put(update::<Product>)
                .delete(delete::<Product>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state with an empty in-memory store per resource.
pub fn create_default_state(config: &Config) -> Arc<AppState> {
    use domain::ResourceService;
    use entity_store::InMemoryStore;

    tracing::debug!(book_duplicates = %config.book_duplicates, "creating resource services");

    Arc::new(AppState {
        movies: ResourceService::in_memory(),
        books: ResourceService::with_policy(InMemoryStore::new(), config.book_duplicates),
        todos: ResourceService::in_memory(),
        products: ResourceService::in_memory(),
    })
}
