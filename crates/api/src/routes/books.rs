//! Book list endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::{Page, Paging};
use domain::service::ResourceQuery;
use domain::{Book, BookFilter, BookSort};
use serde::Deserialize;

use super::AppState;
use crate::extract::{ApiQuery, empty_as_none};

#[derive(Debug, Default, Deserialize)]
pub struct BookListParams {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub skip: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub take: Option<i64>,
}

/// GET /books — list books, optionally filtered by title, author and year.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<BookListParams>,
) -> Json<Page<Book>> {
    let query = ResourceQuery::<Book>::new()
        .filter(BookFilter::new(
            params.title.as_deref(),
            params.author.as_deref(),
            params.year,
        ))
        .sort(BookSort::parse(params.sort.as_deref()))
        .paging(Paging::new(params.skip, params.take));

    Json(state.books.list(&query).await)
}
