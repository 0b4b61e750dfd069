use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::{Page, Paging};
use domain::service::ResourceQuery;
use domain::{Todo, TodoFilter, TodoSort};
use serde::Deserialize;

use super::AppState;
use crate::extract::{ApiQuery, empty_as_none};

#[derive(Debug, Default, Deserialize)]
pub struct TodoListParams {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub is_done: Option<bool>,
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub skip: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub take: Option<i64>,
}

/// GET /todos — list todos in creation order unless sorted by title.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<TodoListParams>,
) -> Json<Page<Todo>> {
    let query = ResourceQuery::<Todo>::new()
        .filter(TodoFilter::new(params.title.as_deref(), params.is_done))
        .sort(TodoSort::parse(params.sort.as_deref()))
        .paging(Paging::new(params.skip, params.take));

    Json(state.todos.list(&query).await)
}
