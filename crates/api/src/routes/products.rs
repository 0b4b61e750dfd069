use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::{Page, Paging};
use domain::service::ResourceQuery;
use domain::{Product, ProductFilter, ProductSort};
use serde::Deserialize;

use super::AppState;
use crate::extract::{ApiQuery, empty_as_none};

#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub name: Option<String>,
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub skip: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub take: Option<i64>,
}

/// GET /products — list products by name or price.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ProductListParams>,
) -> Json<Page<Product>> {
    let query = ResourceQuery::<Product>::new()
        .filter(ProductFilter::new(params.name.as_deref()))
        .sort(ProductSort::parse(params.sort.as_deref()))
        .paging(Paging::new(params.skip, params.take));

    Json(state.products.list(&query).await)
}
