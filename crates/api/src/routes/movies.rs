//! Movie list and era endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::{Page, Paging};
use domain::service::ResourceQuery;
use domain::{Movie, MovieFilter, MovieSort};
use serde::Deserialize;

use super::AppState;
use crate::extract::{ApiQuery, empty_as_none};

/// Query string of `GET /movies`.
///
/// `/movies?director=Nolan&genre=sci&year=2010&sort=title|year|director&skip=0&take=10`
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub director: Option<String>,
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub skip: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub take: Option<i64>,
}

impl MovieListParams {
    pub fn into_query(self) -> ResourceQuery<Movie> {
        ResourceQuery::<Movie>::new()
            .filter(MovieFilter::new(
                self.director.as_deref(),
                self.genre.as_deref(),
                self.year,
            ))
            .sort(MovieSort::parse(self.sort.as_deref()))
            .paging(Paging::new(self.skip, self.take))
    }
}

/// GET /movies — filter, sort and page movies.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<MovieListParams>,
) -> Json<Page<Movie>> {
    Json(state.movies.list(&params.into_query()).await)
}

/// GET /movies/era/{kind} — movies released in an era (`classic` or `modern`).
#[tracing::instrument(skip(state))]
pub async fn era(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Json<Vec<Movie>> {
    Json(state.movies.by_era(&kind).await)
}
