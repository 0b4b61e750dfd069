//! Get, create, update and delete handlers shared by every resource.
//!
//! List endpoints differ per resource in their query parameters and live in
//! the resource's own module.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use common::EntityId;
use domain::{Book, Movie, Product, Resource, ResourceService, Todo};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::AppState;
use crate::error::ApiError;
use crate::extract::ApiJson;

/// Picks the service for one resource type out of the shared state.
pub trait ServiceFor<R: Resource> {
    fn service(&self) -> &ResourceService<R>;
}

impl ServiceFor<Movie> for AppState {
    fn service(&self) -> &ResourceService<Movie> {
        &self.movies
    }
}

impl ServiceFor<Book> for AppState {
    fn service(&self) -> &ResourceService<Book> {
        &self.books
    }
}

impl ServiceFor<Todo> for AppState {
    fn service(&self) -> &ResourceService<Todo> {
        &self.todos
    }
}

impl ServiceFor<Product> for AppState {
    fn service(&self) -> &ResourceService<Product> {
        &self.products
    }
}

/// GET /{collection}/{id} — load one entity.
#[tracing::instrument(skip(state), fields(resource = R::NAME))]
pub async fn get_one<R>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError>
where
    R: Resource + Serialize,
    AppState: ServiceFor<R>,
{
    let id = parse_entity_id(&id)?;
    let entity = ServiceFor::<R>::service(state.as_ref()).get(id).await?;
    Ok(Json(entity))
}

/// POST /{collection} — validate and store a new entity.
///
/// Responds `201 Created` with a `Location` header naming the new entity.
#[tracing::instrument(skip(state, payload), fields(resource = R::NAME))]
pub async fn create<R>(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<R::Create>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<R>), ApiError>
where
    R: Resource + Serialize,
    R::Create: DeserializeOwned,
    AppState: ServiceFor<R>,
{
    let entity = ServiceFor::<R>::service(state.as_ref()).create(payload).await?;
    let location = format!("/{}/{}", R::COLLECTION, entity.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(entity),
    ))
}

/// PUT /{collection}/{id} — apply an update to an existing entity.
#[tracing::instrument(skip(state, payload), fields(resource = R::NAME))]
pub async fn update<R>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<R::Update>,
) -> Result<Json<R>, ApiError>
where
    R: Resource + Serialize,
    R::Update: DeserializeOwned,
    AppState: ServiceFor<R>,
{
    let id = parse_entity_id(&id)?;
    let entity = ServiceFor::<R>::service(state.as_ref()).update(id, payload).await?;
    Ok(Json(entity))
}

/// DELETE /{collection}/{id} — remove an entity.
#[tracing::instrument(skip(state), fields(resource = R::NAME))]
pub async fn delete<R>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: Resource,
    AppState: ServiceFor<R>,
{
    let id = parse_entity_id(&id)?;
    ServiceFor::<R>::service(state.as_ref()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn parse_entity_id(id: &str) -> Result<EntityId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}
