//! Item handlers

use crate::error::ApiError;
use crate::storage::memory::DEFAULT_LIMIT;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use sample_types::{Item, ItemFields};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let Query(page) = query?;
    Ok(Json(state.store.list(page.skip, page.limit).await))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.store.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ItemFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(fields) = body?;
    let item = state.store.create(fields).await;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<ItemFields>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = path?;
    // A missing item wins over a bad body
    state.store.get(id).await?;
    let Json(fields) = body?;
    Ok(Json(state.store.update(id, fields).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
