//! Widget handlers, generic over the API version: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;
use crate::version::WidgetVersion;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

pub const EMPTY_COLLECTION_MESSAGE: &str = "There are no widgets in the system!";

/// Validation guarantees the id; a missing one here is a wiring fault.
fn required_id<V: WidgetVersion>(dto: &V::Dto) -> Result<Uuid, AppError> {
    V::dto_id(dto).ok_or_else(|| AppError::Internal("validated widget has no id".into()))
}

pub async fn list<V: WidgetVersion>(State(state): State<AppState>) -> Result<Json<Vec<V::Dto>>, AppError> {
    let items = state.gateway().list().await?;
    if items.is_empty() {
        return Err(AppError::NotFound(Some(EMPTY_COLLECTION_MESSAGE.to_string())));
    }
    tracing::debug!(version = %V::VERSION, count = items.len(), "list widgets");
    Ok(Json(items.iter().map(V::from_entity).collect()))
}

pub async fn read<V: WidgetVersion>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<V::Dto>, AppError> {
    let item = state
        .gateway()
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound(None))?;
    Ok(Json(V::from_entity(&item)))
}

pub async fn create<V: WidgetVersion>(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<V::Dto>,
) -> Result<StatusCode, AppError> {
    let id = required_id::<V>(&dto)?;
    let mut gateway = state.gateway();
    if gateway.get_by_id(id).await?.is_some() {
        tracing::debug!(version = %V::VERSION, %id, "widget already exists");
        return Err(AppError::Conflict);
    }
    gateway.insert(V::to_entity(dto));
    gateway.commit().await?;
    tracing::info!(version = %V::VERSION, %id, "widget created");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update<V: WidgetVersion>(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<V::Dto>,
) -> Result<StatusCode, AppError> {
    let id = required_id::<V>(&dto)?;
    let mut gateway = state.gateway();
    let mut item = gateway.get_by_id(id).await?.ok_or(AppError::NotFound(None))?;
    V::apply_update(&mut item, &dto);
    gateway.update(item);
    gateway.commit().await?;
    tracing::info!(version = %V::VERSION, %id, "widget updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete<V: WidgetVersion>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut gateway = state.gateway();
    let item = gateway.get_by_id(id).await?.ok_or(AppError::NotFound(None))?;
    gateway.remove(&item);
    gateway.commit().await?;
    tracing::info!(version = %V::VERSION, %id, "widget deleted");
    Ok(StatusCode::NO_CONTENT)
}
