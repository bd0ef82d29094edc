//! 通用 CRUD 处理器

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};

use super::service::CrudService;
use crate::core::{error::StoreError, payload::decode_patch, record::Record};

/// GET /<plural>
pub async fn list<R: Record>(State(service): State<CrudService<R>>) -> Json<Vec<R>> {
    Json(service.list().await)
}

/// POST /create/<entity>
pub async fn create<R: Record>(
    State(service): State<CrudService<R>>,
    body: Bytes,
) -> Result<Json<R>, StoreError> {
    let patch = decode_patch::<R::Patch>(&body, R::FIELDS);
    Ok(Json(service.create(patch).await?))
}

/// DELETE /delete/<entity>/:id
pub async fn delete<R: Record>(
    State(service): State<CrudService<R>>,
    Path(id): Path<String>,
) -> Json<R> {
    Json(service.delete(&id).await)
}

/// PUT /update/<entity>/:id
pub async fn update<R: Record>(
    State(service): State<CrudService<R>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<R>, StoreError> {
    let patch = decode_patch::<R::Patch>(&body, R::FIELDS);
    Ok(Json(service.update(&id, patch).await?))
}
