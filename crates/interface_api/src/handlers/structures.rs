//! Fee structure catalog handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use core_kernel::TemplateId;
use uuid::Uuid;

use crate::dto::structures::{
    CreateFeeStructureRequest, FeeStructureResponse, ListFeeStructuresQuery,
};
use crate::error::ApiError;
use crate::AppState;

/// Creates a fee structure template
pub async fn create_structure(
    State(state): State<AppState>,
    Json(request): Json<CreateFeeStructureRequest>,
) -> Result<(StatusCode, Json<FeeStructureResponse>), ApiError> {
    let template = state.catalog.create(request.into_spec()?).await?;
    Ok((StatusCode::CREATED, Json(template.into())))
}

/// Lists fee structure templates
pub async fn list_structures(
    State(state): State<AppState>,
    Query(query): Query<ListFeeStructuresQuery>,
) -> Result<Json<Vec<FeeStructureResponse>>, ApiError> {
    let templates = state.catalog.list(&query.into_filter()?).await?;
    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

/// Gets one fee structure template
pub async fn get_structure(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeeStructureResponse>, ApiError> {
    let template = state.catalog.get(TemplateId::from(id)).await?;
    Ok(Json(template.into()))
}

/// Updates a fee structure template, recomputing its total
pub async fn update_structure(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateFeeStructureRequest>,
) -> Result<Json<FeeStructureResponse>, ApiError> {
    let template = state
        .catalog
        .update(TemplateId::from(id), request.into_spec()?)
        .await?;
    Ok(Json(template.into()))
}

/// Deletes an unreferenced fee structure template
pub async fn delete_structure(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(TemplateId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
