//! Dashboard handlers

use axum::{
    extract::{Query, State},
    Json,
};
use domain_fees::{DashboardStats, DefaulterEntry};

use crate::dto::dashboard::DashboardQuery;
use crate::error::ApiError;
use crate::AppState;

/// Computes collection statistics over the filtered population
pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardStats>, ApiError> {
    let stats = state.dashboard.compute_stats(&query.into_filter()?).await?;
    Ok(Json(stats))
}

/// Lists students with a positive balance due, largest balance first
pub async fn list_defaulters(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Vec<DefaulterEntry>>, ApiError> {
    let defaulters = state.dashboard.list_defaulters(&query.into_filter()?).await?;
    Ok(Json(defaulters))
}
