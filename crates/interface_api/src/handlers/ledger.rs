//! Student ledger, payment, and receipt handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use core_kernel::StudentId;
use domain_fees::{Actor, Receipt};
use uuid::Uuid;

use crate::dto::ledger::{
    AssignFeeStructureRequest, LedgerResponse, ReceiptQuery, RecordPaymentRequest,
};
use crate::error::ApiError;
use crate::AppState;

/// Assigns a fee structure to a student
pub async fn assign_structure(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignFeeStructureRequest>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let ledger = state
        .recorder
        .assign(
            StudentId::from(id),
            request.template_id(),
            request.discount(),
            &actor,
        )
        .await?;
    Ok(Json(ledger.into()))
}

/// Records a payment against a student's ledger
pub async fn record_payment(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<LedgerResponse>), ApiError> {
    let ledger = state
        .recorder
        .record_payment(StudentId::from(id), request.into_spec()?, actor)
        .await?;
    Ok((StatusCode::CREATED, Json(ledger.into())))
}

/// Gets a student's ledger with derived totals
pub async fn get_ledger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let ledger = state.recorder.get_ledger(StudentId::from(id)).await?;
    Ok(Json(ledger.into()))
}

/// Generates the receipt for one transaction, defaulting to the latest
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ReceiptQuery>,
) -> Result<Json<Receipt>, ApiError> {
    let receipt = state
        .receipts
        .generate(StudentId::from(id), query.transaction_id())
        .await?;
    Ok(Json(receipt))
}
