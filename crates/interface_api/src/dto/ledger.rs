//! Ledger, assignment, and payment DTOs

use chrono::{DateTime, Utc};
use core_kernel::{Money, StudentId, TemplateId, TransactionId};
use domain_fees::category::{FeeCategory, StudyYear};
use domain_fees::ledger::{PaymentStatus, StudentLedger};
use domain_fees::transaction::{PaymentMode, PaymentSpec, PaymentTransaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AssignFeeStructureRequest {
    pub fee_structure_id: Uuid,
    pub discount: Option<Decimal>,
}

impl AssignFeeStructureRequest {
    pub fn template_id(&self) -> TemplateId {
        TemplateId::from(self.fee_structure_id)
    }

    pub fn discount(&self) -> Money {
        self.discount.map(Money::new).unwrap_or_else(Money::zero)
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub year: String,
    pub fee_towards: String,
    pub amount: Decimal,
    pub mode: String,
    pub remarks: Option<String>,
}

impl RecordPaymentRequest {
    pub fn into_spec(self) -> Result<PaymentSpec, ApiError> {
        let year: StudyYear = self.year.parse().map_err(ApiError::from)?;
        let fee_towards: FeeCategory = self.fee_towards.parse().map_err(ApiError::from)?;
        let mode: PaymentMode = self.mode.parse().map_err(ApiError::from)?;
        Ok(PaymentSpec {
            year,
            fee_towards,
            amount: Money::new(self.amount),
            mode,
            remarks: self.remarks,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ReceiptQuery {
    pub transaction_id: Option<Uuid>,
}

impl ReceiptQuery {
    pub fn transaction_id(&self) -> Option<TransactionId> {
        self.transaction_id.map(TransactionId::from)
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: TransactionId,
    pub receipt_no: String,
    pub date: DateTime<Utc>,
    pub year: StudyYear,
    pub fee_towards: FeeCategory,
    pub amount: Money,
    pub mode: PaymentMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub recorded_by: String,
}

impl From<PaymentTransaction> for TransactionResponse {
    fn from(txn: PaymentTransaction) -> Self {
        Self {
            id: txn.id,
            receipt_no: txn.receipt_no,
            date: txn.date,
            year: txn.year,
            fee_towards: txn.fee_towards,
            amount: txn.amount,
            mode: txn.mode,
            remarks: txn.remarks,
            recorded_by: txn.recorded_by.as_str().to_string(),
        }
    }
}

/// The ledger with its derived totals, the shape every write returns
#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub student_id: StudentId,
    pub fee_structure_id: Option<TemplateId>,
    pub total_payable: Money,
    pub discount: Money,
    pub net_payable: Money,
    pub total_paid: Money,
    pub balance_due: Money,
    pub status: PaymentStatus,
    pub transactions: Vec<TransactionResponse>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<StudentLedger> for LedgerResponse {
    fn from(ledger: StudentLedger) -> Self {
        let view = ledger.view();
        Self {
            student_id: ledger.student_id,
            fee_structure_id: ledger.fee_structure_id,
            total_payable: ledger.total_payable,
            discount: ledger.discount,
            net_payable: view.net_payable,
            total_paid: view.total_paid,
            balance_due: view.balance_due,
            status: view.status,
            transactions: ledger.transactions.into_iter().map(Into::into).collect(),
            assigned_at: ledger.assigned_at,
            updated_at: ledger.updated_at,
        }
    }
}
