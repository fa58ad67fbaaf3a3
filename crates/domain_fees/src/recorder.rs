//! Payment recorder
//!
//! The only writer of student ledgers. Assignment and payment recording for
//! the same student are serialized by the ledger store; validation happens
//! before any mutation, so a failed call leaves the ledger untouched.

use std::sync::Arc;

use core_kernel::{Money, StudentId, TemplateId};
use tracing::info;

use crate::error::FeesError;
use crate::ledger::{Assignment, StudentLedger};
use crate::ports::{LedgerStore, StudentDirectory, TemplateStore};
use crate::transaction::{Actor, PaymentSpec, PaymentTransaction};

/// Service recording assignments and payments against student ledgers
pub struct PaymentRecorder {
    ledgers: Arc<dyn LedgerStore>,
    templates: Arc<dyn TemplateStore>,
    directory: Arc<dyn StudentDirectory>,
}

impl PaymentRecorder {
    pub fn new(
        ledgers: Arc<dyn LedgerStore>,
        templates: Arc<dyn TemplateStore>,
        directory: Arc<dyn StudentDirectory>,
    ) -> Self {
        Self {
            ledgers,
            templates,
            directory,
        }
    }

    /// Assigns a fee structure to a student
    ///
    /// Copies the template total into the ledger as a frozen snapshot. On
    /// first assignment the ledger is created; on reassignment the snapshot
    /// fields are overwritten and the transaction history is preserved.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the template or student is unknown
    /// - `Validation` if the discount is negative
    pub async fn assign(
        &self,
        student_id: StudentId,
        structure_id: TemplateId,
        discount: Money,
        actor: &Actor,
    ) -> Result<StudentLedger, FeesError> {
        let discount = discount
            .ensure_non_negative()
            .map_err(|_| FeesError::validation(format!("Discount must not be negative, got {}", discount)))?;

        let template = self
            .templates
            .get(structure_id)
            .await?
            .ok_or_else(|| FeesError::not_found("Fee structure", structure_id))?;

        self.directory
            .lookup(student_id)
            .await?
            .ok_or_else(|| FeesError::not_found("Student", student_id))?;

        let ledger = self
            .ledgers
            .upsert_assignment(
                student_id,
                Assignment {
                    fee_structure_id: template.id,
                    total_payable: template.total_amount,
                    discount,
                },
            )
            .await?;

        info!(
            student_id = %student_id,
            template_id = %structure_id,
            total_payable = %ledger.total_payable,
            discount = %ledger.discount,
            actor = %actor,
            "Fee structure assigned"
        );
        Ok(ledger)
    }

    /// Records one payment against a student's ledger
    ///
    /// The transaction is built and validated first; the append plus the
    /// recompute of derived totals happen as one serialized step inside the
    /// store. Overpayment is permitted by design: the balance clamps to zero
    /// and the surplus is absorbed, not tracked as credit.
    ///
    /// # Errors
    ///
    /// - `NotAssigned` if the student has no ledger
    /// - `Validation` if the amount is not positive
    pub async fn record_payment(
        &self,
        student_id: StudentId,
        spec: PaymentSpec,
        actor: Actor,
    ) -> Result<StudentLedger, FeesError> {
        let transaction = PaymentTransaction::record(spec, actor)?;
        let receipt_no = transaction.receipt_no.clone();
        let amount = transaction.amount;

        let ledger = self.ledgers.append_transaction(student_id, transaction).await?;
        let view = ledger.view();

        info!(
            student_id = %student_id,
            receipt_no = %receipt_no,
            amount = %amount,
            total_paid = %view.total_paid,
            balance_due = %view.balance_due,
            status = %view.status,
            "Payment recorded"
        );
        Ok(ledger)
    }

    /// Fetches one ledger
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the student has no ledger yet.
    pub async fn get_ledger(&self, student_id: StudentId) -> Result<StudentLedger, FeesError> {
        self.ledgers
            .get(student_id)
            .await?
            .ok_or_else(|| FeesError::not_found("Ledger", student_id))
    }
}
