//! Receipt generation
//!
//! A receipt is a deterministic rendering of one transaction plus the ledger
//! context at that transaction's position in the history. The same
//! (ledger, transaction, identity) inputs always produce an identical
//! receipt; the only timestamp on it is the transaction's own stored date.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use core_kernel::{Money, StudentId, TransactionId};
use serde::{Deserialize, Serialize};

use crate::category::{FeeCategory, StudyYear};
use crate::error::FeesError;
use crate::ledger::StudentLedger;
use crate::ports::{LedgerStore, StudentDirectory, StudentIdentity};
use crate::transaction::PaymentMode;

/// Logical content of one payment receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_no: String,
    pub transaction_id: TransactionId,
    pub date: DateTime<Utc>,
    pub student: StudentIdentity,
    pub year: StudyYear,
    pub fee_towards: FeeCategory,
    pub mode: PaymentMode,
    pub amount: Money,
    /// Deterministic currency rendering, e.g. "Rupees 20,000.00 Only"
    pub amount_in_words: String,
    pub remarks: Option<String>,
    /// Sum of payments up to and including this transaction
    pub total_paid_to_date: Money,
    /// Balance due as of this transaction
    pub balance_due: Money,
}

impl Receipt {
    /// Pure receipt construction from a ledger, one of its transactions,
    /// and the student identity
    ///
    /// Totals are taken at the transaction's position in the append-only
    /// history, so regenerating an old receipt after later payments yields
    /// the same bytes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the transaction is not in the ledger.
    pub fn build(
        ledger: &StudentLedger,
        transaction_id: TransactionId,
        student: StudentIdentity,
    ) -> Result<Self, FeesError> {
        let position = ledger
            .transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| FeesError::not_found("Transaction", transaction_id))?;

        let transaction = &ledger.transactions[position];
        let total_paid_to_date: Money = ledger.transactions[..=position]
            .iter()
            .map(|t| t.amount)
            .sum();
        let net_payable = ledger.total_payable.saturating_sub(ledger.discount);
        let balance_due = net_payable.saturating_sub(total_paid_to_date);

        Ok(Self {
            receipt_no: transaction.receipt_no.clone(),
            transaction_id: transaction.id,
            date: transaction.date,
            student,
            year: transaction.year,
            fee_towards: transaction.fee_towards,
            mode: transaction.mode,
            amount: transaction.amount,
            amount_in_words: transaction.amount.in_words(),
            remarks: transaction.remarks.clone(),
            total_paid_to_date,
            balance_due,
        })
    }
}

/// Service resolving ledger and identity for receipt generation
pub struct ReceiptGenerator {
    ledgers: Arc<dyn LedgerStore>,
    directory: Arc<dyn StudentDirectory>,
}

impl ReceiptGenerator {
    pub fn new(ledgers: Arc<dyn LedgerStore>, directory: Arc<dyn StudentDirectory>) -> Self {
        Self { ledgers, directory }
    }

    /// Generates the receipt for one transaction, defaulting to the most
    /// recent one when no transaction id is given
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the ledger, the transaction, or the student
    /// identity is absent.
    pub async fn generate(
        &self,
        student_id: StudentId,
        transaction_id: Option<TransactionId>,
    ) -> Result<Receipt, FeesError> {
        let ledger = self
            .ledgers
            .get(student_id)
            .await?
            .ok_or_else(|| FeesError::not_found("Ledger", student_id))?;

        let transaction_id = match transaction_id {
            Some(id) => id,
            None => {
                ledger
                    .latest_transaction()
                    .ok_or_else(|| FeesError::not_found("Transaction", student_id))?
                    .id
            }
        };

        let student = self
            .directory
            .lookup(student_id)
            .await?
            .ok_or_else(|| FeesError::not_found("Student", student_id))?;

        Receipt::build(&ledger, transaction_id, student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Program;
    use crate::ledger::Assignment;
    use crate::transaction::{Actor, PaymentSpec, PaymentTransaction};
    use core_kernel::TemplateId;

    fn identity(student_id: StudentId) -> StudentIdentity {
        StudentIdentity {
            student_id,
            name: "Anita Rao".to_string(),
            admission_number: "ADM-1042".to_string(),
            program: Program::BscNursing,
        }
    }

    fn ledger_with_payments(amounts: &[i64]) -> StudentLedger {
        let mut ledger = StudentLedger::new(StudentId::new());
        ledger.apply_assignment(Assignment {
            fee_structure_id: TemplateId::new(),
            total_payable: Money::from_rupees(65000),
            discount: Money::from_rupees(5000),
        });
        for amount in amounts {
            let txn = PaymentTransaction::record(
                PaymentSpec {
                    year: StudyYear::First,
                    fee_towards: FeeCategory::CollegeFee,
                    amount: Money::from_rupees(*amount),
                    mode: PaymentMode::Cash,
                    remarks: None,
                },
                Actor::new("office"),
            )
            .unwrap();
            ledger.append(txn);
        }
        ledger
    }

    #[test]
    fn test_build_snapshots_totals_at_transaction_position() {
        let ledger = ledger_with_payments(&[20000, 40000]);
        let first = ledger.transactions[0].id;

        let receipt = Receipt::build(&ledger, first, identity(ledger.student_id)).unwrap();

        // The first receipt reflects the ledger as of the first payment,
        // even though a later payment exists.
        assert_eq!(receipt.total_paid_to_date, Money::from_rupees(20000));
        assert_eq!(receipt.balance_due, Money::from_rupees(40000));
        assert_eq!(receipt.amount_in_words, "Rupees 20,000.00 Only");
    }

    #[test]
    fn test_build_is_deterministic() {
        let ledger = ledger_with_payments(&[20000]);
        let txn_id = ledger.transactions[0].id;

        let a = Receipt::build(&ledger, txn_id, identity(ledger.student_id)).unwrap();
        let b = Receipt::build(&ledger, txn_id, identity(ledger.student_id)).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_build_unknown_transaction_is_not_found() {
        let ledger = ledger_with_payments(&[20000]);
        let result = Receipt::build(&ledger, TransactionId::new(), identity(ledger.student_id));
        assert!(matches!(result, Err(FeesError::NotFound { .. })));
    }

    #[test]
    fn test_overpayment_receipt_shows_zero_balance() {
        let ledger = ledger_with_payments(&[60000, 5000]);
        let last = ledger.transactions[1].id;

        let receipt = Receipt::build(&ledger, last, identity(ledger.student_id)).unwrap();

        assert_eq!(receipt.total_paid_to_date, Money::from_rupees(65000));
        assert_eq!(receipt.balance_due, Money::zero());
    }
}
