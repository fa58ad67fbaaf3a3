//! Student ledgers and the pure payment-status derivation
//!
//! The ledger is the permanent financial record for one student: the frozen
//! template snapshot, the discount, and the append-only transaction history.
//! Everything else (total paid, balance due, status) is a view derived on
//! every read and never stored, so it cannot desynchronize from the
//! transaction log.
//!
//! # Invariants
//!
//! - `total_paid` always equals the sum of transaction amounts
//! - Transactions are never removed or mutated once appended
//! - Reassignment overwrites the snapshot fields but preserves transactions
//! - Ledgers are never deleted

use chrono::{DateTime, Utc};
use core_kernel::{Money, StudentId, TemplateId, TransactionId};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::transaction::PaymentTransaction;

/// Derived payment status
///
/// A view over the current totals, not a stored state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// No fee structure assigned yet
    Unassigned,
    /// Assigned, nothing paid
    Pending,
    /// Paid something, balance still due
    Partial,
    /// Balance due is zero (including the overpayment case)
    Paid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unassigned => "Unassigned",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Paid => "Paid",
        }
    }

    /// True for the statuses that count toward the pending-students rollup
    pub fn is_pending(&self) -> bool {
        matches!(self, PaymentStatus::Pending | PaymentStatus::Partial)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Snapshot fields written by an assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Template the snapshot was taken from
    pub fee_structure_id: TemplateId,
    /// Template total at assignment time (frozen)
    pub total_payable: Money,
    /// Non-negative discount
    pub discount: Money,
}

/// Per-student fee ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentLedger {
    /// One ledger per student
    pub student_id: StudentId,
    /// Template reference at assignment time; historical, not a live join
    pub fee_structure_id: Option<TemplateId>,
    /// Frozen copy of the template total at assignment time
    pub total_payable: Money,
    /// Non-negative discount applied to the payable amount
    pub discount: Money,
    /// Ordered, append-only payment history
    pub transactions: Vec<PaymentTransaction>,
    /// When the current assignment was made
    pub assigned_at: Option<DateTime<Utc>>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl StudentLedger {
    /// Creates an empty, unassigned ledger
    pub fn new(student_id: StudentId) -> Self {
        Self {
            student_id,
            fee_structure_id: None,
            total_payable: Money::zero(),
            discount: Money::zero(),
            transactions: Vec::new(),
            assigned_at: None,
            updated_at: Utc::now(),
        }
    }

    /// Applies an assignment, preserving the transaction history
    pub fn apply_assignment(&mut self, assignment: Assignment) {
        let now = Utc::now();
        self.fee_structure_id = Some(assignment.fee_structure_id);
        self.total_payable = assignment.total_payable;
        self.discount = assignment.discount;
        self.assigned_at = Some(now);
        self.updated_at = now;
    }

    /// Appends one transaction to the history
    pub fn append(&mut self, transaction: PaymentTransaction) {
        self.transactions.push(transaction);
        self.updated_at = Utc::now();
    }

    /// Returns the most recent transaction
    pub fn latest_transaction(&self) -> Option<&PaymentTransaction> {
        self.transactions.last()
    }

    /// Finds a transaction by id
    pub fn transaction(&self, id: TransactionId) -> Option<&PaymentTransaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Derives the current view (totals and status)
    pub fn view(&self) -> LedgerView {
        LedgerView::derive(self)
    }
}

/// Derived totals and status for one ledger
///
/// Recomputed on every read; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerView {
    pub total_paid: Money,
    pub net_payable: Money,
    pub balance_due: Money,
    pub status: PaymentStatus,
}

impl LedgerView {
    /// Pure derivation from the ledger's stored fields
    ///
    /// - `total_paid  = Σ transactions.amount`
    /// - `net_payable = max(0, total_payable - discount)`
    /// - `balance_due = max(0, net_payable - total_paid)`
    /// - status: Unassigned without a structure; Pending with nothing paid;
    ///   Partial with a balance due; otherwise Paid (overpayment clamps to
    ///   a zero balance and still reads Paid)
    pub fn derive(ledger: &StudentLedger) -> Self {
        let total_paid: Money = ledger.transactions.iter().map(|t| t.amount).sum();
        let net_payable = ledger.total_payable.saturating_sub(ledger.discount);
        let balance_due = net_payable.saturating_sub(total_paid);

        let status = if ledger.fee_structure_id.is_none() {
            PaymentStatus::Unassigned
        } else if total_paid.is_zero() {
            PaymentStatus::Pending
        } else if balance_due.is_positive() {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Paid
        };

        Self {
            total_paid,
            net_payable,
            balance_due,
            status,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::category::{FeeCategory, StudyYear};
    use crate::transaction::{Actor, PaymentMode, PaymentSpec};
    use proptest::prelude::*;

    fn payment(amount: i64) -> PaymentTransaction {
        PaymentTransaction::record(
            PaymentSpec {
                year: StudyYear::First,
                fee_towards: FeeCategory::CollegeFee,
                amount: Money::from_rupees(amount),
                mode: PaymentMode::Online,
                remarks: None,
            },
            Actor::new("office"),
        )
        .unwrap()
    }

    proptest! {
        #[test]
        fn total_paid_always_equals_sum_of_transactions(
            total in 0i64..10_000_000,
            discount in 0i64..1_000_000,
            amounts in proptest::collection::vec(1i64..1_000_000, 0..20)
        ) {
            let mut ledger = StudentLedger::new(StudentId::new());
            ledger.apply_assignment(Assignment {
                fee_structure_id: TemplateId::new(),
                total_payable: Money::from_rupees(total),
                discount: Money::from_rupees(discount),
            });
            for amount in &amounts {
                ledger.append(payment(*amount));
            }

            let view = ledger.view();
            let expected: Money = amounts.iter().map(|a| Money::from_rupees(*a)).sum();
            prop_assert_eq!(view.total_paid, expected);
        }

        #[test]
        fn balance_due_matches_clamped_formula(
            total in 0i64..10_000_000,
            discount in 0i64..1_000_000,
            amounts in proptest::collection::vec(1i64..1_000_000, 0..20)
        ) {
            let mut ledger = StudentLedger::new(StudentId::new());
            ledger.apply_assignment(Assignment {
                fee_structure_id: TemplateId::new(),
                total_payable: Money::from_rupees(total),
                discount: Money::from_rupees(discount),
            });
            for amount in &amounts {
                ledger.append(payment(*amount));
            }

            let view = ledger.view();
            let paid: i64 = amounts.iter().sum();
            let expected = (total - discount).max(0).saturating_sub(paid).max(0);
            prop_assert_eq!(view.balance_due, Money::from_rupees(expected));
            prop_assert!(!view.balance_due.is_negative());
        }

        #[test]
        fn paid_status_implies_zero_balance(
            total in 0i64..1_000_000,
            amounts in proptest::collection::vec(1i64..1_000_000, 1..10)
        ) {
            let mut ledger = StudentLedger::new(StudentId::new());
            ledger.apply_assignment(Assignment {
                fee_structure_id: TemplateId::new(),
                total_payable: Money::from_rupees(total),
                discount: Money::zero(),
            });
            for amount in &amounts {
                ledger.append(payment(*amount));
            }

            let view = ledger.view();
            if view.status == PaymentStatus::Paid {
                prop_assert!(view.balance_due.is_zero());
            }
            if view.balance_due.is_positive() {
                prop_assert_eq!(view.status, PaymentStatus::Partial);
            }
        }
    }
}
