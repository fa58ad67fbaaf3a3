//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_fees::ledger::{LedgerView, PaymentStatus, StudentLedger};
use domain_fees::FeesError;

/// Asserts that a ledger derives the expected totals
///
/// # Panics
///
/// Panics with a message naming the differing field when any of the
/// derived totals disagrees.
pub fn assert_ledger_totals(
    ledger: &StudentLedger,
    total_paid: Money,
    balance_due: Money,
    status: PaymentStatus,
) {
    let view = ledger.view();
    assert_eq!(
        view.total_paid, total_paid,
        "total_paid mismatch: derived={}, expected={}",
        view.total_paid, total_paid
    );
    assert_eq!(
        view.balance_due, balance_due,
        "balance_due mismatch: derived={}, expected={}",
        view.balance_due, balance_due
    );
    assert_eq!(
        view.status, status,
        "status mismatch: derived={:?}, expected={:?}",
        view.status, status
    );
}

/// Asserts that a view satisfies the clamped-balance invariant:
/// balance_due == max(net_payable - total_paid, 0) and never negative
pub fn assert_view_consistent(view: &LedgerView) {
    assert!(
        !view.balance_due.is_negative(),
        "balance_due must never be negative, got {}",
        view.balance_due
    );
    let expected = view.net_payable.saturating_sub(view.total_paid);
    assert_eq!(
        view.balance_due, expected,
        "balance_due {} disagrees with net_payable {} - total_paid {}",
        view.balance_due, view.net_payable, view.total_paid
    );
}

/// Asserts that a result failed validation
///
/// # Panics
///
/// Panics if the result is `Ok` or a different error variant.
pub fn assert_validation_error<T: std::fmt::Debug>(result: Result<T, FeesError>) {
    match result {
        Err(FeesError::Validation(_)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
}

/// Asserts that a result is a not-found error
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, FeesError>) {
    match result {
        Err(ref e) if e.is_not_found() => {}
        other => panic!("expected not-found error, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::LedgerBuilder;
    use core_kernel::TemplateId;

    #[test]
    fn test_assert_ledger_totals_passes_for_paid() {
        let ledger = LedgerBuilder::new()
            .assigned(TemplateId::new(), Money::from_rupees(50_000), Money::zero())
            .with_payment(Money::from_rupees(50_000))
            .build();

        assert_ledger_totals(
            &ledger,
            Money::from_rupees(50_000),
            Money::zero(),
            PaymentStatus::Paid,
        );
        assert_view_consistent(&ledger.view());
    }

    #[test]
    #[should_panic(expected = "balance_due mismatch")]
    fn test_assert_ledger_totals_names_the_field() {
        let ledger = LedgerBuilder::new()
            .assigned(TemplateId::new(), Money::from_rupees(50_000), Money::zero())
            .build();

        assert_ledger_totals(
            &ledger,
            Money::zero(),
            Money::zero(),
            PaymentStatus::Pending,
        );
    }
}
