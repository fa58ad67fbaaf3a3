//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::Money;
use domain_fees::category::{FeeCategory, StudyYear};
use domain_fees::transaction::PaymentMode;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating amounts in whole paise up to one crore rupees
pub fn amount_paise_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating valid positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    amount_paise_strategy().prop_map(|paise| Money::new(Decimal::new(paise, 2)))
}

/// Strategy for generating Money values including zero
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(|paise| Money::new(Decimal::new(paise, 2)))
}

/// Strategy for generating study years
pub fn study_year_strategy() -> impl Strategy<Value = StudyYear> {
    prop_oneof![
        Just(StudyYear::First),
        Just(StudyYear::Second),
        Just(StudyYear::Third),
    ]
}

/// Strategy for generating fee categories
pub fn fee_category_strategy() -> impl Strategy<Value = FeeCategory> {
    prop_oneof![
        Just(FeeCategory::AdmissionFee),
        Just(FeeCategory::CollegeFee),
        Just(FeeCategory::HostelFee),
        Just(FeeCategory::BooksFee),
        Just(FeeCategory::UniformFee),
        Just(FeeCategory::ClinicalFee),
        Just(FeeCategory::CautionDeposit),
        Just(FeeCategory::BusFee),
        Just(FeeCategory::Scholarship),
    ]
}

/// Strategy for generating payment modes
pub fn payment_mode_strategy() -> impl Strategy<Value = PaymentMode> {
    prop_oneof![
        Just(PaymentMode::Cash),
        Just(PaymentMode::Online),
        Just(PaymentMode::Upi),
        Just(PaymentMode::Cheque),
        Just(PaymentMode::Dd),
    ]
}

/// Strategy for generating a short sequence of positive payment amounts
pub fn payment_series_strategy() -> impl Strategy<Value = Vec<Money>> {
    prop::collection::vec(positive_money_strategy(), 0..8)
}
