//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic, clamped subtraction, Indian
//! digit grouping, and the words rendering used on receipts.

use core_kernel::{Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_two_decimal_places() {
        let m = Money::new(dec!(100.126));
        assert_eq!(m.amount(), dec!(100.13));
    }

    #[test]
    fn test_from_rupees_is_whole_amount() {
        let m = Money::from_rupees(65_000);
        assert_eq!(m.amount(), dec!(65000));
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_ensure_positive_rejects_zero() {
        assert!(matches!(
            Money::zero().ensure_positive(),
            Err(MoneyError::NotPositive(_))
        ));
    }

    #[test]
    fn test_ensure_positive_rejects_negative() {
        assert!(matches!(
            Money::new(dec!(-1)).ensure_positive(),
            Err(MoneyError::NotPositive(_))
        ));
    }

    #[test]
    fn test_ensure_non_negative_accepts_zero() {
        assert!(Money::zero().ensure_non_negative().is_ok());
    }

    #[test]
    fn test_ensure_non_negative_rejects_negative() {
        assert!(matches!(
            Money::new(dec!(-0.01)).ensure_non_negative(),
            Err(MoneyError::Negative(_))
        ));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let a = Money::from_rupees(100);
        let b = Money::from_rupees(40);
        assert_eq!(a + b, Money::from_rupees(140));
        assert_eq!(a - b, Money::from_rupees(60));
    }

    #[test]
    fn test_sum_over_iterator() {
        let total: Money = [10, 20, 30].into_iter().map(Money::from_rupees).sum();
        assert_eq!(total, Money::from_rupees(60));
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        let small = Money::from_rupees(10);
        let big = Money::from_rupees(100);
        assert_eq!(small.saturating_sub(big), Money::zero());
        assert_eq!(big.saturating_sub(small), Money::from_rupees(90));
        assert_eq!(big.saturating_sub(big), Money::zero());
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(Money::from_rupees(1_000).grouped(), "1,000.00");
        assert_eq!(Money::from_rupees(100_000).grouped(), "1,00,000.00");
        assert_eq!(Money::from_rupees(1_234_567).grouped(), "12,34,567.00");
        assert_eq!(Money::new(dec!(1234.56)).grouped(), "1,234.56");
    }

    #[test]
    fn test_grouping_small_amounts() {
        assert_eq!(Money::from_rupees(0).grouped(), "0.00");
        assert_eq!(Money::from_rupees(999).grouped(), "999.00");
    }

    #[test]
    fn test_in_words() {
        assert_eq!(Money::from_rupees(20_000).in_words(), "Rupees 20,000.00 Only");
        assert_eq!(Money::new(dec!(1234.56)).in_words(), "Rupees 1,234.56 Only");
    }
}

mod serde_round_trip {
    use super::*;

    #[test]
    fn test_money_serializes_transparently() {
        let m = Money::new(dec!(1234.56));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"1234.56\"");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
