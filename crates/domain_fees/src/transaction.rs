//! Payment transactions
//!
//! A transaction is one immutable recorded payment event. Once appended to a
//! ledger it is never mutated or removed; corrections are out of scope for
//! this core (no refund/reversal workflow).

use chrono::{DateTime, Utc};
use core_kernel::{Money, TransactionId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::{FeeCategory, StudyYear};
use crate::error::FeesError;

/// How a payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    Online,
    #[serde(rename = "UPI")]
    Upi,
    Cheque,
    #[serde(rename = "DD")]
    Dd,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 5] = [
        PaymentMode::Cash,
        PaymentMode::Online,
        PaymentMode::Upi,
        PaymentMode::Cheque,
        PaymentMode::Dd,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Online => "Online",
            PaymentMode::Upi => "UPI",
            PaymentMode::Cheque => "Cheque",
            PaymentMode::Dd => "DD",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PaymentMode {
    type Err = FeesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "online" => Ok(PaymentMode::Online),
            "upi" => Ok(PaymentMode::Upi),
            "cheque" | "check" => Ok(PaymentMode::Cheque),
            "dd" | "demand draft" => Ok(PaymentMode::Dd),
            _ => Err(FeesError::validation(format!("Unknown payment mode: {}", s))),
        }
    }
}

/// Who performed an operation
///
/// An opaque caller context threaded into each call by the interface layer.
/// Never read from global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input for recording one payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSpec {
    pub year: StudyYear,
    pub fee_towards: FeeCategory,
    pub amount: Money,
    pub mode: PaymentMode,
    pub remarks: Option<String>,
}

/// One immutable recorded payment event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    /// Unique, time-ordered identifier
    pub id: TransactionId,
    /// Human-readable receipt number, unique per transaction
    pub receipt_no: String,
    /// Server time at recording
    pub date: DateTime<Utc>,
    /// Study year the payment is attributed to
    pub year: StudyYear,
    /// Fee category the payment is attributed to
    pub fee_towards: FeeCategory,
    /// Payment amount, strictly positive
    pub amount: Money,
    /// Payment mode
    pub mode: PaymentMode,
    /// Free-form remarks
    pub remarks: Option<String>,
    /// Caller context that recorded this payment
    pub recorded_by: Actor,
}

impl PaymentTransaction {
    /// Builds a transaction from validated input
    ///
    /// Generates the transaction id and receipt number and stamps the
    /// current server time.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the amount is zero or negative.
    pub fn record(spec: PaymentSpec, recorded_by: Actor) -> Result<Self, FeesError> {
        let amount = spec
            .amount
            .ensure_positive()
            .map_err(|_| FeesError::validation(format!("Payment amount must be positive, got {}", spec.amount)))?;

        let id = TransactionId::new_v7();
        Ok(Self {
            id,
            receipt_no: receipt_number(&id),
            date: Utc::now(),
            year: spec.year,
            fee_towards: spec.fee_towards,
            amount,
            mode: spec.mode,
            remarks: spec.remarks.filter(|r| !r.trim().is_empty()),
            recorded_by,
        })
    }
}

/// Derives the receipt number from the time-ordered transaction id
///
/// v7 UUIDs start with a millisecond timestamp, so receipt numbers sort in
/// issue order while staying collision-free under concurrent recording.
fn receipt_number(id: &TransactionId) -> String {
    format!("RCP-{}", id.as_uuid().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn spec(amount: Money) -> PaymentSpec {
        PaymentSpec {
            year: StudyYear::First,
            fee_towards: FeeCategory::CollegeFee,
            amount,
            mode: PaymentMode::Cash,
            remarks: None,
        }
    }

    #[test]
    fn test_record_generates_unique_receipt_numbers() {
        let a = PaymentTransaction::record(spec(Money::from_rupees(100)), Actor::new("office")).unwrap();
        let b = PaymentTransaction::record(spec(Money::from_rupees(100)), Actor::new("office")).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.receipt_no, b.receipt_no);
        assert!(a.receipt_no.starts_with("RCP-"));
    }

    #[test]
    fn test_record_rejects_zero_amount() {
        let result = PaymentTransaction::record(spec(Money::zero()), Actor::new("office"));
        assert!(matches!(result, Err(FeesError::Validation(_))));
    }

    #[test]
    fn test_record_rejects_negative_amount() {
        let result = PaymentTransaction::record(spec(Money::new(dec!(-50))), Actor::new("office"));
        assert!(matches!(result, Err(FeesError::Validation(_))));
    }

    #[test]
    fn test_blank_remarks_are_dropped() {
        let mut s = spec(Money::from_rupees(100));
        s.remarks = Some("   ".to_string());
        let txn = PaymentTransaction::record(s, Actor::new("office")).unwrap();
        assert!(txn.remarks.is_none());
    }

    #[test]
    fn test_payment_mode_parsing() {
        assert_eq!("UPI".parse::<PaymentMode>().unwrap(), PaymentMode::Upi);
        assert_eq!("cash".parse::<PaymentMode>().unwrap(), PaymentMode::Cash);
        assert_eq!("DD".parse::<PaymentMode>().unwrap(), PaymentMode::Dd);
        assert!("Bitcoin".parse::<PaymentMode>().is_err());
    }

    #[test]
    fn test_payment_mode_serde_labels() {
        assert_eq!(serde_json::to_string(&PaymentMode::Upi).unwrap(), "\"UPI\"");
        assert_eq!(serde_json::to_string(&PaymentMode::Dd).unwrap(), "\"DD\"");
        assert_eq!(serde_json::to_string(&PaymentMode::Cash).unwrap(), "\"Cash\"");
    }
}
