//! Fees Domain - Student Fee Ledger and Payment Recording
//!
//! This crate implements the fee ledger core for the campus administration
//! system: reusable fee structure templates, per-student ledgers with frozen
//! assignment snapshots, serialized payment recording, deterministic receipt
//! values, and read-only dashboard rollups.
//!
//! # Consistency model
//!
//! - A ledger's derived totals (`total_paid`, `net_payable`, `balance_due`)
//!   and status are a pure function of its stored fields, recomputed on
//!   every read and never persisted
//! - Transactions are append-only; the only writer is [`PaymentRecorder`]
//! - Per-student mutations are serialized by the [`ports::LedgerStore`]
//!   contract; a failed call never leaves a partial mutation
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_fees::{FeeStructureCatalog, PaymentRecorder, PaymentSpec};
//!
//! let template = catalog.create(spec).await?;
//! recorder.assign(student_id, template.id, discount, &actor).await?;
//! let ledger = recorder.record_payment(student_id, payment, actor).await?;
//! assert_eq!(ledger.view().total_paid, payment_amount);
//! ```

pub mod catalog;
pub mod category;
pub mod dashboard;
pub mod error;
pub mod ledger;
pub mod ports;
pub mod receipt;
pub mod recorder;
pub mod template;
pub mod transaction;

pub use catalog::FeeStructureCatalog;
pub use category::{FeeCategory, Program, StudyYear};
pub use dashboard::{DashboardAggregator, DashboardFilter, DashboardStats, DefaulterEntry};
pub use error::FeesError;
pub use ledger::{Assignment, LedgerView, PaymentStatus, StudentLedger};
pub use ports::{LedgerStore, StudentDirectory, StudentIdentity, TemplateStore};
pub use receipt::{Receipt, ReceiptGenerator};
pub use recorder::PaymentRecorder;
pub use template::{FeeBreakdown, FeeStructureTemplate, TemplateFilter, TemplateSpec};
pub use transaction::{Actor, PaymentMode, PaymentSpec, PaymentTransaction};
