//! Storage and directory ports
//!
//! The domain services depend on these traits, not on any concrete storage.
//! Adapters (in-memory today, a database tomorrow) implement them; the
//! atomicity guarantees the recorder relies on are part of the contract
//! here, so the serialization primitive lives with the storage.

use async_trait::async_trait;
use core_kernel::{StudentId, TemplateId};
use serde::{Deserialize, Serialize};

use crate::category::Program;
use crate::error::FeesError;
use crate::ledger::{Assignment, StudentLedger};
use crate::template::{FeeStructureTemplate, TemplateFilter};
use crate::transaction::PaymentTransaction;

/// Storage for fee structure templates
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Persists a new template
    async fn insert(&self, template: FeeStructureTemplate) -> Result<(), FeesError>;

    /// Overwrites an existing template
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the template does not exist.
    async fn save(&self, template: FeeStructureTemplate) -> Result<(), FeesError>;

    /// Fetches a template by id
    async fn get(&self, id: TemplateId) -> Result<Option<FeeStructureTemplate>, FeesError>;

    /// Removes a template; returns false if it did not exist
    async fn remove(&self, id: TemplateId) -> Result<bool, FeesError>;

    /// Lists templates matching the filter
    async fn list(&self, filter: &TemplateFilter) -> Result<Vec<FeeStructureTemplate>, FeesError>;
}

/// Storage for student ledgers
///
/// # Contract
///
/// The mutating operations are atomic and serialized per student: two
/// concurrent calls for the same student observe each other's completed
/// writes, never a partial one. Operations on different students must not
/// block each other. On any error the ledger is left exactly as it was.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Fetches a snapshot of one ledger
    async fn get(&self, student_id: StudentId) -> Result<Option<StudentLedger>, FeesError>;

    /// Snapshots every ledger (reporting reads; may be slightly stale
    /// relative to in-flight writers)
    async fn all(&self) -> Result<Vec<StudentLedger>, FeesError>;

    /// Returns true if any ledger currently references the template
    async fn references_template(&self, template_id: TemplateId) -> Result<bool, FeesError>;

    /// Creates the ledger on first assignment, or re-points an existing one
    /// preserving its transactions. Returns the updated snapshot.
    async fn upsert_assignment(
        &self,
        student_id: StudentId,
        assignment: Assignment,
    ) -> Result<StudentLedger, FeesError>;

    /// Appends one transaction as a single atomic step and returns the
    /// updated snapshot.
    ///
    /// # Errors
    ///
    /// Returns `NotAssigned` if the student has no ledger.
    async fn append_transaction(
        &self,
        student_id: StudentId,
        transaction: PaymentTransaction,
    ) -> Result<StudentLedger, FeesError>;
}

/// Student identity owned by the directory subsystem, joined read-only here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIdentity {
    pub student_id: StudentId,
    pub name: String,
    pub admission_number: String,
    pub program: Program,
}

/// Read-only lookup into the external student directory
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// Resolves one student; Ok(None) when the student is unknown
    async fn lookup(&self, student_id: StudentId) -> Result<Option<StudentIdentity>, FeesError>;
}
