//! In-memory template and ledger stores
//!
//! The ledger store is the serialization primitive for the whole system:
//! each student's ledger sits behind its own mutex, so the append-and-
//! recompute critical section is atomic per student while different
//! students proceed in parallel. The registry map is only locked briefly
//! to resolve or create an entry, never across a ledger mutation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use core_kernel::{StudentId, TemplateId};
use domain_fees::ledger::{Assignment, StudentLedger};
use domain_fees::ports::{LedgerStore, TemplateStore};
use domain_fees::template::{FeeStructureTemplate, TemplateFilter};
use domain_fees::transaction::PaymentTransaction;
use domain_fees::FeesError;

/// In-memory [`TemplateStore`] adapter
#[derive(Default)]
pub struct MemoryTemplateStore {
    templates: RwLock<HashMap<TemplateId, FeeStructureTemplate>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn insert(&self, template: FeeStructureTemplate) -> Result<(), FeesError> {
        self.templates.write().await.insert(template.id, template);
        Ok(())
    }

    async fn save(&self, template: FeeStructureTemplate) -> Result<(), FeesError> {
        let mut templates = self.templates.write().await;
        if !templates.contains_key(&template.id) {
            return Err(FeesError::not_found("Fee structure", template.id));
        }
        templates.insert(template.id, template);
        Ok(())
    }

    async fn get(&self, id: TemplateId) -> Result<Option<FeeStructureTemplate>, FeesError> {
        Ok(self.templates.read().await.get(&id).cloned())
    }

    async fn remove(&self, id: TemplateId) -> Result<bool, FeesError> {
        Ok(self.templates.write().await.remove(&id).is_some())
    }

    async fn list(&self, filter: &TemplateFilter) -> Result<Vec<FeeStructureTemplate>, FeesError> {
        let templates = self.templates.read().await;
        let mut matching: Vec<FeeStructureTemplate> = templates
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep listings stable.
        matching.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(matching)
    }
}

/// In-memory [`LedgerStore`] adapter with one mutex per student
#[derive(Default)]
pub struct MemoryLedgerStore {
    ledgers: RwLock<HashMap<StudentId, Arc<Mutex<StudentLedger>>>>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves an existing entry for a student
    async fn entry(&self, student_id: StudentId) -> Option<Arc<Mutex<StudentLedger>>> {
        self.ledgers.read().await.get(&student_id).map(Arc::clone)
    }

    /// Resolves the entry for a student, creating an empty ledger if absent
    async fn entry_or_create(&self, student_id: StudentId) -> Arc<Mutex<StudentLedger>> {
        if let Some(entry) = self.entry(student_id).await {
            return entry;
        }
        let mut ledgers = self.ledgers.write().await;
        let entry = ledgers
            .entry(student_id)
            .or_insert_with(|| Arc::new(Mutex::new(StudentLedger::new(student_id))));
        Arc::clone(entry)
    }

    /// Snapshots all current entries without holding the registry lock
    /// across ledger locks
    async fn entries(&self) -> Vec<Arc<Mutex<StudentLedger>>> {
        self.ledgers.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn get(&self, student_id: StudentId) -> Result<Option<StudentLedger>, FeesError> {
        match self.entry(student_id).await {
            Some(entry) => Ok(Some(entry.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn all(&self) -> Result<Vec<StudentLedger>, FeesError> {
        let mut snapshots = Vec::new();
        for entry in self.entries().await {
            snapshots.push(entry.lock().await.clone());
        }
        Ok(snapshots)
    }

    async fn references_template(&self, template_id: TemplateId) -> Result<bool, FeesError> {
        for entry in self.entries().await {
            if entry.lock().await.fee_structure_id == Some(template_id) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn upsert_assignment(
        &self,
        student_id: StudentId,
        assignment: Assignment,
    ) -> Result<StudentLedger, FeesError> {
        let entry = self.entry_or_create(student_id).await;
        let mut ledger = entry.lock().await;
        ledger.apply_assignment(assignment);
        Ok(ledger.clone())
    }

    async fn append_transaction(
        &self,
        student_id: StudentId,
        transaction: PaymentTransaction,
    ) -> Result<StudentLedger, FeesError> {
        let entry = self
            .entry(student_id)
            .await
            .ok_or(FeesError::NotAssigned(student_id))?;

        // Critical section: append and snapshot under the student's lock so
        // readers never observe a partially applied payment.
        let mut ledger = entry.lock().await;
        if ledger.fee_structure_id.is_none() {
            return Err(FeesError::NotAssigned(student_id));
        }
        ledger.append(transaction);
        Ok(ledger.clone())
    }
}
