//! Cross-ledger rollups for the fees dashboard
//!
//! Read-only aggregation over every student ledger: collection totals and
//! the defaulter list, joined against the external student directory. The
//! ledgers are the source of truth; these reads take snapshots and tolerate
//! running concurrently with writers.

use std::sync::Arc;

use core_kernel::{Money, TemplateId};
use serde::{Deserialize, Serialize};

use crate::category::Program;
use crate::error::FeesError;
use crate::ledger::{PaymentStatus, StudentLedger};
use crate::ports::{LedgerStore, StudentDirectory, StudentIdentity, TemplateStore};

/// Filter for dashboard queries
///
/// Program and search terms match against the joined student identity;
/// the batch matches against the assigned template. Entries whose identity
/// cannot be resolved are filtered out, not errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardFilter {
    pub program: Option<Program>,
    pub academic_batch: Option<String>,
    pub search: Option<String>,
}

impl DashboardFilter {
    pub fn is_empty(&self) -> bool {
        self.program.is_none() && self.academic_batch.is_none() && self.search.is_none()
    }

    fn matches_identity(&self, identity: &StudentIdentity) -> bool {
        if let Some(program) = self.program {
            if identity.program != program {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = identity.name.to_lowercase().contains(&term)
                || identity.admission_number.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Population-wide fee collection statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Σ total_paid over assigned ledgers
    pub total_collected: Money,
    /// Σ balance_due over assigned ledgers
    pub total_pending: Money,
    /// Assigned ledgers with status Paid
    pub students_paid: u64,
    /// Assigned ledgers with status Pending or Partial
    pub students_pending: u64,
    /// Ledgers with no fee structure; excluded from the money totals
    pub students_unassigned: u64,
}

/// Computes the stats rollup over a set of ledger snapshots
pub fn stats_over(ledgers: &[StudentLedger]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_collected: Money::zero(),
        total_pending: Money::zero(),
        students_paid: 0,
        students_pending: 0,
        students_unassigned: 0,
    };

    for ledger in ledgers {
        let view = ledger.view();
        match view.status {
            PaymentStatus::Unassigned => stats.students_unassigned += 1,
            status => {
                stats.total_collected = stats.total_collected + view.total_paid;
                stats.total_pending = stats.total_pending + view.balance_due;
                if status == PaymentStatus::Paid {
                    stats.students_paid += 1;
                } else {
                    stats.students_pending += 1;
                }
            }
        }
    }

    stats
}

/// One row in the defaulter list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaulterEntry {
    pub student: StudentIdentity,
    pub fee_structure_id: TemplateId,
    pub academic_batch: Option<String>,
    pub total_payable: Money,
    pub discount: Money,
    pub total_paid: Money,
    pub balance_due: Money,
    pub status: PaymentStatus,
}

/// Sorts defaulters by balance due descending, student id ascending on ties
///
/// The tie-break keeps the ordering deterministic across runs.
pub fn sort_defaulters(entries: &mut [DefaulterEntry]) {
    entries.sort_by(|a, b| {
        b.balance_due
            .cmp(&a.balance_due)
            .then_with(|| a.student.student_id.cmp(&b.student.student_id))
    });
}

/// Read-only aggregation service over all ledgers
pub struct DashboardAggregator {
    ledgers: Arc<dyn LedgerStore>,
    templates: Arc<dyn TemplateStore>,
    directory: Arc<dyn StudentDirectory>,
}

impl DashboardAggregator {
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

    /// Computes collection statistics, optionally filtered
    ///
    /// With an empty filter no identity join is needed and every ledger
    /// counts. With a filter, ledgers whose identity or template cannot be
    /// resolved are excluded rather than failing the whole rollup.
    pub async fn compute_stats(&self, filter: &DashboardFilter) -> Result<DashboardStats, FeesError> {
        let ledgers = self.ledgers.all().await?;

        if filter.is_empty() {
            return Ok(stats_over(&ledgers));
        }

        let mut selected = Vec::with_capacity(ledgers.len());
        for ledger in ledgers {
            if self.matches(&ledger, filter).await? {
                selected.push(ledger);
            }
        }
        Ok(stats_over(&selected))
    }

    /// Lists every ledger with a positive balance due, joined with identity
    ///
    /// Sorted by balance due descending, student id ascending for
    /// determinism. Ledgers whose identity cannot be resolved are dropped.
    pub async fn list_defaulters(
        &self,
        filter: &DashboardFilter,
    ) -> Result<Vec<DefaulterEntry>, FeesError> {
        let ledgers = self.ledgers.all().await?;
        let mut entries = Vec::new();

        for ledger in ledgers {
            let view = ledger.view();
            if !view.balance_due.is_positive() {
                continue;
            }
            let Some(fee_structure_id) = ledger.fee_structure_id else {
                continue;
            };

            let Some(identity) = self.directory.lookup(ledger.student_id).await? else {
                continue;
            };
            if !filter.matches_identity(&identity) {
                continue;
            }

            let academic_batch = self
                .templates
                .get(fee_structure_id)
                .await?
                .map(|t| t.academic_batch);
            if let Some(batch) = &filter.academic_batch {
                match &academic_batch {
                    Some(b) if b.eq_ignore_ascii_case(batch) => {}
                    _ => continue,
                }
            }

            entries.push(DefaulterEntry {
                student: identity,
                fee_structure_id,
                academic_batch,
                total_payable: ledger.total_payable,
                discount: ledger.discount,
                total_paid: view.total_paid,
                balance_due: view.balance_due,
                status: view.status,
            });
        }

        sort_defaulters(&mut entries);
        Ok(entries)
    }

    async fn matches(&self, ledger: &StudentLedger, filter: &DashboardFilter) -> Result<bool, FeesError> {
        if filter.program.is_some() || filter.search.is_some() {
            match self.directory.lookup(ledger.student_id).await? {
                Some(identity) if filter.matches_identity(&identity) => {}
                _ => return Ok(false),
            }
        }
        if let Some(batch) = &filter.academic_batch {
            let Some(template_id) = ledger.fee_structure_id else {
                return Ok(false);
            };
            match self.templates.get(template_id).await? {
                Some(t) if t.academic_batch.eq_ignore_ascii_case(batch) => {}
                _ => return Ok(false),
            }
        }
        Ok(true)
    }
}
