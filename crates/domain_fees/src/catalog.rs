//! Fee structure catalog service
//!
//! Create/update/delete/list for reusable fee templates. Deletion is blocked
//! while any student ledger references the template; edits never touch
//! ledgers already assigned from it.

use std::sync::Arc;

use core_kernel::TemplateId;
use tracing::info;

use crate::error::FeesError;
use crate::ports::{LedgerStore, TemplateStore};
use crate::template::{FeeStructureTemplate, TemplateFilter, TemplateSpec};

/// Service managing the catalog of fee structure templates
pub struct FeeStructureCatalog {
    templates: Arc<dyn TemplateStore>,
    ledgers: Arc<dyn LedgerStore>,
}

impl FeeStructureCatalog {
    pub fn new(templates: Arc<dyn TemplateStore>, ledgers: Arc<dyn LedgerStore>) -> Self {
        Self { templates, ledgers }
    }

    /// Creates a template from validated input
    ///
    /// The total is computed from the breakdown here; callers never supply it.
    ///
    /// # Errors
    ///
    /// Returns `Validation` on a blank name/batch or a negative amount.
    pub async fn create(&self, spec: TemplateSpec) -> Result<FeeStructureTemplate, FeesError> {
        let template = FeeStructureTemplate::from_spec(spec)?;
        self.templates.insert(template.clone()).await?;

        info!(
            template_id = %template.id,
            program = %template.program,
            batch = %template.academic_batch,
            total = %template.total_amount,
            "Fee structure created"
        );
        Ok(template)
    }

    /// Updates a template, recomputing its total
    ///
    /// Ledgers already assigned from this template keep their frozen
    /// snapshots.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is absent, `Validation` on bad input.
    pub async fn update(
        &self,
        id: TemplateId,
        spec: TemplateSpec,
    ) -> Result<FeeStructureTemplate, FeesError> {
        let mut template = self
            .templates
            .get(id)
            .await?
            .ok_or_else(|| FeesError::not_found("Fee structure", id))?;

        template.apply(spec)?;
        self.templates.save(template.clone()).await?;

        info!(template_id = %id, total = %template.total_amount, "Fee structure updated");
        Ok(template)
    }

    /// Deletes a template that no ledger references
    ///
    /// The in-use check and the removal are two store calls, so an `assign`
    /// racing this delete can leave a ledger pointing at a removed template.
    /// That reference is inert: the assignment froze its own payable
    /// snapshot and nothing dereferences the template id afterwards.
    ///
    /// # Errors
    ///
    /// Returns `TemplateInUse` while any student ledger still points at the
    /// template, `NotFound` if the id is absent.
    pub async fn delete(&self, id: TemplateId) -> Result<(), FeesError> {
        if self.ledgers.references_template(id).await? {
            return Err(FeesError::TemplateInUse(id));
        }
        if !self.templates.remove(id).await? {
            return Err(FeesError::not_found("Fee structure", id));
        }

        info!(template_id = %id, "Fee structure deleted");
        Ok(())
    }

    /// Fetches one template
    pub async fn get(&self, id: TemplateId) -> Result<FeeStructureTemplate, FeesError> {
        self.templates
            .get(id)
            .await?
            .ok_or_else(|| FeesError::not_found("Fee structure", id))
    }

    /// Lists templates matching the filter
    pub async fn list(
        &self,
        filter: &TemplateFilter,
    ) -> Result<Vec<FeeStructureTemplate>, FeesError> {
        self.templates.list(filter).await
    }
}
