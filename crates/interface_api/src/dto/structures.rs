//! Fee structure DTOs
//!
//! Requests carry enum values as free-form strings ("College Fee",
//! "collegeFee") parsed at the boundary; responses serialize the domain
//! types with their canonical camelCase keys.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use core_kernel::{Money, TemplateId};
use domain_fees::category::{FeeCategory, Program, StudyYear};
use domain_fees::template::{FeeBreakdown, FeeStructureTemplate, TemplateFilter, TemplateSpec};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct BreakdownRequest {
    #[serde(default)]
    pub year1: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub year2: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub year3: BTreeMap<String, Decimal>,
}

impl BreakdownRequest {
    /// Parses the string-keyed maps into a validated domain breakdown
    pub fn into_domain(self) -> Result<FeeBreakdown, ApiError> {
        let mut breakdown = FeeBreakdown::new();
        let years = [
            (StudyYear::First, self.year1),
            (StudyYear::Second, self.year2),
            (StudyYear::Third, self.year3),
        ];
        for (year, entries) in years {
            for (category, amount) in entries {
                let category: FeeCategory = category.parse().map_err(ApiError::from)?;
                breakdown.set(year, category, Money::new(amount));
            }
        }
        Ok(breakdown)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateFeeStructureRequest {
    pub name: String,
    pub program: String,
    pub academic_batch: String,
    pub breakdown: BreakdownRequest,
}

impl CreateFeeStructureRequest {
    pub fn into_spec(self) -> Result<TemplateSpec, ApiError> {
        let program: Program = self.program.parse().map_err(ApiError::from)?;
        Ok(TemplateSpec {
            name: self.name,
            program,
            academic_batch: self.academic_batch,
            breakdown: self.breakdown.into_domain()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ListFeeStructuresQuery {
    pub program: Option<String>,
    pub batch: Option<String>,
}

impl ListFeeStructuresQuery {
    pub fn into_filter(self) -> Result<TemplateFilter, ApiError> {
        let program = self
            .program
            .map(|p| p.parse::<Program>())
            .transpose()
            .map_err(ApiError::from)?;
        Ok(TemplateFilter {
            program,
            academic_batch: self.batch,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FeeStructureResponse {
    pub id: TemplateId,
    pub name: String,
    pub program: Program,
    pub academic_batch: String,
    pub breakdown: FeeBreakdown,
    pub total_amount: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FeeStructureTemplate> for FeeStructureResponse {
    fn from(template: FeeStructureTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            program: template.program,
            academic_batch: template.academic_batch,
            breakdown: template.breakdown,
            total_amount: template.total_amount,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}
