//! Fee structure templates
//!
//! A template is the reusable definition of what a batch of students owes:
//! per-study-year category amounts plus a computed grand total. Assigning a
//! template to a student copies the total into the ledger as a frozen
//! snapshot, so later edits to the template never touch existing ledgers.

use chrono::{DateTime, Utc};
use core_kernel::{Money, TemplateId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::{FeeCategory, Program, StudyYear};
use crate::error::FeesError;

/// Per-study-year category amounts
///
/// # Invariants
///
/// - Every amount is non-negative (enforced by [`FeeBreakdown::validate`])
/// - The template total is always recomputed from the breakdown, never
///   stored independently of it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub year1: BTreeMap<FeeCategory, Money>,
    pub year2: BTreeMap<FeeCategory, Money>,
    pub year3: BTreeMap<FeeCategory, Money>,
}

impl FeeBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the category amounts for one study year
    pub fn for_year(&self, year: StudyYear) -> &BTreeMap<FeeCategory, Money> {
        match year {
            StudyYear::First => &self.year1,
            StudyYear::Second => &self.year2,
            StudyYear::Third => &self.year3,
        }
    }

    /// Sets one category amount for one study year
    pub fn set(&mut self, year: StudyYear, category: FeeCategory, amount: Money) -> &mut Self {
        let map = match year {
            StudyYear::First => &mut self.year1,
            StudyYear::Second => &mut self.year2,
            StudyYear::Third => &mut self.year3,
        };
        map.insert(category, amount);
        self
    }

    /// Validates that every amount in the breakdown is non-negative
    pub fn validate(&self) -> Result<(), FeesError> {
        for year in StudyYear::ALL {
            for (category, amount) in self.for_year(year) {
                if amount.is_negative() {
                    return Err(FeesError::validation(format!(
                        "Negative amount for {} in {}: {}",
                        category, year, amount
                    )));
                }
            }
        }
        Ok(())
    }

    /// Sums every category amount across all three years
    ///
    /// Scholarship is included as a positive addend, preserving the legacy
    /// totals rather than netting it off as a discount.
    pub fn total(&self) -> Money {
        StudyYear::ALL
            .into_iter()
            .flat_map(|year| self.for_year(year).values().copied())
            .sum()
    }
}

/// Input for creating or updating a fee structure template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSpec {
    pub name: String,
    pub program: Program,
    pub academic_batch: String,
    pub breakdown: FeeBreakdown,
}

/// A reusable fee structure definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeStructureTemplate {
    /// Unique identifier
    pub id: TemplateId,
    /// Display name, e.g. "B.Sc Nursing 2024-27 Hosteller"
    pub name: String,
    /// Program this structure applies to
    pub program: Program,
    /// Academic batch label, e.g. "2024-2027"
    pub academic_batch: String,
    /// Per-year category amounts
    pub breakdown: FeeBreakdown,
    /// Grand total, recomputed from the breakdown on every create/update
    pub total_amount: Money,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl FeeStructureTemplate {
    /// Creates a template from validated input
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the name or batch is blank, or any breakdown
    /// amount is negative.
    pub fn from_spec(spec: TemplateSpec) -> Result<Self, FeesError> {
        validate_spec(&spec)?;

        let now = Utc::now();
        let total_amount = spec.breakdown.total();

        Ok(Self {
            id: TemplateId::new_v7(),
            name: spec.name,
            program: spec.program,
            academic_batch: spec.academic_batch,
            breakdown: spec.breakdown,
            total_amount,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies an updated spec, recomputing the total
    ///
    /// Existing ledger snapshots are unaffected by design.
    pub fn apply(&mut self, spec: TemplateSpec) -> Result<(), FeesError> {
        validate_spec(&spec)?;

        self.name = spec.name;
        self.program = spec.program;
        self.academic_batch = spec.academic_batch;
        self.total_amount = spec.breakdown.total();
        self.breakdown = spec.breakdown;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_spec(spec: &TemplateSpec) -> Result<(), FeesError> {
    if spec.name.trim().is_empty() {
        return Err(FeesError::validation("Template name must not be blank"));
    }
    if spec.academic_batch.trim().is_empty() {
        return Err(FeesError::validation("Academic batch must not be blank"));
    }
    spec.breakdown.validate()
}

/// Filter for listing templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateFilter {
    pub program: Option<Program>,
    pub academic_batch: Option<String>,
}

impl TemplateFilter {
    pub fn matches(&self, template: &FeeStructureTemplate) -> bool {
        if let Some(program) = self.program {
            if template.program != program {
                return false;
            }
        }
        if let Some(batch) = &self.academic_batch {
            if !template.academic_batch.eq_ignore_ascii_case(batch) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use rust_decimal_macros::dec;

    fn spec_with_breakdown(breakdown: FeeBreakdown) -> TemplateSpec {
        TemplateSpec {
            name: "B.Sc Nursing 2024-27".to_string(),
            program: Program::BscNursing,
            academic_batch: "2024-2027".to_string(),
            breakdown,
        }
    }

    #[test]
    fn test_total_sums_all_years_and_categories() {
        let mut breakdown = FeeBreakdown::new();
        breakdown
            .set(StudyYear::First, FeeCategory::AdmissionFee, Money::from_rupees(5000))
            .set(StudyYear::First, FeeCategory::CollegeFee, Money::from_rupees(20000))
            .set(StudyYear::Second, FeeCategory::CollegeFee, Money::from_rupees(20000))
            .set(StudyYear::Third, FeeCategory::CollegeFee, Money::from_rupees(20000));

        assert_eq!(breakdown.total(), Money::from_rupees(65000));
    }

    #[test]
    fn test_scholarship_is_a_positive_addend() {
        let mut breakdown = FeeBreakdown::new();
        breakdown
            .set(StudyYear::First, FeeCategory::CollegeFee, Money::from_rupees(20000))
            .set(StudyYear::First, FeeCategory::Scholarship, Money::from_rupees(5000));

        // Legacy behavior: scholarship increases the total, it is not netted off.
        assert_eq!(breakdown.total(), Money::from_rupees(25000));
    }

    #[test]
    fn test_from_spec_computes_total() {
        let mut breakdown = FeeBreakdown::new();
        breakdown.set(StudyYear::First, FeeCategory::CollegeFee, Money::from_rupees(20000));

        let template = FeeStructureTemplate::from_spec(spec_with_breakdown(breakdown)).unwrap();
        assert_eq!(template.total_amount, Money::from_rupees(20000));
    }

    #[test]
    fn test_from_spec_rejects_negative_amount() {
        let mut breakdown = FeeBreakdown::new();
        breakdown.set(StudyYear::First, FeeCategory::BusFee, Money::new(dec!(-1)));

        let result = FeeStructureTemplate::from_spec(spec_with_breakdown(breakdown));
        assert!(matches!(result, Err(FeesError::Validation(_))));
    }

    #[test]
    fn test_from_spec_rejects_blank_name() {
        let mut spec = spec_with_breakdown(FeeBreakdown::new());
        spec.name = "   ".to_string();

        let result = FeeStructureTemplate::from_spec(spec);
        assert!(matches!(result, Err(FeesError::Validation(_))));
    }

    #[test]
    fn test_apply_recomputes_total() {
        let mut breakdown = FeeBreakdown::new();
        breakdown.set(StudyYear::First, FeeCategory::CollegeFee, Money::from_rupees(20000));
        let mut template =
            FeeStructureTemplate::from_spec(spec_with_breakdown(breakdown)).unwrap();

        let mut updated = FeeBreakdown::new();
        updated.set(StudyYear::First, FeeCategory::CollegeFee, Money::from_rupees(25000));
        template.apply(spec_with_breakdown(updated)).unwrap();

        assert_eq!(template.total_amount, Money::from_rupees(25000));
    }

    #[test]
    fn test_filter_matches_program_and_batch() {
        let mut breakdown = FeeBreakdown::new();
        breakdown.set(StudyYear::First, FeeCategory::CollegeFee, Money::from_rupees(1000));
        let template = FeeStructureTemplate::from_spec(spec_with_breakdown(breakdown)).unwrap();

        let all = TemplateFilter::default();
        assert!(all.matches(&template));

        let by_program = TemplateFilter {
            program: Some(Program::BscNursing),
            academic_batch: None,
        };
        assert!(by_program.matches(&template));

        let wrong_batch = TemplateFilter {
            program: None,
            academic_batch: Some("2020-2023".to_string()),
        };
        assert!(!wrong_batch.matches(&template));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn total_equals_sum_over_maps(
            amounts in proptest::collection::vec(0i64..1_000_000, 1..27)
        ) {
            let mut breakdown = FeeBreakdown::new();
            for (i, amount) in amounts.iter().enumerate() {
                let year = StudyYear::ALL[i % 3];
                let category = FeeCategory::ALL[(i / 3) % FeeCategory::ALL.len()];
                breakdown.set(year, category, Money::from_rupees(*amount));
            }

            let expected: Money = StudyYear::ALL
                .into_iter()
                .flat_map(|y| breakdown.for_year(y).values().copied())
                .sum();
            prop_assert_eq!(breakdown.total(), expected);
            prop_assert!(!breakdown.total().is_negative());
        }
    }
}
