//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the campus
//! fees system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use core_kernel::{Money, StudentId, TemplateId};
use domain_fees::category::{FeeCategory, Program, StudyYear};
use domain_fees::ports::StudentIdentity;
use domain_fees::template::{FeeBreakdown, TemplateSpec};
use domain_fees::transaction::Actor;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard mid-sized payment amount
    pub fn rupees_20k() -> Money {
        Money::from_rupees(20_000)
    }

    /// A typical first-year total for a nursing batch
    pub fn rupees_65k() -> Money {
        Money::from_rupees(65_000)
    }

    /// A zero amount
    pub fn zero() -> Money {
        Money::zero()
    }

    /// A fractional amount for rounding-sensitive tests
    pub fn with_paise() -> Money {
        Money::new(dec!(1234.56))
    }
}

/// Fixture for template test data
pub struct TemplateFixtures;

impl TemplateFixtures {
    /// Breakdown matching the standard B.Sc. Nursing 2024 structure:
    /// year 1 totals 65,000 with a 5,000 scholarship addend
    pub fn bsc_breakdown() -> FeeBreakdown {
        let mut breakdown = FeeBreakdown::default();
        breakdown
            .set(StudyYear::First, FeeCategory::CollegeFee, Money::from_rupees(40_000))
            .set(StudyYear::First, FeeCategory::HostelFee, Money::from_rupees(20_000))
            .set(StudyYear::First, FeeCategory::Scholarship, Money::from_rupees(5_000));
        breakdown
    }

    /// A complete spec ready to hand to the catalog
    pub fn bsc_spec() -> TemplateSpec {
        TemplateSpec {
            name: "BSc Nursing 2024".to_string(),
            program: Program::BscNursing,
            academic_batch: "2024-2028".to_string(),
            breakdown: Self::bsc_breakdown(),
        }
    }

    /// A spec for a different program, used in filter tests
    pub fn gnm_spec() -> TemplateSpec {
        let mut breakdown = FeeBreakdown::default();
        breakdown.set(StudyYear::First, FeeCategory::CollegeFee, Money::from_rupees(30_000));
        TemplateSpec {
            name: "GNM 2024".to_string(),
            program: Program::Gnm,
            academic_batch: "2024-2027".to_string(),
            breakdown,
        }
    }
}

/// Fixture for student identity test data
pub struct StudentFixtures;

impl StudentFixtures {
    /// A predictable identity for a fresh student id
    pub fn identity(student_id: StudentId) -> StudentIdentity {
        StudentIdentity {
            student_id,
            name: "Anita Rao".to_string(),
            admission_number: "ADM-1042".to_string(),
            program: Program::BscNursing,
        }
    }

    /// An identity with a caller-chosen name and admission number
    pub fn named(student_id: StudentId, name: &str, admission_number: &str) -> StudentIdentity {
        StudentIdentity {
            student_id,
            name: name.to_string(),
            admission_number: admission_number.to_string(),
            program: Program::BscNursing,
        }
    }
}

/// Fixture for actor test data
pub struct ActorFixtures;

impl ActorFixtures {
    /// The office clerk most tests record payments as
    pub fn clerk() -> Actor {
        Actor::new("fee-office")
    }

    /// A second actor for audit-trail tests
    pub fn admin() -> Actor {
        Actor::new("admin")
    }
}

/// Fixture for ID test data
pub struct IdFixtures;

impl IdFixtures {
    pub fn student_id() -> StudentId {
        StudentId::new()
    }

    pub fn template_id() -> TemplateId {
        TemplateId::new()
    }
}
