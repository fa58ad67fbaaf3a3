//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use core_kernel::{Money, StudentId, TemplateId};
use domain_fees::category::{FeeCategory, Program, StudyYear};
use domain_fees::ledger::{Assignment, StudentLedger};
use domain_fees::template::{FeeBreakdown, TemplateSpec};
use domain_fees::transaction::{Actor, PaymentMode, PaymentSpec, PaymentTransaction};

use crate::fixtures::{ActorFixtures, TemplateFixtures};

/// Builder for constructing template specs
pub struct TemplateSpecBuilder {
    name: String,
    program: Program,
    academic_batch: String,
    breakdown: FeeBreakdown,
}

impl Default for TemplateSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSpecBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "BSc Nursing 2024".to_string(),
            program: Program::BscNursing,
            academic_batch: "2024-2028".to_string(),
            breakdown: TemplateFixtures::bsc_breakdown(),
        }
    }

    /// Sets the template name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the program
    pub fn with_program(mut self, program: Program) -> Self {
        self.program = program;
        self
    }

    /// Sets the academic batch
    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.academic_batch = batch.into();
        self
    }

    /// Replaces the whole breakdown
    pub fn with_breakdown(mut self, breakdown: FeeBreakdown) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// Sets one line of the breakdown
    pub fn with_fee(mut self, year: StudyYear, category: FeeCategory, amount: Money) -> Self {
        self.breakdown.set(year, category, amount);
        self
    }

    /// Builds the spec
    pub fn build(self) -> TemplateSpec {
        TemplateSpec {
            name: self.name,
            program: self.program,
            academic_batch: self.academic_batch,
            breakdown: self.breakdown,
        }
    }
}

/// Builder for constructing payment specs
pub struct PaymentSpecBuilder {
    year: StudyYear,
    fee_towards: FeeCategory,
    amount: Money,
    mode: PaymentMode,
    remarks: Option<String>,
}

impl Default for PaymentSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentSpecBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            year: StudyYear::First,
            fee_towards: FeeCategory::CollegeFee,
            amount: Money::from_rupees(20_000),
            mode: PaymentMode::Cash,
            remarks: None,
        }
    }

    /// Sets the study year
    pub fn with_year(mut self, year: StudyYear) -> Self {
        self.year = year;
        self
    }

    /// Sets the fee category the payment is towards
    pub fn with_category(mut self, category: FeeCategory) -> Self {
        self.fee_towards = category;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payment mode
    pub fn with_mode(mut self, mode: PaymentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets free-form remarks
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Builds the spec
    pub fn build(self) -> PaymentSpec {
        PaymentSpec {
            year: self.year,
            fee_towards: self.fee_towards,
            amount: self.amount,
            mode: self.mode,
            remarks: self.remarks,
        }
    }
}

/// Builder for constructing a ledger directly, bypassing the services
///
/// Useful for pure tests of derivation, receipts, and dashboard rollups
/// that need a ledger in a known state without going through a store.
pub struct LedgerBuilder {
    student_id: StudentId,
    assignment: Option<Assignment>,
    payments: Vec<Money>,
    actor: Actor,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerBuilder {
    /// Creates a new builder for a fresh student
    pub fn new() -> Self {
        Self {
            student_id: StudentId::new(),
            assignment: None,
            payments: Vec::new(),
            actor: ActorFixtures::clerk(),
        }
    }

    /// Sets the student id
    pub fn with_student_id(mut self, student_id: StudentId) -> Self {
        self.student_id = student_id;
        self
    }

    /// Assigns a fee structure with the given totals
    pub fn assigned(mut self, fee_structure_id: TemplateId, total: Money, discount: Money) -> Self {
        self.assignment = Some(Assignment {
            fee_structure_id,
            total_payable: total,
            discount,
        });
        self
    }

    /// Appends a cash payment of the given amount
    pub fn with_payment(mut self, amount: Money) -> Self {
        self.payments.push(amount);
        self
    }

    /// Builds the ledger
    ///
    /// # Panics
    ///
    /// Panics if a queued payment amount is not positive; builders are
    /// test-only and a bad amount is a bug in the test.
    pub fn build(self) -> StudentLedger {
        let mut ledger = StudentLedger::new(self.student_id);
        if let Some(assignment) = self.assignment {
            ledger.apply_assignment(assignment);
        }
        for amount in self.payments {
            let transaction = PaymentTransaction::record(
                PaymentSpecBuilder::new().with_amount(amount).build(),
                self.actor.clone(),
            )
            .expect("builder payments must be positive");
            ledger.append(transaction);
        }
        ledger
    }
}
