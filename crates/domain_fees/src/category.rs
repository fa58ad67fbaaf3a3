//! Closed enumerations for fee categories, study years, and programs
//!
//! The source of truth for what a payment can be attributed to. Categories
//! form a closed, validated set rather than an open string map, so an
//! unrecognized label is rejected at the boundary instead of silently
//! creating a new bucket.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FeesError;

/// A fee category within a study year's breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeeCategory {
    AdmissionFee,
    CollegeFee,
    HostelFee,
    BooksFee,
    UniformFee,
    ClinicalFee,
    CautionDeposit,
    BusFee,
    /// Summed into the template total as a positive addend, matching the
    /// legacy structure totals. See DESIGN.md before changing this.
    Scholarship,
}

impl FeeCategory {
    /// Every category, in display order
    pub const ALL: [FeeCategory; 9] = [
        FeeCategory::AdmissionFee,
        FeeCategory::CollegeFee,
        FeeCategory::HostelFee,
        FeeCategory::BooksFee,
        FeeCategory::UniformFee,
        FeeCategory::ClinicalFee,
        FeeCategory::CautionDeposit,
        FeeCategory::BusFee,
        FeeCategory::Scholarship,
    ];

    /// Human-readable label used on receipts and defaulter reports
    pub fn label(&self) -> &'static str {
        match self {
            FeeCategory::AdmissionFee => "Admission Fee",
            FeeCategory::CollegeFee => "College Fee",
            FeeCategory::HostelFee => "Hostel Fee",
            FeeCategory::BooksFee => "Books Fee",
            FeeCategory::UniformFee => "Uniform Fee",
            FeeCategory::ClinicalFee => "Clinical Fee",
            FeeCategory::CautionDeposit => "Caution Deposit",
            FeeCategory::BusFee => "Bus Fee",
            FeeCategory::Scholarship => "Scholarship",
        }
    }

    /// JSON/key form ("admissionFee")
    pub fn key(&self) -> &'static str {
        match self {
            FeeCategory::AdmissionFee => "admissionFee",
            FeeCategory::CollegeFee => "collegeFee",
            FeeCategory::HostelFee => "hostelFee",
            FeeCategory::BooksFee => "booksFee",
            FeeCategory::UniformFee => "uniformFee",
            FeeCategory::ClinicalFee => "clinicalFee",
            FeeCategory::CautionDeposit => "cautionDeposit",
            FeeCategory::BusFee => "busFee",
            FeeCategory::Scholarship => "scholarship",
        }
    }
}

impl fmt::Display for FeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FeeCategory {
    type Err = FeesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        FeeCategory::ALL
            .into_iter()
            .find(|c| {
                let key: String = c.key().to_ascii_lowercase();
                key == normalized
            })
            .ok_or_else(|| FeesError::validation(format!("Unknown fee category: {}", s)))
    }
}

/// The study year a payment or breakdown entry is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StudyYear {
    First,
    Second,
    Third,
}

impl StudyYear {
    pub const ALL: [StudyYear; 3] = [StudyYear::First, StudyYear::Second, StudyYear::Third];

    /// Label used on receipts ("1st")
    pub fn label(&self) -> &'static str {
        match self {
            StudyYear::First => "1st",
            StudyYear::Second => "2nd",
            StudyYear::Third => "3rd",
        }
    }
}

impl fmt::Display for StudyYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Year", self.label())
    }
}

impl FromStr for StudyYear {
    type Err = FeesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1st" | "1st year" | "first" | "year1" | "1" => Ok(StudyYear::First),
            "2nd" | "2nd year" | "second" | "year2" | "2" => Ok(StudyYear::Second),
            "3rd" | "3rd year" | "third" | "year3" | "3" => Ok(StudyYear::Third),
            _ => Err(FeesError::validation(format!("Unknown study year: {}", s))),
        }
    }
}

/// Academic program a fee structure is defined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Program {
    BscNursing,
    PostBscNursing,
    MscNursing,
    Gnm,
    Anm,
}

impl Program {
    pub const ALL: [Program; 5] = [
        Program::BscNursing,
        Program::PostBscNursing,
        Program::MscNursing,
        Program::Gnm,
        Program::Anm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Program::BscNursing => "B.Sc Nursing",
            Program::PostBscNursing => "Post B.Sc Nursing",
            Program::MscNursing => "M.Sc Nursing",
            Program::Gnm => "GNM",
            Program::Anm => "ANM",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Program {
    type Err = FeesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "bscnursing" => Ok(Program::BscNursing),
            "postbscnursing" => Ok(Program::PostBscNursing),
            "mscnursing" => Ok(Program::MscNursing),
            "gnm" => Ok(Program::Gnm),
            "anm" => Ok(Program::Anm),
            _ => Err(FeesError::validation(format!("Unknown program: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_label_and_key() {
        assert_eq!("College Fee".parse::<FeeCategory>().unwrap(), FeeCategory::CollegeFee);
        assert_eq!("collegeFee".parse::<FeeCategory>().unwrap(), FeeCategory::CollegeFee);
        assert_eq!("caution deposit".parse::<FeeCategory>().unwrap(), FeeCategory::CautionDeposit);
    }

    #[test]
    fn test_category_rejects_unknown() {
        assert!("Gym Fee".parse::<FeeCategory>().is_err());
    }

    #[test]
    fn test_category_serde_is_camel_case() {
        let json = serde_json::to_string(&FeeCategory::AdmissionFee).unwrap();
        assert_eq!(json, "\"admissionFee\"");
    }

    #[test]
    fn test_study_year_parsing() {
        assert_eq!("1st".parse::<StudyYear>().unwrap(), StudyYear::First);
        assert_eq!("Second".parse::<StudyYear>().unwrap(), StudyYear::Second);
        assert_eq!("year3".parse::<StudyYear>().unwrap(), StudyYear::Third);
        assert!("4th".parse::<StudyYear>().is_err());
    }

    #[test]
    fn test_program_parsing() {
        assert_eq!("B.Sc Nursing".parse::<Program>().unwrap(), Program::BscNursing);
        assert_eq!("gnm".parse::<Program>().unwrap(), Program::Gnm);
        assert!("MBA".parse::<Program>().is_err());
    }

    #[test]
    fn test_all_categories_round_trip_keys() {
        for category in FeeCategory::ALL {
            let parsed: FeeCategory = category.key().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }
}
