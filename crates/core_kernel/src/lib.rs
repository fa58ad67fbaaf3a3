//! Core Kernel - Foundational types for the campus fees system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic (single-currency, INR)
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;

pub use identifiers::{StudentId, TemplateId, TransactionId};
pub use money::{Money, MoneyError};
