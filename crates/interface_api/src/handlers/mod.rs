//! Request handlers

pub mod dashboard;
pub mod health;
pub mod ledger;
pub mod structures;
