//! Request/response data transfer objects

pub mod dashboard;
pub mod ledger;
pub mod structures;
