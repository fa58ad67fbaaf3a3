//! In-Memory Infrastructure Adapters
//!
//! This crate implements the fees domain storage and directory ports with
//! in-memory data structures. The ledger store provides the per-student
//! serialization the domain's consistency model requires: one mutex per
//! student ledger, held only for the append-and-recompute critical section.
//!
//! A database-backed adapter can replace this crate without touching the
//! domain; the atomicity contract lives on the port traits.

pub mod directory;
pub mod store;

pub use directory::MemoryStudentDirectory;
pub use store::{MemoryLedgerStore, MemoryTemplateStore};
