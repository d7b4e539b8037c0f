//! Audit logging system
//!
//! Append-only JSONL log of auth events and ledger mutations. This is the
//! application's activity trail: every signup, login, logout, recorded
//! transaction, created goal, and export lands here with a timestamp.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
