//! Audit logging
//!
//! Records create, update and delete operations with before/after snapshots
//! in an append-only JSONL file. Password material never reaches the log.
//!
//! ```rust,ignore
//! use spendwise::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Transaction,
//!     txn.id.as_str(),
//!     Some(txn.title.clone()),
//!     &txn,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
