//! Domain model for persisted user records.
//!
//! # Responsibility
//! - Define the record, insert payload, patch and list projection types.
//!
//! # Invariants
//! - Every record is identified by a storage-assigned `UserId`.
//! - Records are never deleted by this crate.

pub mod user;
