//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for user records.
//! - Isolate SQLite query details from the store and services.
//!
//! # Invariants
//! - Repositories borrow a connection; they never open or close one.

pub mod user_repo;
