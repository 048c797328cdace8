//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into the application's startup flow.
//! - Keep the binary decoupled from storage details.

pub mod seed_service;
