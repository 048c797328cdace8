//! Core persistence and presentation logic for the user book.
//!
//! A single `Users` table is seeded, patched and rendered as a static list.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::user::{NewUser, UserId, UserPatch, UserRecord, UserSummary};
pub use repo::user_repo::{RepoError, RepoResult, SqliteUserRepository, UserRepository};
pub use service::seed_service::{run_startup, seed_updates, seed_users};
pub use store::{MissingRecordPolicy, StoreConfig, StoreError, StoreResult, UserStore};
pub use view::user_list::UserListView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
