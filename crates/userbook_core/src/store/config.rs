//! Record Store configuration.

use crate::db::schema::SCHEMA_VERSION;
use std::path::PathBuf;

/// Behavior of `UserStore::update` when no record carries the given id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingRecordPolicy {
    /// Silently succeed without touching storage.
    #[default]
    Ignore,
    /// Fail with `StoreError::NotFound`.
    Reject,
}

impl MissingRecordPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Reject => "reject",
        }
    }
}

/// Location and behavior settings for a `UserStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database file; created on first open.
    pub db_path: PathBuf,
    /// Version tag; an older tag on disk triggers drop-and-recreate.
    pub schema_version: u32,
    pub missing_record_policy: MissingRecordPolicy,
}

impl StoreConfig {
    /// Creates a config with the default schema version and `Ignore` policy.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            schema_version: SCHEMA_VERSION,
            missing_record_policy: MissingRecordPolicy::default(),
        }
    }

    pub fn with_schema_version(mut self, schema_version: u32) -> Self {
        self.schema_version = schema_version;
        self
    }

    pub fn with_missing_record_policy(mut self, policy: MissingRecordPolicy) -> Self {
        self.missing_record_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{MissingRecordPolicy, StoreConfig};
    use crate::db::schema::SCHEMA_VERSION;

    #[test]
    fn new_uses_defaults() {
        let config = StoreConfig::new("/tmp/users.db");
        assert_eq!(config.schema_version, SCHEMA_VERSION);
        assert_eq!(config.missing_record_policy, MissingRecordPolicy::Ignore);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = StoreConfig::new("/tmp/users.db")
            .with_schema_version(3)
            .with_missing_record_policy(MissingRecordPolicy::Reject);
        assert_eq!(config.schema_version, 3);
        assert_eq!(config.missing_record_policy.as_str(), "reject");
    }
}
