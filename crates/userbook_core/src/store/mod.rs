//! Record Store handle with open-per-call connection lifecycle.
//!
//! # Responsibility
//! - Own the database location and schema version for one application run.
//! - Run each operation on a fresh connection and release it afterwards.
//! - Apply the configured policy for updates that match no record.
//!
//! # Invariants
//! - No connection outlives a single store operation.
//! - `UserStore::open` has ensured the schema before any handle is returned.
//! - Every operation re-checks the schema version on its fresh connection,
//!   so each call also runs one schema transaction.

mod config;

pub use config::{MissingRecordPolicy, StoreConfig};

use crate::db::{open_db_versioned, DbError};
use crate::model::user::{NewUser, UserId, UserPatch, UserRecord, UserSummary};
use crate::repo::user_repo::{RepoError, SqliteUserRepository, UserRepository};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surfaced by Record Store operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Repo(RepoError),
    /// Update targeted an unknown id under `MissingRecordPolicy::Reject`.
    NotFound(UserId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "user not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Explicit handle to the on-disk user table.
///
/// Cloning is cheap; clones share nothing but the configuration.
#[derive(Debug, Clone)]
pub struct UserStore {
    config: StoreConfig,
}

impl UserStore {
    /// Opens the store and idempotently ensures the `Users` schema.
    ///
    /// # Side effects
    /// - Creates the database file when absent.
    /// - Recreates the table (dropping rows) on a schema-version upgrade.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let started_at = Instant::now();
        let conn = match open_db_versioned(&config.db_path, config.schema_version) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=store_open module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };
        drop(conn);

        info!(
            "event=store_open module=store status=ok schema_version={} missing_record_policy={} duration_ms={}",
            config.schema_version,
            config.missing_record_policy.as_str(),
            started_at.elapsed().as_millis()
        );
        Ok(Self { config })
    }

    /// Appends one record and returns its generated id.
    pub fn insert(&self, user: &NewUser) -> StoreResult<UserId> {
        let id = self.with_repo("user_insert", |repo| repo.insert_user(user))?;
        info!("event=user_insert module=store status=ok user_id={id}");
        Ok(id)
    }

    /// Applies only the fields set in `patch` to the record with `id`.
    ///
    /// Whether an unknown `id` is an error depends on
    /// [`MissingRecordPolicy`].
    pub fn update(&self, id: UserId, patch: &UserPatch) -> StoreResult<()> {
        let matched = self.with_repo("user_update", |repo| repo.update_user(id, patch))?;
        if matched {
            info!("event=user_update module=store status=ok user_id={id}");
            return Ok(());
        }

        match self.config.missing_record_policy {
            MissingRecordPolicy::Ignore => {
                warn!("event=user_update module=store status=noop user_id={id} reason=not_found");
                Ok(())
            }
            MissingRecordPolicy::Reject => {
                warn!("event=user_update module=store status=error user_id={id} error_code=not_found");
                Err(StoreError::NotFound(id))
            }
        }
    }

    /// Reads every record in insertion order, without profile pictures.
    pub fn get_all(&self) -> StoreResult<Vec<UserSummary>> {
        let users = self.with_repo("user_list", |repo| repo.list_users())?;
        info!(
            "event=user_list module=store status=ok count={}",
            users.len()
        );
        Ok(users)
    }

    /// Reads one full record, profile picture included.
    pub fn get(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        self.with_repo("user_get", |repo| repo.get_user(id))
    }

    fn with_repo<T>(
        &self,
        event: &str,
        op: impl FnOnce(&SqliteUserRepository<'_>) -> Result<T, RepoError>,
    ) -> StoreResult<T> {
        let started_at = Instant::now();
        let result = open_db_versioned(&self.config.db_path, self.config.schema_version)
            .map_err(StoreError::from)
            .and_then(|conn| {
                let repo = SqliteUserRepository::try_new(&conn)?;
                Ok(op(&repo)?)
            });

        if let Err(err) = &result {
            error!(
                "event={} module=store status=error duration_ms={} error={}",
                event,
                started_at.elapsed().as_millis(),
                err
            );
        }
        result
    }
}
