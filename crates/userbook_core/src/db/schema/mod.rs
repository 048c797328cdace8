//! Versioned single-table schema and its drop-and-recreate upgrade path.
//!
//! # Responsibility
//! - Create the `Users` table on first open.
//! - Recreate it wholesale when the stored version is older than requested.
//!
//! # Invariants
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - An upgrade never preserves rows.
//! - A stored version newer than requested is refused, not downgraded.

use crate::db::{DbError, DbResult};
use log::{info, warn};
use rusqlite::Connection;

/// Schema version this binary writes by default.
pub const SCHEMA_VERSION: u32 = 1;

/// Name of the single application table.
pub const USERS_TABLE: &str = "Users";

/// Columns every `Users` table must expose.
pub const USERS_COLUMNS: [&str; 5] = ["id", "name", "age", "salary", "profilePicture"];

const CREATE_USERS_SQL: &str = include_str!("users.sql");
const DROP_USERS_SQL: &str = "DROP TABLE IF EXISTS Users;";

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Ensures the `Users` table exists at `target_version`.
///
/// # Errors
/// - `InvalidSchemaVersion` when `target_version` is zero.
/// - `UnsupportedSchemaVersion` when the file carries a newer version.
pub fn ensure_schema(conn: &mut Connection, target_version: u32) -> DbResult<()> {
    if target_version == 0 {
        return Err(DbError::InvalidSchemaVersion(target_version));
    }

    let current_version = current_user_version(conn)?;
    if current_version > target_version {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: target_version,
        });
    }

    let tx = conn.transaction()?;
    if current_version != 0 && current_version < target_version {
        warn!(
            "event=schema_upgrade module=db status=start from_version={} to_version={} data_preserved=false",
            current_version, target_version
        );
        tx.execute_batch(DROP_USERS_SQL)?;
    }
    tx.execute_batch(CREATE_USERS_SQL)?;
    if current_version != target_version {
        tx.execute_batch(&format!("PRAGMA user_version = {target_version};"))?;
        info!(
            "event=schema_apply module=db status=ok from_version={} to_version={}",
            current_version, target_version
        );
    }
    tx.commit()?;

    Ok(())
}

/// Reads the schema version stamped on the connection's database.
///
/// # Errors
/// - `CorruptSchemaVersion` when the stored tag is negative.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let stored = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, i32>(0))?;
    u32::try_from(stored).map_err(|_| DbError::CorruptSchemaVersion(stored))
}
