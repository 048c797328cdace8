//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Ensure the `Users` schema before returning a usable connection.
//!
//! # Invariants
//! - Returned connections carry the requested schema version.

use super::schema::{ensure_schema, SCHEMA_VERSION};
use super::DbResult;
use log::{debug, error};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if absent) a database file at the default schema version.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_versioned(path, SCHEMA_VERSION)
}

/// Opens a database file and brings it to `schema_version`.
///
/// # Side effects
/// - Creates the file when it does not exist.
/// - Drops and recreates `Users` when the stored version is older.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_versioned(path: impl AsRef<Path>, schema_version: u32) -> DbResult<Connection> {
    let started_at = Instant::now();
    debug!("event=db_open module=db status=start mode=file");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(&mut conn, schema_version, "file", started_at)?;
    Ok(conn)
}

/// Opens an in-memory database at the default schema version.
///
/// Contents vanish when the connection drops, so this is only useful for
/// single-connection callers such as repository tests.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    debug!("event=db_open module=db status=start mode=memory");

    let mut conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(&mut conn, SCHEMA_VERSION, "memory", started_at)?;
    Ok(conn)
}

fn finish_open(
    conn: &mut Connection,
    schema_version: u32,
    mode: &str,
    started_at: Instant,
) -> DbResult<()> {
    match bootstrap_connection(conn, schema_version) {
        Ok(()) => {
            debug!(
                "event=db_open module=db status=ok mode={} schema_version={} duration_ms={}",
                mode,
                schema_version,
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, schema_version: u32) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    ensure_schema(conn, schema_version)?;
    Ok(())
}
