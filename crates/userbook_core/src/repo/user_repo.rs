//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert, patch-update and read APIs over the `Users` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Constructors reject connections whose schema was never ensured.
//! - Updates only assign columns present in the `UserPatch`.
//! - Read paths reject NULL persisted fields instead of masking them.

use crate::db::schema::{current_user_version, latest_version, USERS_COLUMNS, USERS_TABLE};
use crate::db::DbError;
use crate::model::user::{NewUser, UserId, UserPatch, UserRecord, UserSummary};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SUMMARY_SELECT_SQL: &str = "SELECT id, name, age, salary FROM Users";
const USER_RECORD_SELECT_SQL: &str = "SELECT id, name, age, salary, profilePicture FROM Users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// Connection schema version is 0; `open_db*` was never run on it.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema is not initialized (expected version {expected_version}, found {actual_version})"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "user repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "user repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    /// Appends one record and returns its storage-assigned id.
    fn insert_user(&self, user: &NewUser) -> RepoResult<UserId>;
    /// Applies `patch` to the row with `id`. Returns whether that row exists.
    fn update_user(&self, id: UserId, patch: &UserPatch) -> RepoResult<bool>;
    /// Gets one full record, profile picture included.
    fn get_user(&self, id: UserId) -> RepoResult<Option<UserRecord>>;
    /// Lists every record in insertion order without the profile picture.
    fn list_users(&self) -> RepoResult<Vec<UserSummary>>;
}

/// SQLite-backed user repository bound to one connection.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a connection with an ensured schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_user_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, user: &NewUser) -> RepoResult<UserId> {
        self.conn.execute(
            "INSERT INTO Users (name, age, salary, profilePicture)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                user.name.as_str(),
                user.age,
                user.salary,
                user.profile_picture.as_slice(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_user(&self, id: UserId, patch: &UserPatch) -> RepoResult<bool> {
        if patch.is_empty() {
            return user_exists(self.conn, id);
        }

        let mut assignments: Vec<&str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(name) = &patch.name {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }
        if let Some(age) = patch.age {
            assignments.push("age = ?");
            bind_values.push(Value::Integer(i64::from(age)));
        }
        if let Some(salary) = patch.salary {
            assignments.push("salary = ?");
            bind_values.push(Value::Real(salary));
        }
        if let Some(picture) = &patch.profile_picture {
            assignments.push("profilePicture = ?");
            bind_values.push(Value::Blob(picture.clone()));
        }
        bind_values.push(Value::Integer(id));

        let sql = format!("UPDATE Users SET {} WHERE id = ?;", assignments.join(", "));
        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;

        Ok(changed > 0)
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_RECORD_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_record_row(row)?));
        }

        Ok(None)
    }

    fn list_users(&self) -> RepoResult<Vec<UserSummary>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SUMMARY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_summary_row(row)?);
        }

        Ok(users)
    }
}

fn parse_user_summary_row(row: &Row<'_>) -> RepoResult<UserSummary> {
    let id: UserId = row.get("id")?;
    Ok(UserSummary {
        id,
        name: required(row.get("name")?, id, "name")?,
        age: required(row.get("age")?, id, "age")?,
        salary: required(row.get("salary")?, id, "salary")?,
    })
}

fn parse_user_record_row(row: &Row<'_>) -> RepoResult<UserRecord> {
    let summary = parse_user_summary_row(row)?;
    let profile_picture: Option<Vec<u8>> = row.get("profilePicture")?;

    Ok(UserRecord {
        id: summary.id,
        name: summary.name,
        age: summary.age,
        salary: summary.salary,
        profile_picture: profile_picture.unwrap_or_default(),
    })
}

fn required<T>(value: Option<T>, id: UserId, column: &str) -> RepoResult<T> {
    value.ok_or_else(|| RepoError::InvalidData(format!("NULL in Users.{column} for id {id}")))
}

fn user_exists(conn: &Connection, id: UserId) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM Users WHERE id = ?1);",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn ensure_user_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version = current_user_version(conn)?;
    if actual_version == 0 {
        return Err(RepoError::UninitializedConnection {
            expected_version: latest_version(),
            actual_version,
        });
    }

    if !table_exists(conn, USERS_TABLE)? {
        return Err(RepoError::MissingRequiredTable(USERS_TABLE));
    }

    for column in USERS_COLUMNS {
        if !table_has_column(conn, USERS_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: USERS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
