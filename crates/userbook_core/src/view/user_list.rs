//! Static list rendering of a user snapshot.
//!
//! # Responsibility
//! - Load the full record list once and render it as text rows.
//!
//! # Invariants
//! - Rendering never writes to the store.
//! - Rows keep snapshot order; no sorting or filtering.

use crate::model::user::UserSummary;
use crate::store::{StoreResult, UserStore};
use std::io::{self, Write};

/// Immutable snapshot of user rows ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListView {
    rows: Vec<UserSummary>,
}

impl UserListView {
    /// Reads every record from `store` into a new snapshot.
    pub fn load(store: &UserStore) -> StoreResult<Self> {
        Ok(Self::from_rows(store.get_all()?))
    }

    pub fn from_rows(rows: Vec<UserSummary>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[UserSummary] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes one line per row.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for row in &self.rows {
            writeln!(out, "{}", format_row(row))?;
        }
        out.flush()
    }
}

/// Formats one row as `Name: <name>, Age: <age>, Salary: <salary>`.
pub fn format_row(row: &UserSummary) -> String {
    format!(
        "Name: {}, Age: {}, Salary: {}",
        row.name,
        row.age,
        format_salary(row.salary)
    )
}

/// Renders `salary` the way the JVM prints a `Double`.
///
/// Plain decimals with at least one fractional digit in `[1e-3, 1e7)`,
/// `d.dddE<exp>` outside it, and `NaN` / `Infinity` for non-finite values.
pub fn format_salary(salary: f64) -> String {
    if salary.is_nan() {
        return "NaN".to_string();
    }
    if salary.is_infinite() {
        let sign = if salary.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    let magnitude = salary.abs();
    if salary == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = format!("{salary}");
        return if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        };
    }

    let scientific = format!("{salary:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}
