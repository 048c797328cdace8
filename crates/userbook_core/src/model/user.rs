//! User domain model.
//!
//! # Responsibility
//! - Define the canonical user record stored in the `Users` table.
//! - Express partial updates as an explicit patch instead of nullable columns.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never reassigned.
//! - A `UserPatch` field set to `None` leaves the stored value untouched;
//!   `Some(empty)` or `Some(0)` is a real assignment.

use serde::{Deserialize, Serialize};

/// Storage-assigned row identifier (`Users.id`).
pub type UserId = i64;

/// Full persisted user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub salary: f64,
    /// Opaque image bytes. Empty when no picture was provided.
    #[serde(rename = "profilePicture")]
    pub profile_picture: Vec<u8>,
}

/// Insert payload; the identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub salary: f64,
    pub profile_picture: Vec<u8>,
}

impl NewUser {
    /// Creates an insert payload with an empty profile picture.
    pub fn new(name: impl Into<String>, age: i32, salary: f64) -> Self {
        Self {
            name: name.into(),
            age,
            salary,
            profile_picture: Vec::new(),
        }
    }

    pub fn with_profile_picture(mut self, picture: impl Into<Vec<u8>>) -> Self {
        self.profile_picture = picture.into();
        self
    }
}

/// Sparse update for one user record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub salary: Option<f64>,
    pub profile_picture: Option<Vec<u8>>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_profile_picture(mut self, picture: impl Into<Vec<u8>>) -> Self {
        self.profile_picture = Some(picture.into());
        self
    }

    /// Returns whether this patch assigns no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.salary.is_none()
            && self.profile_picture.is_none()
    }
}

/// Read-all projection used by the list view.
///
/// The profile picture is intentionally not projected on this path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub salary: f64,
}

impl From<UserRecord> for UserSummary {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            age: value.age,
            salary: value.salary,
        }
    }
}
