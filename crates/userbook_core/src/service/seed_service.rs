//! Startup seeding use-case.
//!
//! # Responsibility
//! - Define the fixed demonstration records and the updates applied to them.
//! - Run the startup sequence: seed, update, read back a snapshot.
//!
//! # Invariants
//! - Steps run sequentially; the first failure aborts the sequence.
//! - Seeding appends on every run; it never checks for prior seeds.

use crate::model::user::{NewUser, UserId, UserPatch, UserSummary};
use crate::store::{StoreResult, UserStore};
use log::info;

/// Returns the five records inserted on startup, in insertion order.
pub fn seed_users() -> Vec<NewUser> {
    vec![
        NewUser::new("Alice", 30, 50000.0),
        NewUser::new("Bob", 25, 45000.0),
        NewUser::new("Charlie", 28, 55000.0),
        NewUser::new("Diana", 35, 60000.0),
        NewUser::new("Eve", 22, 40000.0),
    ]
}

/// Returns the patches applied after seeding, keyed by record id.
pub fn seed_updates() -> Vec<(UserId, UserPatch)> {
    vec![
        (
            1,
            UserPatch::new()
                .with_name("Alice Updated")
                .with_age(31)
                .with_salary(51000.0)
                .with_profile_picture(Vec::new()),
        ),
        (
            2,
            UserPatch::new()
                .with_name("Bob Updated")
                .with_age(26)
                .with_salary(46000.0)
                .with_profile_picture(Vec::new()),
        ),
    ]
}

/// Inserts seeds, applies seed updates and returns the resulting snapshot.
pub fn run_startup(store: &UserStore) -> StoreResult<Vec<UserSummary>> {
    let seeds = seed_users();
    for user in &seeds {
        store.insert(user)?;
    }

    let updates = seed_updates();
    for (id, patch) in &updates {
        store.update(*id, patch)?;
    }

    info!(
        "event=startup_seed module=service status=ok inserted={} updated={}",
        seeds.len(),
        updates.len()
    );

    store.get_all()
}
