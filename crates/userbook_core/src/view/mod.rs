//! Read-only presentation of stored users.
//!
//! Follows a load-snapshot, render-snapshot flow; nothing refreshes live.

pub mod user_list;
