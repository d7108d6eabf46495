//! User entity - the single record type this service stores.

use serde::{Deserialize, Serialize};

/// A user record keyed by a caller-supplied identifier.
///
/// The identifier is never reassigned once a record exists; every other
/// field is replaced wholesale when a CSV upload references the same
/// identifier again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub age: i32,
    pub city: String,
    pub phone_number: String,
    pub email: String,
}
