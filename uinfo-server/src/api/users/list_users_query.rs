use uinfo_core::SortDirection;

use serde::Deserialize;

/// Query parameters for listing users
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// Sort direction over username (default: ascending)
    #[serde(default)]
    pub sort: SortDirection,
    /// Maximum number of records to return; must be positive.
    /// Falls back to the configured default page size when omitted.
    pub limit: Option<i64>,
}
