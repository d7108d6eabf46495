//! CSV ingestion and upsert routine.
//!
//! Validates the upload, walks the file line by line, stages an insert or
//! a full-field update per row, and applies the whole batch with one
//! repository commit. Nothing is persisted if any line fails to parse.

use crate::{ApiError, ApiResult};

use uinfo_core::csv;
use uinfo_db::{StagedUserChanges, UserRepository};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Counts reported back after a successful upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOutcome {
    pub inserted: usize,
    pub updated: usize,
}

/// Ingest an uploaded CSV payload.
///
/// Rejections, in order: empty payload, non-`.csv` file name, any line
/// that is not a valid 6-field record. Rows referencing an unknown
/// identifier are staged as inserts; rows referencing an existing record
/// are staged as full-field updates. The staged batch is committed in a
/// single transaction after the whole file has been consumed.
pub async fn ingest_csv(
    pool: &SqlitePool,
    file_name: &str,
    data: &[u8],
) -> ApiResult<IngestOutcome> {
    if data.is_empty() {
        return Err(ApiError::Validation {
            message: "No file was uploaded".to_string(),
            field: Some("file".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !has_csv_extension(file_name) {
        return Err(ApiError::Validation {
            message: "Invalid file type".to_string(),
            field: Some("file".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Lenient decode; structural validation happens per line
    let text = String::from_utf8_lossy(data);

    let repo = UserRepository::new(pool.clone());
    let mut changes = StagedUserChanges::new();

    for (index, line) in text.lines().enumerate() {
        let user = csv::parse_line(index + 1, line)?;

        match repo.find_by_user_id(&user.user_id).await? {
            Some(_) => changes.stage_update(user),
            None => changes.stage_insert(user),
        }
    }

    repo.commit(&changes).await?;

    let outcome = IngestOutcome {
        inserted: changes.insert_count(),
        updated: changes.update_count(),
    };

    log::info!(
        "CSV upload '{}' processed: {} inserted, {} updated",
        file_name,
        outcome.inserted,
        outcome.updated
    );

    Ok(outcome)
}

/// Case-insensitive check for a `.csv` file extension
fn has_csv_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
