//! User REST API handlers
//!
//! Upload a CSV of user records and read them back sorted and truncated.

use crate::api::users::ingest::ingest_csv;
use crate::{
    ApiError, ApiResult, AppState, ListUsersQuery, UploadResponse, UserDto, UserListResponse,
};

use uinfo_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Multipart, Query, State},
};
use bytes::Bytes;
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/users/csv
///
/// Upload a CSV file (multipart part named "file") and upsert each row
/// keyed by user identifier.
pub async fn upload_user_info_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            upload = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) = upload.ok_or_else(|| ApiError::Validation {
        message: "No file was uploaded".to_string(),
        field: Some("file".into()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let outcome = ingest_csv(&state.pool, &file_name, &data).await?;

    Ok(Json(UploadResponse {
        message: "CSV file uploaded and processed successfully".to_string(),
        inserted: outcome.inserted,
        updated: outcome.updated,
    }))
}

/// GET /api/v1/users
///
/// List users ordered by username in the requested direction, truncated
/// to the requested limit (config default when omitted).
pub async fn get_user_info(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let limit = query.limit.unwrap_or(state.api.default_page_size);

    if limit <= 0 {
        return Err(ApiError::Validation {
            message: "Limit must be a positive integer.".to_string(),
            field: Some("limit".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all_sorted(query.sort, limit).await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}
