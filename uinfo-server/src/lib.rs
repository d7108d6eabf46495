pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        ingest::{IngestOutcome, ingest_csv},
        list_users_query::ListUsersQuery,
        upload_response::UploadResponse,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        users::{get_user_info, upload_user_info_csv},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
