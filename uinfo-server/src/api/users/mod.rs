pub mod ingest;
pub mod list_users_query;
pub mod upload_response;
pub mod user_dto;
pub mod user_list_response;
pub mod users;
