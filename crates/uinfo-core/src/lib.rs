pub mod csv;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use csv::{CSV_FIELD_COUNT, parse_line};
pub use error::{CoreError, Result};
pub use models::sort_direction::SortDirection;
pub use models::user::User;
