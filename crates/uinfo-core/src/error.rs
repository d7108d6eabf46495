use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("CSV line {line}: expected {expected} fields, found {found} {location}")]
    InvalidFieldCount {
        line: usize,
        expected: usize,
        found: usize,
        location: ErrorLocation,
    },

    #[error("CSV line {line}: age is not an integer: {value:?} {location}")]
    InvalidAge {
        line: usize,
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort direction: {value} {location}")]
    InvalidSortDirection {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
