//! CSV line parsing for user uploads.
//!
//! The upload format is deliberately rigid: one user per line, six fields
//! split on the bare comma, no header row, no quoting or escape dialects.
//! Field order is `username,user_id,age,city,phone_number,email`.
//! Fields are taken verbatim; whitespace is not trimmed.

use crate::{CoreError, Result as CoreErrorResult, User};

use std::panic::Location;

use error_location::ErrorLocation;

/// Every data line must split into exactly this many fields.
pub const CSV_FIELD_COUNT: usize = 6;

/// Parse a single CSV data line into a [`User`].
///
/// `line_number` is 1-based and only used for error reporting. A wrong
/// field count and a non-integer age are both parse failures; callers
/// report them to clients as the same "invalid format" rejection.
#[track_caller]
pub fn parse_line(line_number: usize, line: &str) -> CoreErrorResult<User> {
    let fields: Vec<&str> = line.split(',').collect();

    if fields.len() != CSV_FIELD_COUNT {
        return Err(CoreError::InvalidFieldCount {
            line: line_number,
            expected: CSV_FIELD_COUNT,
            found: fields.len(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let age: i32 = fields[2].parse().map_err(|_| CoreError::InvalidAge {
        line: line_number,
        value: fields[2].to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(User {
        username: fields[0].to_string(),
        user_id: fields[1].to_string(),
        age,
        city: fields[3].to_string(),
        phone_number: fields[4].to_string(),
        email: fields[5].to_string(),
    })
}
