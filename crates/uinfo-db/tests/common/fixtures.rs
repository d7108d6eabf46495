#![allow(dead_code)]

use uinfo_core::User;

/// Creates a test User with sensible defaults
pub fn create_test_user(user_id: &str, username: &str) -> User {
    User {
        user_id: user_id.to_string(),
        username: username.to_string(),
        age: 30,
        city: "NYC".to_string(),
        phone_number: "555-0001".to_string(),
        email: format!("{}@example.com", username),
    }
}
