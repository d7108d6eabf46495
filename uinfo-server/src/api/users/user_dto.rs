use uinfo_core::User;

use serde::Serialize;

/// User DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub user_id: String,
    pub username: String,
    pub age: i32,
    pub city: String,
    pub phone_number: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            user_id: u.user_id,
            username: u.username,
            age: u.age,
            city: u.city,
            phone_number: u.phone_number,
            email: u.email,
        }
    }
}
