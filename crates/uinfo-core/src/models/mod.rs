pub mod sort_direction;
pub mod user;
