mod sort_direction;
mod user;
