pub mod error;
pub mod repositories;
pub mod staged_changes;


pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use staged_changes::StagedUserChanges;
