pub mod error;
pub mod post_repo;
pub mod profile_repo;
pub mod user_repo;
