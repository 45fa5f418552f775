pub mod auth;
pub mod github;
pub mod gravatar;
pub mod password;
