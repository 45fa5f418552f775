use serde::{Deserialize, Serialize};

/// Payload carried by an access token.
///
/// The `user.id` nesting is part of the wire contract with the web client;
/// flattening it would break every token already in circulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: UserClaim,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaim {
    pub id: String,
}
