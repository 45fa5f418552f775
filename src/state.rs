/*
 * Responsibility
 * - shared context handed to the Router (AppState)
 * - Clone is expected to be cheap (PgPool/Arc/reqwest::Client inside)
 */
use std::sync::Arc;

use crate::services::auth::{TokenAuthenticator, TokenIssuer};
use crate::services::github::GithubClient;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub auth: Arc<TokenAuthenticator>,
    pub tokens: Arc<TokenIssuer>,
    pub github: GithubClient,
}

impl AppState {
    pub fn new(
        db: sqlx::PgPool,
        auth: Arc<TokenAuthenticator>,
        tokens: Arc<TokenIssuer>,
        github: GithubClient,
    ) -> Self {
        Self {
            db,
            auth,
            tokens,
            github,
        }
    }
}
