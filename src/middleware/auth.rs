//! Token check for protected routes.
//!
//! Reads the credential from the `x-auth-token` header, verifies it through
//! the injected [`TokenAuthenticator`], and stores the resulting
//! [`RequestIdentity`] in request extensions for extractors downstream.
//! Requests without a valid token never reach their handler.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Header carrying the access token. A bare token value, no `Bearer` prefix;
/// this is the convention the web client already speaks.
pub const AUTH_HEADER: &str = "x-auth-token";

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTH_HEADER)
        .ok_or(AuthError::MissingToken)?;

    // A presented but unreadable value is an invalid credential, not a
    // missing one; the empty string fails verification below.
    let token = header.to_str().unwrap_or("");

    let identity = match state.auth.verify(token) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(error = ?err, "access token verification failed");
            return Err(err.into());
        }
    };

    // middleware -> extractor handoff
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderValue, Request, StatusCode};
    use axum::routing::get;
    use axum::{Router, middleware::from_fn_with_state};
    use tower::ServiceExt;

    use super::*;
    use crate::api::extractors::Identity;
    use crate::services::auth::{TokenAuthenticator, TokenIssuer};
    use crate::services::github::GithubClient;
    use crate::state::AppState;

    fn test_state() -> AppState {
        // connect_lazy: no connection is made unless a query runs.
        let db = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/devnet")
            .unwrap();

        AppState::new(
            db,
            Arc::new(TokenAuthenticator::new("test-secret", 0)),
            Arc::new(TokenIssuer::new("test-secret", 36_000)),
            GithubClient::new(None, None).unwrap(),
        )
    }

    fn app(state: AppState) -> Router {
        async fn whoami(Identity(identity): Identity) -> String {
            identity.user_id
        }

        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(from_fn_with_state(state.clone(), require_auth))
            .with_state(state)
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_token_is_401() {
        let res = app(test_state())
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(res.into_body()).await;
        assert_eq!(body["msg"], "No token, authorization denied");
    }

    #[tokio::test]
    async fn invalid_token_is_401() {
        let req = Request::builder()
            .uri("/whoami")
            .header(AUTH_HEADER, "not-a-real-token")
            .body(Body::empty())
            .unwrap();

        let res = app(test_state()).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(res.into_body()).await;
        assert_eq!(body["msg"], "Token is not valid");
    }

    #[tokio::test]
    async fn unreadable_header_value_is_an_invalid_token() {
        // Non-ASCII bytes are legal in a header value but not in a token;
        // the client did present a credential, so the answer is "invalid",
        // not "missing".
        let req = Request::builder()
            .uri("/whoami")
            .header(AUTH_HEADER, HeaderValue::from_bytes(b"\xc3\x28").unwrap())
            .body(Body::empty())
            .unwrap();

        let res = app(test_state()).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(res.into_body()).await;
        assert_eq!(body["msg"], "Token is not valid");
    }

    #[tokio::test]
    async fn valid_token_reaches_handler_with_identity() {
        let state = test_state();
        let token = state.tokens.issue("abc123").unwrap();

        let req = Request::builder()
            .uri("/whoami")
            .header(AUTH_HEADER, token)
            .body(Body::empty())
            .unwrap();

        let res = app(state).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"abc123");
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_401() {
        let state = test_state();
        let forged = TokenIssuer::new("attacker-secret", 36_000)
            .issue("abc123")
            .unwrap();

        let req = Request::builder()
            .uri("/whoami")
            .header(AUTH_HEADER, forged)
            .body(Body::empty())
            .unwrap();

        let res = app(state).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
