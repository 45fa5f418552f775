use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::{AuthError, RequestIdentity};
use crate::state::AppState;

/// Extractor that hands the verified [`RequestIdentity`] to a handler.
/// The auth middleware must have inserted it into request extensions;
/// if it is absent the route was not behind the middleware, and we
/// answer 401 rather than run the handler anonymously.
pub struct Identity(pub RequestIdentity);

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .cloned()
            .map(Identity)
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}
