use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::auth::claims::Claims;

/// Why a request failed authentication. The HTTP layer maps both variants
/// to 401; the distinction only changes the message body and the logs.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no token on request")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Identity attached to a request once its token has been verified.
///
/// `user_id` is kept as the raw claim string; rows are keyed by UUID, so
/// handlers promote it at the database boundary via [`Self::user_uuid`].
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    pub user_id: String,
}

impl RequestIdentity {
    pub fn user_uuid(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.user_id).map_err(|_| {
            tracing::warn!(user_id = %self.user_id, "identity user id is not a UUID");
            AppError::Internal
        })
    }
}

/// HS256 access-token verifier.
///
/// - Signature and `exp` are checked by `jsonwebtoken`; `leeway` widens the
///   expiry check for clock skew (0 = exact).
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenAuthenticator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenAuthenticator")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenAuthenticator {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify signature and expiry, then surface the claimed identity.
    ///
    /// Purely CPU-bound; no I/O and no async.
    pub fn verify(&self, token: &str) -> Result<RequestIdentity, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(RequestIdentity {
            user_id: data.claims.user.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::claims::UserClaim;
    use crate::services::auth::issuer::TokenIssuer;
    use jsonwebtoken::{EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn authenticator() -> TokenAuthenticator {
        TokenAuthenticator::new(SECRET, 0)
    }

    fn sign(secret: &str, claims: &impl serde::Serialize) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issued_token_round_trips() {
        let token = TokenIssuer::new(SECRET, 36_000).issue("abc123").unwrap();

        let identity = authenticator().verify(&token).unwrap();
        assert_eq!(identity.user_id, "abc123");
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let token = TokenIssuer::new("other-secret", 36_000)
            .issue("abc123")
            .unwrap();

        let err = authenticator().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn rejects_expired_token() {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            user: UserClaim {
                id: "abc123".to_string(),
            },
            iat: now - 40_000,
            exp: now - 4_000,
        };

        let err = authenticator().verify(&sign(SECRET, &claims)).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn leeway_tolerates_recent_expiry() {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            user: UserClaim {
                id: "abc123".to_string(),
            },
            iat: now - 36_030,
            exp: now - 30,
        };
        let token = sign(SECRET, &claims);

        assert!(authenticator().verify(&token).is_err());
        assert!(TokenAuthenticator::new(SECRET, 60).verify(&token).is_ok());
    }

    #[test]
    fn rejects_token_without_expiry() {
        let claims = serde_json::json!({
            "user": { "id": "abc123" },
            "iat": chrono::Utc::now().timestamp(),
        });

        let err = authenticator().verify(&sign(SECRET, &claims)).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn rejects_garbage() {
        let err = authenticator().verify("not-a-jwt").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn uuid_promotion() {
        let id = Uuid::new_v4();
        let identity = RequestIdentity {
            user_id: id.to_string(),
        };
        assert_eq!(identity.user_uuid().unwrap(), id);

        let identity = RequestIdentity {
            user_id: "abc123".to_string(),
        };
        assert!(identity.user_uuid().is_err());
    }
}
