use jsonwebtoken::{Algorithm, EncodingKey, Header};
use tracing::error;

use crate::error::AppError;
use crate::services::auth::claims::{Claims, UserClaim};

/// Signs access tokens with the shared HS256 secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_seconds: u64,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issue a token for the given user id, expiring `ttl_seconds` from now.
    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now().timestamp();
        let exp = now + self.ttl_seconds as i64;

        let claims = Claims {
            user: UserClaim {
                id: user_id.to_string(),
            },
            iat: now,
            exp,
        };

        let header = Header::new(Algorithm::HS256);
        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign access token");
            AppError::Internal
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn decode_payload(token: &str) -> serde_json::Value {
        let payload = token.split('.').nth(1).expect("token has three segments");
        let bytes = URL_SAFE_NO_PAD.decode(payload).expect("payload is base64url");
        serde_json::from_slice(&bytes).expect("payload is JSON")
    }

    #[test]
    fn payload_nests_user_id() {
        let issuer = TokenIssuer::new("test-secret", 36_000);
        let token = issuer.issue("abc123").unwrap();

        let payload = decode_payload(&token);
        assert_eq!(payload["user"]["id"], "abc123");
    }

    #[test]
    fn expiry_is_ttl_from_issue_time() {
        let issuer = TokenIssuer::new("test-secret", 36_000);
        let token = issuer.issue("abc123").unwrap();

        let payload = decode_payload(&token);
        let iat = payload["iat"].as_i64().unwrap();
        let exp = payload["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, 36_000);
    }

    #[test]
    fn header_declares_hs256() {
        let issuer = TokenIssuer::new("test-secret", 36_000);
        let token = issuer.issue("abc123").unwrap();

        let header = token.split('.').next().unwrap();
        let bytes = URL_SAFE_NO_PAD.decode(header).unwrap();
        let header: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(header["alg"], "HS256");
    }
}
