/*
 * Responsibility
 * - password hashing/verification (Argon2id, PHC string format)
 * - verification failure is a plain `false`; callers decide the message
 */
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};
use tracing::error;

use crate::error::AppError;

pub fn hash(password: &str) -> Result<String, AppError> {
    // 16 bytes of entropy per hash.
    let mut salt_bytes = [0u8; 16];
    getrandom::fill(&mut salt_bytes).expect("getrandom failed");

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
        error!(error = %e, "failed to encode password salt");
        AppError::Internal
    })?;

    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "failed to hash password");
            AppError::Internal
        })?
        .to_string();

    Ok(phc)
}

pub fn verify(phc: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let phc = hash("hunter42").unwrap();
        assert!(verify(&phc, "hunter42"));
        assert!(!verify(&phc, "hunter43"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash("hunter42").unwrap();
        let b = hash("hunter42").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify("not-a-phc-string", "hunter42"));
    }
}
