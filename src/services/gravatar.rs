/*
 * Responsibility
 * - derive a Gravatar URL from an email address
 * - the address hash is SHA-256 of the trimmed, lowercased email
 */
use sha2::{Digest, Sha256};

/// 200px, PG-rated, with the "mystery man" fallback for unknown emails.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_ascii_lowercase();

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("https://www.gravatar.com/avatar/{digest}?s=200&r=pg&d=mm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized_before_hashing() {
        assert_eq!(
            avatar_url("  John@Example.COM "),
            avatar_url("john@example.com")
        );
    }

    #[test]
    fn url_shape() {
        let url = avatar_url("john@example.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));

        let digest = url
            .trim_start_matches("https://www.gravatar.com/avatar/")
            .split('?')
            .next()
            .unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_emails_get_different_avatars() {
        assert_ne!(avatar_url("a@example.com"), avatar_url("b@example.com"));
    }
}
