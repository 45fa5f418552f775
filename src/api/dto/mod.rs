pub mod auth;
pub mod posts;
pub mod profile;
pub mod users;

/// Format sanity check, not RFC 5322. Good enough to catch the typos the
/// signup form lets through.
pub(crate) fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !value.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::looks_like_email;

    #[test]
    fn accepts_plausible_addresses() {
        assert!(looks_like_email("john@example.com"));
        assert!(looks_like_email("j.doe+tag@mail.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("john"));
        assert!(!looks_like_email("john@"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("john@example"));
        assert!(!looks_like_email("jo hn@example.com"));
        assert!(!looks_like_email("john@exa@mple.com"));
    }
}
