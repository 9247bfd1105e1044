use crate::utils::normalize_email;

/// Gravatar-style default avatar for accounts created without one.
pub fn default_avatar_url(email: &str) -> String {
    let email_hash = format!("{:x}", md5::compute(normalize_email(email)));
    format!("https://www.gravatar.com/avatar/{email_hash}?d=identicon")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_avatar_url_is_stable() {
        let a = default_avatar_url("koqui@example.com");
        let b = default_avatar_url("  KOQUI@example.com ");
        assert_eq!(a, b);
        assert!(a.starts_with("https://www.gravatar.com/avatar/"));
    }

    #[test]
    fn test_default_avatar_url_differs_per_email() {
        assert_ne!(
            default_avatar_url("a@example.com"),
            default_avatar_url("b@example.com")
        );
    }
}
