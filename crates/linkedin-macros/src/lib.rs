/// Create a [`HashSet`](std::collections::HashSet) from a list of `&str`,
/// which is useful for the scopes of an authorization request.
///
/// Example:
///
/// ```
/// use linkedin_macros::scopes;
///
/// let scopes = scopes!("r_liteprofile", "w_member_social");
/// assert_eq!(scopes.len(), 2);
/// ```
#[macro_export]
macro_rules! scopes {
    ($($key:expr),* $(,)?) => {{
        let mut container = ::std::collections::HashSet::new();
        $(
            container.insert($key.to_owned());
        )*
        container
    }};
}

#[cfg(test)]
mod test {
    #[test]
    fn test_scopes() {
        let scopes = scopes!("profile", "email", "w_member_social");
        assert_eq!(scopes.len(), 3);
        assert!(scopes.contains("profile"));
        assert!(scopes.contains("email"));
        assert!(scopes.contains("w_member_social"));
    }

    #[test]
    fn test_scopes_deduplicates() {
        let scopes = scopes!("profile", "profile");
        assert_eq!(scopes.len(), 1);
    }
}
