#[cfg(test)]
mod tests {
    use upkeep::libs::compare::update_available;
    use upkeep::libs::probe::SENTINEL_VERSION;

    #[test]
    fn test_identical_versions_mean_no_update() {
        assert!(!update_available("1.0.0", "1.0.0"));
        assert!(!update_available("v2.3.1", "v2.3.1"));
        assert!(!update_available(SENTINEL_VERSION, SENTINEL_VERSION));
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        // A tag differing only in case is the same release.
        assert!(!update_available("V1.0.0", "v1.0.0"));
        assert!(!update_available("1.0.0-RC1", "1.0.0-rc1"));
    }

    #[test]
    fn test_newer_remote_is_available() {
        assert!(update_available("1.0.0", "1.0.1"));
        assert!(!update_available("1.0.1", "1.0.0"));
    }

    #[test]
    fn test_antisymmetry_for_distinct_versions() {
        let pairs = [
            ("1.0.0", "1.0.1"),
            ("0.9.0", "1.0.0"),
            ("a", "b"),
            ("v1.2", "v1.10"),
            (SENTINEL_VERSION, "0.9.0"),
        ];
        for (a, b) in pairs {
            assert_ne!(update_available(a, b), update_available(b, a), "antisymmetry violated for ({}, {})", a, b);
        }
    }

    #[test]
    fn test_sentinel_is_always_oldest() {
        // An installation whose version could not be read accepts any
        // published release, even one that would sort below the sentinel
        // lexicographically.
        assert!(update_available(SENTINEL_VERSION, "0.9.0"));
        assert!(update_available(SENTINEL_VERSION, "0.0.0"));
        assert!(update_available(SENTINEL_VERSION, "zzz"));
        assert!(!update_available("0.9.0", SENTINEL_VERSION));
        assert!(!update_available("0.0.0", SENTINEL_VERSION));
    }

    #[test]
    fn test_known_limitation_lexicographic_ordering_is_not_semver() {
        // The ordering is plain case-insensitive string comparison, kept for
        // compatibility with the managed application's historical behavior.
        // A semantic-version comparison would report an update for both of
        // these pairs; the lexicographic one does not.
        assert!(!update_available("2.0.0", "10.0.0"));
        assert!(!update_available("1.9.0", "1.10.0"));
    }
}
