//! Tests for verbosity selection and subscriber setup

#[cfg(test)]
mod tests {
    use dominoes::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER, VERBOSE_LOG_FILTER};
    use dominoes::io::logging::{Verbosity, init};

    // Tests quiet wins over verbose
    // Verified by checking verbose first
    #[test]
    fn test_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    // Tests each verbosity maps to its filter
    #[test]
    fn test_default_filter() {
        assert_eq!(Verbosity::Quiet.default_filter(), QUIET_LOG_FILTER);
        assert_eq!(Verbosity::Normal.default_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(Verbosity::Verbose.default_filter(), VERBOSE_LOG_FILTER);
    }

    // Tests repeated initialisation does not panic
    #[test]
    fn test_init_twice() {
        init(Verbosity::Quiet);
        init(Verbosity::Verbose);
    }
}
