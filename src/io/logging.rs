//! Diagnostic log setup

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// How chatty diagnostics on stderr should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Every applied action
    Verbose,
}

impl Verbosity {
    /// Pick the verbosity from the two CLI flags, `quiet` winning
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Filter directive used when `RUST_LOG` is unset
    pub const fn default_filter(self) -> &'static str {
        match self {
            Self::Quiet => QUIET_LOG_FILTER,
            Self::Normal => DEFAULT_LOG_FILTER,
            Self::Verbose => VERBOSE_LOG_FILTER,
        }
    }
}

/// Install the global stderr subscriber
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice is
/// harmless; the second install is ignored.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_filter()));

    // Fails only when a global subscriber is already set
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
