use bandwidth::RateLimit;

/// Options resolved by the command-line front-end. Read-only during a run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunConfig {
    quiet: bool,
    rate_limit: RateLimit,
}

impl RunConfig {
    /// Creates a configuration.
    #[must_use]
    pub const fn new(quiet: bool, rate_limit: RateLimit) -> Self {
        Self { quiet, rate_limit }
    }

    /// Whether progress reporting and the input prompt are suppressed.
    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    /// Transfer ceiling applied to relayed lines.
    #[must_use]
    pub const fn rate_limit(&self) -> RateLimit {
        self.rate_limit
    }
}
