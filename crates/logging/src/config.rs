use std::env;
use std::ffi::OsString;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "PV_LIKE_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or empty.
pub const DEFAULT_FILTER: &str = "off";

/// Tracing configuration resolved from the environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogConfig {
    filter: String,
}

impl LogConfig {
    /// Uses `filter` verbatim as an `EnvFilter` directive string.
    #[must_use]
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
        }
    }

    /// Reads [`LOG_ENV_VAR`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(env::var_os(LOG_ENV_VAR))
    }

    /// Resolves the configuration from an optional raw variable value.
    ///
    /// Missing, empty or non-UTF-8 values fall back to [`DEFAULT_FILTER`].
    #[must_use]
    pub fn from_value(value: Option<OsString>) -> Self {
        let filter = value
            .and_then(|raw| raw.into_string().ok())
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        Self { filter }
    }

    /// Directive string handed to the subscriber.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Reports whether the configuration disables tracing entirely.
    #[must_use]
    pub fn is_off(&self) -> bool {
        self.filter.eq_ignore_ascii_case("off")
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_default() {
        let config = LogConfig::from_value(None);
        assert_eq!(config.filter(), DEFAULT_FILTER);
        assert!(config.is_off());
    }

    #[test]
    fn blank_value_uses_default() {
        let config = LogConfig::from_value(Some(OsString::from("  ")));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn value_is_trimmed() {
        let config = LogConfig::from_value(Some(OsString::from(" pv_like=debug ")));
        assert_eq!(config.filter(), "pv_like=debug");
        assert!(!config.is_off());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_uses_default() {
        use std::os::unix::ffi::OsStringExt;

        let config = LogConfig::from_value(Some(OsString::from_vec(vec![0xff, 0xfe])));
        assert_eq!(config.filter(), DEFAULT_FILTER);
    }
}
