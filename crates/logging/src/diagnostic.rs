use std::borrow::Cow;
use std::fmt;

/// How serious a [`Diagnostic`] is.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Severity {
    /// Informational notice, such as the waiting-for-input prompt.
    Info,
    /// Something went wrong but the run continues as normal.
    Warning,
    /// An operation failed; the affected source is skipped.
    Error,
}

impl Severity {
    /// Prefix rendered in front of the diagnostic text.
    ///
    /// Errors carry no prefix so they read like `perror(3)` output.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Info | Self::Error => "",
            Self::Warning => "warning: ",
        }
    }
}

/// A single user-facing diagnostic line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    text: Cow<'static, str>,
}

impl Diagnostic {
    /// Builds a diagnostic with an explicit severity.
    pub fn new(severity: Severity, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// Shorthand for [`Severity::Info`].
    pub fn info(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Shorthand for [`Severity::Warning`].
    pub fn warning(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Shorthand for [`Severity::Error`].
    pub fn error(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Severity of the diagnostic.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Text without the severity prefix.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.severity.prefix(), self.text)
    }
}
