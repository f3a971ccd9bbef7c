use std::io;

/// Failures that end a relay run.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Relayed data could not be written to the output stream.
    #[error("error writing to standard output: {source}")]
    Output {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl RelayError {
    pub(crate) fn output(source: io::Error) -> Self {
        Self::Output { source }
    }

    /// Reports whether the reader on the other end of the pipe went away.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Output { source } => source.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

/// Renders `error` without the ` (os error N)` suffix std appends to OS
/// errors, so the text reads like `strerror`.
pub(crate) fn describe_io_error(error: &io::Error) -> String {
    let text = error.to_string();
    if let Some(code) = error.raw_os_error() {
        let suffix = format!(" (os error {code})");
        if let Some(stripped) = text.strip_suffix(suffix.as_str()) {
            return stripped.to_owned();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_error_mentions_cause() {
        let error = RelayError::output(io::Error::other("disk on fire"));
        assert_eq!(
            error.to_string(),
            "error writing to standard output: disk on fire"
        );
        assert!(!error.is_broken_pipe());
    }

    #[test]
    fn broken_pipe_is_detected() {
        let error = RelayError::output(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(error.is_broken_pipe());
    }

    #[test]
    fn os_errors_drop_the_code_suffix() {
        let error = io::Error::from_raw_os_error(2);
        let text = describe_io_error(&error);
        assert!(!text.is_empty());
        assert!(!text.contains("os error"), "{text:?}");
        assert!(error.to_string().starts_with(&text));
    }

    #[test]
    fn custom_errors_are_unchanged() {
        let error = io::Error::other("injected read failure");
        assert_eq!(describe_io_error(&error), "injected read failure");
    }
}
