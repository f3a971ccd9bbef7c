use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// One input to relay, opened lazily when its turn comes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputSpec {
    /// The process's standard input.
    Stdin,
    /// A file path, used exactly as given on the command line.
    Path(PathBuf),
}

impl InputSpec {
    /// Name used in diagnostics.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Stdin => Cow::Borrowed("stdin"),
            Self::Path(path) => path.to_string_lossy(),
        }
    }

    /// Opens the source for buffered reading.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::Path(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl From<PathBuf> for InputSpec {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<OsString> for InputSpec {
    fn from(path: OsString) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<&str> for InputSpec {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}
