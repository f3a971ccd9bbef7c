//! Fixtures shared by the workspace's unit and integration tests.
//!
//! Nothing here is meant for production code: helpers panic on I/O failure
//! so tests stay short.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Writes `contents` to `dir/name` and returns the full path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_input(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents)
        .unwrap_or_else(|error| panic!("write fixture {}: {error}", path.display()));
    path
}

/// A temporary directory pre-populated with named input files.
pub struct InputDir {
    dir: TempDir,
    paths: Vec<PathBuf>,
}

impl InputDir {
    /// Creates an empty fixture directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create fixture dir"),
            paths: Vec::new(),
        }
    }

    /// Adds a file and returns its path.
    pub fn add(&mut self, name: &str, contents: &[u8]) -> PathBuf {
        let path = write_input(self.dir.path(), name, contents);
        self.paths.push(path.clone());
        path
    }

    /// Path inside the directory that is guaranteed not to exist.
    #[must_use]
    pub fn missing(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        assert!(!path.exists(), "{} unexpectedly exists", path.display());
        path
    }

    /// Root of the fixture directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Every file added so far, in insertion order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl Default for InputDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Reader that yields `data` and then fails with `kind` on every later read.
#[derive(Debug)]
pub struct FailingReader {
    data: io::Cursor<Vec<u8>>,
    kind: io::ErrorKind,
}

impl FailingReader {
    /// Serves `data`, then fails.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>, kind: io::ErrorKind) -> Self {
        Self {
            data: io::Cursor::new(data.into()),
            kind,
        }
    }

    fn exhausted(&self) -> bool {
        self.data.position() >= self.data.get_ref().len() as u64
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.exhausted() {
            return Err(io::Error::new(self.kind, "injected read failure"));
        }
        self.data.read(buf)
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.exhausted() {
            return Err(io::Error::new(self.kind, "injected read failure"));
        }
        self.data.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.data.consume(amt);
    }
}

/// Writer that accepts `budget` bytes, then fails with `kind`.
#[derive(Debug)]
pub struct FailingWriter {
    written: Vec<u8>,
    budget: usize,
    kind: io::ErrorKind,
}

impl FailingWriter {
    /// Accepts up to `budget` bytes before failing.
    #[must_use]
    pub const fn new(budget: usize, kind: io::ErrorKind) -> Self {
        Self {
            written: Vec::new(),
            budget,
            kind,
        }
    }

    /// Bytes accepted before the failure.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.budget - self.written.len();
        if room == 0 {
            return Err(io::Error::new(self.kind, "injected write failure"));
        }
        let take = room.min(buf.len());
        self.written.extend_from_slice(&buf[..take]);
        Ok(take)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
