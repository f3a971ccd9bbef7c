use std::borrow::Borrow;
use std::fmt;
use std::io::{self, Write};

use crate::diagnostic::Diagnostic;

/// Streaming sink that renders [`Diagnostic`] values into an [`io::Write`] target.
///
/// Each diagnostic is written on its own line and flushed straight away. [`write_raw`](Self::write_raw) gives callers that render
/// their own text (the progress line) access to the same writer.
///
/// ```
/// use logging::{Diagnostic, MessageSink};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write_raw(b"\r4 bytes")?;
/// sink.write_raw(b"\n")?;
/// sink.write(Diagnostic::info("ready"))?;
///
/// assert_eq!(sink.into_inner(), b"\r4 bytes\nready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct MessageSink<W> {
    writer: W,
}

impl<W> MessageSink<W> {
    /// Creates a sink that appends a newline after every diagnostic.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a diagnostic followed by a newline.
    pub fn write<D>(&mut self, diagnostic: D) -> io::Result<()>
    where
        D: Borrow<Diagnostic>,
    {
        writeln!(self.writer, "{}", diagnostic.borrow())?;
        self.writer.flush()
    }

    /// Writes pre-rendered bytes verbatim and flushes.
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .finish()
    }
}
