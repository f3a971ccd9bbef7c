use std::io::{self, BufRead};

use memchr::memchr;

/// Newline-delimited reader over any [`BufRead`] source.
///
/// Lines are raw bytes and keep their `\n` terminator. A final line without
/// a terminator is still returned. Interrupted reads are retried; any other
/// error is returned and whatever part of the current line had been
/// buffered is discarded.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
}

impl<R> LineReader<R> {
    /// Wraps `inner`.
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineReader<R> {
    /// Reads the next line into `line`, replacing its previous contents.
    ///
    /// Returns `Ok(Some(len))` with the line length including any terminator,
    /// or `Ok(None)` once the source is exhausted.
    pub fn read_line(&mut self, line: &mut Vec<u8>) -> io::Result<Option<usize>> {
        line.clear();

        loop {
            let available = match self.inner.fill_buf() {
                Ok(buffer) => buffer,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => {
                    line.clear();
                    return Err(error);
                }
            };

            if available.is_empty() {
                return Ok((!line.is_empty()).then_some(line.len()));
            }

            let (complete, used) = match memchr(b'\n', available) {
                Some(position) => {
                    line.extend_from_slice(&available[..=position]);
                    (true, position + 1)
                }
                None => {
                    line.extend_from_slice(available);
                    (false, available.len())
                }
            };
            self.inner.consume(used);

            if complete {
                return Ok(Some(line.len()));
            }
        }
    }

    /// Converts the reader into an iterator of owned lines.
    pub fn lines(self) -> Lines<R> {
        Lines {
            reader: self,
            finished: false,
        }
    }
}

/// Iterator returned by [`LineReader::lines`]. Stops after the first error.
#[derive(Debug)]
pub struct Lines<R> {
    reader: LineReader<R>,
    finished: bool,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut line = Vec::new();
        match self.reader.read_line(&mut line) {
            Ok(Some(_)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Lines<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::{BufReader, Cursor, Read};

    fn collect(input: &[u8]) -> Vec<Vec<u8>> {
        LineReader::new(input)
            .lines()
            .collect::<io::Result<_>>()
            .expect("in-memory reads succeed")
    }

    /// Hands out data in fixed-size pieces, interleaving an `Interrupted` error.
    struct Choppy {
        data: Vec<u8>,
        position: usize,
        chunk: usize,
        interrupt_next: bool,
    }

    impl Read for Choppy {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupt_next {
                self.interrupt_next = false;
                return Err(io::ErrorKind::Interrupted.into());
            }
            self.interrupt_next = true;
            let end = (self.position + self.chunk.min(buf.len())).min(self.data.len());
            let count = end - self.position;
            buf[..count].copy_from_slice(&self.data[self.position..end]);
            self.position = end;
            Ok(count)
        }
    }

    struct FailAfter {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::other("device vanished")),
                count => Ok(count),
            }
        }
    }

    #[test]
    fn splits_on_newlines_keeping_terminators() {
        assert_eq!(collect(b"a\nbb\n"), [b"a\n".to_vec(), b"bb\n".to_vec()]);
    }

    #[test]
    fn final_line_without_newline_is_kept() {
        assert_eq!(collect(b"a\nlast"), [b"a\n".to_vec(), b"last".to_vec()]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn blank_lines_are_lines() {
        assert_eq!(collect(b"\n\n"), [b"\n".to_vec(), b"\n".to_vec()]);
    }

    #[test]
    fn carriage_returns_and_invalid_utf8_pass_through() {
        assert_eq!(
            collect(b"dos\r\n\xff\xfe\n"),
            [b"dos\r\n".to_vec(), b"\xff\xfe\n".to_vec()]
        );
    }

    #[test]
    fn read_line_reuses_buffer_and_reports_length() {
        let mut reader = LineReader::new(&b"first\nsecond\n"[..]);
        let mut line = b"stale".to_vec();

        assert_eq!(reader.read_line(&mut line).unwrap(), Some(6));
        assert_eq!(line, b"first\n");
        assert_eq!(reader.read_line(&mut line).unwrap(), Some(7));
        assert_eq!(line, b"second\n");
        assert_eq!(reader.read_line(&mut line).unwrap(), None);
        assert!(line.is_empty());
    }

    #[test]
    fn lines_longer_than_the_buffer_are_joined() {
        let long = vec![b'x'; 10_000];
        let mut input = long.clone();
        input.push(b'\n');
        let reader = LineReader::new(BufReader::with_capacity(16, Cursor::new(input.clone())));

        let lines: Vec<_> = reader.lines().map(Result::unwrap).collect();
        assert_eq!(lines, [input]);
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let source = Choppy {
            data: b"one\ntwo\nthree".to_vec(),
            position: 0,
            chunk: 3,
            interrupt_next: true,
        };
        let reader = LineReader::new(BufReader::new(source));

        let lines: Vec<_> = reader.lines().map(Result::unwrap).collect();
        assert_eq!(
            lines,
            [b"one\n".to_vec(), b"two\n".to_vec(), b"three".to_vec()]
        );
    }

    #[test]
    fn hard_error_is_reported_once() {
        let source = FailAfter {
            data: Cursor::new(b"ok\npartial".to_vec()),
        };
        let mut lines = LineReader::new(BufReader::new(source)).lines();

        assert_eq!(lines.next().unwrap().unwrap(), b"ok\n");
        let error = lines.next().unwrap().unwrap_err();
        assert_eq!(error.to_string(), "device vanished");
        assert!(lines.next().is_none());
    }

    proptest! {
        #[test]
        fn concatenated_lines_equal_input(input in proptest::collection::vec(any::<u8>(), 0..512)) {
            let joined: Vec<u8> = collect(&input).concat();
            prop_assert_eq!(joined, input);
        }

        #[test]
        fn only_the_last_line_may_lack_a_newline(input in proptest::collection::vec(any::<u8>(), 0..512)) {
            let lines = collect(&input);
            if let Some((_, init)) = lines.split_last() {
                for line in init {
                    prop_assert_eq!(line.last(), Some(&b'\n'));
                    prop_assert_eq!(memchr(b'\n', &line[..line.len() - 1]), None);
                }
            }
        }
    }
}
