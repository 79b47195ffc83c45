//! Line accumulation
//!
//! Collects incoming bytes into newline-terminated lines, discarding
//! oversized or non-ASCII input instead of truncating it into something
//! that might parse as a different command.

use heapless::String;

/// Maximum accepted line length in bytes (excluding the newline)
pub const MAX_LINE_LEN: usize = 32;

/// Errors from line accumulation
///
/// Reported when the terminating newline of a bad line arrives; all bytes
/// of the offending line are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LEN`]
    TooLong,
    /// Line contained a non-ASCII byte
    NonAscii,
}

/// Byte-at-a-time line accumulator
#[derive(Debug, Clone, Default)]
pub struct LineReader {
    buffer: String<MAX_LINE_LEN>,
    error: Option<LineError>,
    /// Completed line handed out on the previous feed; clear lazily
    complete: bool,
}

impl LineReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte
    ///
    /// Returns `Ok(Some(line))` when a newline completes a valid line,
    /// `Ok(None)` while accumulating, or the deferred error when a bad
    /// line terminates.
    pub fn feed(&mut self, byte: u8) -> Result<Option<&str>, LineError> {
        if self.complete {
            self.buffer.clear();
            self.complete = false;
        }

        if byte == b'\n' {
            if let Some(error) = self.error.take() {
                self.buffer.clear();
                return Err(error);
            }
            self.complete = true;
            return Ok(Some(self.buffer.as_str()));
        }

        if self.error.is_some() {
            // Already discarding this line
            return Ok(None);
        }
        if !byte.is_ascii() {
            self.error = Some(LineError::NonAscii);
            return Ok(None);
        }
        if self.buffer.push(byte as char).is_err() {
            self.error = Some(LineError::TooLong);
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed all bytes, asserting nothing completes before the last one,
    /// and return the result of feeding the final byte as an owned line.
    fn feed_all(
        reader: &mut LineReader,
        bytes: &[u8],
    ) -> Result<Option<String<MAX_LINE_LEN>>, LineError> {
        let (last, rest) = bytes.split_last().unwrap();
        for &b in rest {
            assert_eq!(reader.feed(b), Ok(None));
        }
        reader
            .feed(*last)
            .map(|opt| opt.map(|line| String::try_from(line).unwrap()))
    }

    #[test]
    fn test_accumulates_until_newline() {
        let mut reader = LineReader::new();
        let line = feed_all(&mut reader, b"6242\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "6242");
    }

    #[test]
    fn test_consecutive_lines() {
        let mut reader = LineReader::new();
        let first = feed_all(&mut reader, b"s\n").unwrap().unwrap();
        assert_eq!(first.as_str(), "s");
        let second = feed_all(&mut reader, b"c1,2\n").unwrap().unwrap();
        assert_eq!(second.as_str(), "c1,2");
    }

    #[test]
    fn test_oversized_line_is_discarded() {
        let mut reader = LineReader::new();
        for _ in 0..MAX_LINE_LEN + 10 {
            assert_eq!(reader.feed(b'6'), Ok(None));
        }
        assert_eq!(reader.feed(b'\n'), Err(LineError::TooLong));
        // Next line parses cleanly
        let line = feed_all(&mut reader, b"s\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "s");
    }

    #[test]
    fn test_non_ascii_is_discarded() {
        let mut reader = LineReader::new();
        assert_eq!(reader.feed(b'6'), Ok(None));
        assert_eq!(reader.feed(0xFF), Ok(None));
        assert_eq!(reader.feed(b'2'), Ok(None));
        assert_eq!(reader.feed(b'\n'), Err(LineError::NonAscii));
    }
}
